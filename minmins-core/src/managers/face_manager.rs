use embedded_graphics::pixelcolor::Rgb888;
use enumset::EnumSet;
use minmins_common::*;

use crate::services::{
    clock_service::ClockService,
    color_service::legible_foreground,
    connectivity_service::{ConnectivityService, Transition},
    placement_service::{RadialMapper, place},
    protocol_service::ProtocolService,
    settings_service::SettingsService,
};

/// Owns all face state and turns events into dirty surfaces.
pub struct FaceManager<S, H, C, W>
where
    S: SettingsStorage,
    H: HapticDriver,
    C: ConnectionMonitor,
    W: WallClock,
{
    settings: SettingsService<S>,
    clock: ClockService<W>,
    connectivity: ConnectivityService<C, H>,
    protocol: ProtocolService,
    mapper: RadialMapper,
    foreground: Rgb888,
    dirty: DirtySurfaces,
}

impl<S, H, C, W> FaceManager<S, H, C, W>
where
    S: SettingsStorage,
    H: HapticDriver,
    C: ConnectionMonitor,
    W: WallClock,
{
    pub fn new(config: &FaceConfig, storage: S, haptic: H, connection: C, clock: W) -> Self {
        Self {
            settings: SettingsService::new(storage, config),
            clock: ClockService::new(clock, config.date_format),
            connectivity: ConnectivityService::new(connection, haptic, config.disconnect_alert),
            protocol: ProtocolService::new(config.weather_placeholder),
            mapper: RadialMapper::new(),
            foreground: legible_foreground(config.default_background.to_rgb()),
            dirty: EnumSet::empty(),
        }
    }

    pub async fn initialize(&mut self) -> SystemResult<()> {
        let background = self.settings.load().await;
        self.foreground = legible_foreground(background.to_rgb());
        self.connectivity.initialize();
        self.clock.initialize().await?;
        self.mapper.update(self.clock.state().hour);
        self.dirty = EnumSet::all();

        info!("Face manager initialized");
        Ok(())
    }

    pub async fn handle_event(&mut self, event: FaceEvent) -> SystemResult<()> {
        debug!("Handling event: {}", event.name());

        match event {
            FaceEvent::TimeEvent(evt) => self.handle_time_event(evt),
            FaceEvent::ConnectionEvent(evt) => self.handle_connection_event(evt).await,
            FaceEvent::MessageEvent(evt) => self.handle_message_event(evt).await?,
        }

        Ok(())
    }

    fn handle_time_event(&mut self, event: TimeEvent) {
        match event {
            TimeEvent::MinuteTick(sample) => self.apply_sample(&sample),
        }
    }

    async fn handle_connection_event(&mut self, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Changed(connected) => {
                if self.connectivity.on_change(connected).await != Transition::Unchanged {
                    self.dirty |= Surface::Bluetooth;
                }
            }
        }
    }

    async fn handle_message_event(&mut self, event: MessageEvent) -> SystemResult<()> {
        match event {
            MessageEvent::InboxReceived(payload) => {
                let message = match AppMessage::decode(&payload) {
                    Ok(message) => message,
                    Err(e) => {
                        debug!("Ignoring undecodable inbox payload: {}", e);
                        return Ok(());
                    }
                };

                let outcome = self.protocol.on_message(&message, &mut self.settings).await;
                if outcome.weather_updated {
                    self.dirty |= Surface::Weather;
                }
                if let Some(background) = outcome.background {
                    self.apply_background(background);
                }

                // show the new colors right away
                let state = self.clock.resample().await?;
                self.mapper.update(state.hour);
                self.dirty |= Surface::Dial | Surface::Minute | Surface::Date;
            }
            MessageEvent::InboxDropped(reason) => {
                error!("Inbox message dropped: {:?}", reason);
            }
            MessageEvent::OutboxSent => {
                info!("Outbox message sent");
            }
            MessageEvent::OutboxFailed(reason) => {
                error!("Outbox message failed: {:?}", reason);
            }
        }
        Ok(())
    }

    fn apply_sample(&mut self, sample: &DateTime) {
        let state = self.clock.update(sample);
        self.mapper.update(state.hour);
        self.dirty |= Surface::Dial | Surface::Minute | Surface::Date;
    }

    fn apply_background(&mut self, background: BackgroundColor) {
        self.foreground = legible_foreground(background.to_rgb());
        // every surface takes the new foreground at once
        self.dirty = EnumSet::all();
        info!(
            "Background {:#x}, foreground {:#x}",
            background.raw(),
            color_to_hex(self.foreground)
        );
    }

    /// Snapshot for the renderer. The placement is derived from the current hour.
    pub fn view(&self) -> FaceView<'_> {
        FaceView {
            background: self.settings.background().to_rgb(),
            foreground: self.foreground,
            placement: place(self.clock.state().hour).unwrap_or(self.mapper.current()),
            minute_text: self.clock.minute_text(),
            date_text: self.clock.date_text(),
            weather_text: self.protocol.weather_text(),
            bluetooth_visible: self.connectivity.glyph_visible(),
        }
    }

    pub fn take_dirty(&mut self) -> DirtySurfaces {
        core::mem::take(&mut self.dirty)
    }

    pub fn dirty(&self) -> DirtySurfaces {
        self.dirty
    }

    pub fn background(&self) -> BackgroundColor {
        self.settings.background()
    }

    pub fn foreground(&self) -> Rgb888 {
        self.foreground
    }

    pub fn settings(&self) -> &SettingsService<S> {
        &self.settings
    }

    pub fn connectivity(&self) -> &ConnectivityService<C, H> {
        &self.connectivity
    }
}
