mod companion;
mod config;
mod drivers;

use std::io::BufRead;

use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};
use minmins_common::*;
use minmins_core::face_main;
use minmins_core::storage::FlashSettingsStorage;
use simulated_flash::{PAGE_SIZE, SimulatedFlash};
use static_cell::StaticCell;

use crate::companion::Command;
use crate::drivers::{FrameBuffer, JiffClock, SimulatedLink, SimulatorHaptic};

/// 设置存储所占的 Flash 页数
const SETTINGS_PAGES: usize = 4;

type SimMutex = CriticalSectionRawMutex;

static EVENTS: StaticCell<FaceChannel<SimMutex>> = StaticCell::new();

pub struct Simulator;

impl Platform for Simulator {
    type RawMutex = SimMutex;

    type Storage = FlashSettingsStorage<SimulatedFlash>;
    type Haptic = SimulatorHaptic;
    type Connection = SimulatedLink;
    type Clock = JiffClock;
    type Display = FrameBuffer;

    fn init_logger() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    async fn init() -> PlatformContext<Self> {
        let config = config::get();
        let capacity = SETTINGS_PAGES * PAGE_SIZE;

        let flash = match &config.flash_path {
            Some(path) => SimulatedFlash::open(path, capacity).unwrap_or_else(|e| {
                error!("Failed to open flash image {}: {}", path.display(), e);
                SimulatedFlash::new(capacity)
            }),
            None => SimulatedFlash::new(capacity),
        };
        let storage = FlashSettingsStorage::new(flash, 0..capacity as u32);

        info!("Simulator platform initialized");

        PlatformContext {
            storage,
            haptic: SimulatorHaptic,
            connection: SimulatedLink::new(config.connected),
            clock: JiffClock,
            display: FrameBuffer::new(config.frame_path.clone()),
        }
    }

    fn sys_reset() {
        info!("Simulator platform reset");
    }
}

/// Sends a tick at every minute boundary.
async fn minute_ticker(events: FaceEventSender<'static, SimMutex>) {
    let mut clock = JiffClock;
    loop {
        let second = jiff::Zoned::now().second();
        let wait = 60u64.saturating_sub(second.clamp(0, 59) as u64);
        Timer::after(Duration::from_secs(wait)).await;

        match clock.now().await {
            Ok(sample) => events.send(FaceEvent::TimeEvent(TimeEvent::MinuteTick(sample))).await,
            Err(e) => warn!("Skipping tick: {}", e),
        }
    }
}

/// Reads companion commands from stdin on a host thread.
fn start_companion_console(events: FaceEventSender<'static, SimMutex>) {
    info!("{}", companion::USAGE);
    let spawned = std::thread::Builder::new()
        .name("companion".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        error!("Failed to read companion console: {}", e);
                        return;
                    }
                };
                if let Some(event) = companion_event(&line) {
                    if events.try_send(event).is_err() {
                        warn!("Event queue full, command dropped");
                    }
                }
            }
            info!("Companion console closed");
        });
    if let Err(e) = spawned {
        error!("Failed to start companion console: {}", e);
    }
}

fn companion_event(line: &str) -> Option<FaceEvent> {
    match companion::parse_line(line) {
        Ok(Command::Connect) => connection_event(true),
        Ok(Command::Disconnect) => connection_event(false),
        Ok(Command::Tick) => match JiffClock::sample(&jiff::Zoned::now()) {
            Ok(sample) => Some(FaceEvent::TimeEvent(TimeEvent::MinuteTick(sample))),
            Err(e) => {
                warn!("Wall clock unavailable: {}", e);
                None
            }
        },
        Ok(Command::Inbox(payload)) => {
            Some(FaceEvent::MessageEvent(MessageEvent::InboxReceived(payload)))
        }
        Ok(Command::Dropped(reason)) => {
            Some(FaceEvent::MessageEvent(MessageEvent::InboxDropped(reason)))
        }
        Ok(Command::Sent) => Some(FaceEvent::MessageEvent(MessageEvent::OutboxSent)),
        Ok(Command::Failed(reason)) => {
            Some(FaceEvent::MessageEvent(MessageEvent::OutboxFailed(reason)))
        }
        Ok(Command::Help) => {
            info!("{}", companion::USAGE);
            None
        }
        Err(companion::CompanionError::Empty) => None,
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// The host only reports real changes of the link.
fn connection_event(connected: bool) -> Option<FaceEvent> {
    if SimulatedLink::set(connected) {
        Some(FaceEvent::ConnectionEvent(ConnectionEvent::Changed(connected)))
    } else {
        debug!("Link already {}", if connected { "up" } else { "down" });
        None
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    Simulator::init_logger();

    let channel: &'static FaceChannel<SimMutex> = EVENTS.init(FaceChannel::new());
    let ctx = Simulator::init().await;

    start_companion_console(channel.sender());

    let face = face_main::<Simulator>(ctx, config::get().face, channel.receiver());
    if let Either::First(Err(e)) = select(face, minute_ticker(channel.sender())).await {
        error!("Face task error: {}", e);
        Simulator::sys_reset();
    }
}
