use minmins_common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

impl From<bool> for ConnectionState {
    fn from(connected: bool) -> Self {
        if connected {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    Unchanged,
    Lost,
    Restored,
}

/// Companion link tracking. Alerts once on every connected to disconnected edge.
pub struct ConnectivityService<C: ConnectionMonitor, H: HapticDriver> {
    monitor: C,
    haptic: H,
    alert: VibePattern,
    state: ConnectionState,
}

impl<C: ConnectionMonitor, H: HapticDriver> ConnectivityService<C, H> {
    /// Starts out disconnected until `initialize` peeks the monitor.
    pub fn new(monitor: C, haptic: H, alert: VibePattern) -> Self {
        Self {
            monitor,
            haptic,
            alert,
            state: ConnectionState::Disconnected,
        }
    }

    /// Adopt the host's view of the link. Never alerts.
    pub fn initialize(&mut self) -> ConnectionState {
        self.state = ConnectionState::from(self.monitor.peek());
        info!("Connectivity initialized: {:?}", self.state);
        self.state
    }

    pub async fn on_change(&mut self, connected: bool) -> Transition {
        let next = ConnectionState::from(connected);
        let transition = match (self.state, next) {
            (ConnectionState::Connected, ConnectionState::Disconnected) => Transition::Lost,
            (ConnectionState::Disconnected, ConnectionState::Connected) => Transition::Restored,
            _ => Transition::Unchanged,
        };
        self.state = next;

        match transition {
            Transition::Lost => {
                warn!("Companion disconnected");
                if let Err(e) = self.haptic.vibrate(self.alert).await {
                    error!("Failed to play disconnect alert: {:?}", DriverError(&e));
                }
            }
            Transition::Restored => info!("Companion connected"),
            Transition::Unchanged => debug!("Connection state unchanged: {:?}", next),
        }
        transition
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The disconnected glyph is shown only while the link is down.
    pub fn glyph_visible(&self) -> bool {
        self.state == ConnectionState::Disconnected
    }

    pub fn haptic(&self) -> &H {
        &self.haptic
    }
}
