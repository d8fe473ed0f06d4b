/// Companion link status as seen by the host.
///
/// Changes arrive as `ConnectionEvent`s; `peek` is only used at startup.
pub trait ConnectionMonitor {
    fn peek(&self) -> bool;
}

/// Monitor with a fixed answer, for boards without a companion radio.
pub struct FixedConnection(pub bool);

impl ConnectionMonitor for FixedConnection {
    fn peek(&self) -> bool {
        self.0
    }
}
