use crate::traits::{ConnectionMonitor, FaceDisplay, HapticDriver, SettingsStorage, WallClock};
use crate::types::FaceRawMutex;

/// Board support: the concrete host services the face runs on.
pub trait Platform: Sized {
    /// Mutex flavour backing the event channel
    type RawMutex: FaceRawMutex;

    type Storage: SettingsStorage;
    type Haptic: HapticDriver;
    type Connection: ConnectionMonitor;
    type Clock: WallClock;
    type Display: FaceDisplay;

    /// Initialize the logger (optional)
    fn init_logger() {}

    /// Bring up the host services.
    async fn init() -> PlatformContext<Self>;

    /// Resets the MCU/CPU
    fn sys_reset();
}

pub struct PlatformContext<P: Platform> {
    pub storage: P::Storage,
    pub haptic: P::Haptic,
    pub connection: P::Connection,
    pub clock: P::Clock,
    pub display: P::Display,
}
