use core::sync::atomic::{AtomicBool, Ordering};

use minmins_common::ConnectionMonitor;

static LINK_UP: AtomicBool = AtomicBool::new(true);

/// Companion link driven from the stdin console.
pub struct SimulatedLink;

impl SimulatedLink {
    pub fn new(connected: bool) -> Self {
        LINK_UP.store(connected, Ordering::SeqCst);
        Self
    }

    /// Update the host's view of the link, returns whether it changed.
    pub fn set(connected: bool) -> bool {
        LINK_UP.swap(connected, Ordering::SeqCst) != connected
    }
}

impl ConnectionMonitor for SimulatedLink {
    fn peek(&self) -> bool {
        LINK_UP.load(Ordering::SeqCst)
    }
}
