mod clock;
mod connection;
mod display;
mod haptic;

pub use clock::JiffClock;
pub use connection::SimulatedLink;
pub use display::FrameBuffer;
pub use haptic::SimulatorHaptic;
