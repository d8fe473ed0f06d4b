pub mod clock;
pub mod connection;
pub mod face_display;
pub mod haptic;
pub mod platform;
pub mod storage;

pub use clock::*;
pub use connection::*;
pub use face_display::*;
pub use haptic::*;
pub use platform::*;
pub use storage::*;
