//! 系统事件定义模块
//!
//! Every host callback reaches the face as one `FaceEvent`:
//! - time ticks (TimeEvent)
//! - companion link changes (ConnectionEvent)
//! - message transport results (MessageEvent)

pub mod face;
pub use face::{ConnectionEvent, FaceEvent, InboxPayload, MessageEvent, TimeEvent};
