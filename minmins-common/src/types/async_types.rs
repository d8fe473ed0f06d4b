use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::events::FaceEvent;

/// 事件通道容量
pub const CAP: usize = 16;

/// 事件通道类型
pub type FaceChannel<M> = Channel<M, FaceEvent, CAP>;

/// 事件通道接收者类型
pub type FaceEventReceiver<'a, M> = Receiver<'a, M, FaceEvent, CAP>;

/// 事件通道发送者类型
pub type FaceEventSender<'a, M> = Sender<'a, M, FaceEvent, CAP>;

/// Raw mutex usable for the event channel on the target.
pub trait FaceRawMutex: RawMutex + Send + Sync + 'static {}

impl<M: RawMutex + Send + Sync + 'static> FaceRawMutex for M {}
