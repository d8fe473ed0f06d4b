use crate::types::AppMessageResult;

pub type SystemResult<T> = core::result::Result<T, SystemError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemError {
    #[error("hardware error: {0}")]
    HardwareError(#[from] HardwareError),
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),
    #[error("protocol error: {0}")]
    ProtocolError(#[from] ProtocolError),
    #[error("transport error: {0:?}")]
    TransportError(AppMessageResult),
    #[error("display error")]
    DisplayError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    #[error("not initialized")]
    NotInitialized,
    #[error("wall clock unavailable")]
    ClockUnavailable,
    #[error("haptic motor failed")]
    HapticFailed,
    #[error("unknown")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    #[error("record not found")]
    NotFound,
    #[error("record corrupted")]
    Corrupted,
    #[error("write failed")]
    WriteFailed,
    #[error("read failed")]
    ReadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    #[error("malformed payload")]
    Malformed,
    #[error("payload does not fit the buffer")]
    Overflow,
}

/// Log adapter for driver errors, which are only known to be `Debug`.
///
/// With `defmt` the value goes through `defmt::Debug2Format`.
pub struct DriverError<'a, E: core::fmt::Debug + ?Sized>(pub &'a E);

impl<E: core::fmt::Debug + ?Sized> core::fmt::Debug for DriverError<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "defmt")]
impl<E: core::fmt::Debug + ?Sized> defmt::Format for DriverError<'_, E> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}", defmt::Debug2Format(self.0))
    }
}
