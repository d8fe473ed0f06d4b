use crate::types::DateTime;

/// Source of local wall-clock time.
pub trait WallClock {
    type Error: core::fmt::Debug;

    async fn now(&mut self) -> Result<DateTime, Self::Error>;
}

/// Clock frozen at one instant. Handy for boards without an RTC and for tests.
pub struct FixedClock(pub DateTime);

impl WallClock for FixedClock {
    type Error = core::convert::Infallible;

    async fn now(&mut self) -> Result<DateTime, Self::Error> {
        Ok(self.0)
    }
}
