use jiff::Zoned;
use minmins_common::{DateTime, HardwareError, WallClock};

/// Host wall clock in the system time zone.
pub struct JiffClock;

impl JiffClock {
    pub fn sample(zoned: &Zoned) -> Result<DateTime, HardwareError> {
        let year = u16::try_from(zoned.year()).map_err(|_| HardwareError::ClockUnavailable)?;
        Ok(DateTime::new(
            year,
            zoned.month() as u8,
            zoned.day() as u8,
            zoned.hour() as u8,
            zoned.minute() as u8,
            zoned.second() as u8,
            zoned.weekday().to_sunday_zero_offset() as u8,
            zoned.offset().seconds(),
        ))
    }
}

impl WallClock for JiffClock {
    type Error = HardwareError;

    async fn now(&mut self) -> Result<DateTime, Self::Error> {
        Self::sample(&Zoned::now())
    }
}
