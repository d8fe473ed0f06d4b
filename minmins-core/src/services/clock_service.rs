use core::fmt::Write;

use heapless::String;
use minmins_common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

pub struct ClockService<W: WallClock> {
    initialized: bool,
    clock: W,
    date_format: DateFormat,
    state: ClockState,
    /// Last full sample, source of the date line
    sample: DateTime,
    minute_text: String<2>,
    date_text: String<DATE_TEXT_LEN>,
}

impl<W: WallClock> ClockService<W> {
    pub fn new(clock: W, date_format: DateFormat) -> Self {
        Self {
            initialized: false,
            clock,
            date_format,
            state: ClockState::default(),
            sample: DateTime::epoch(),
            minute_text: String::new(),
            date_text: String::new(),
        }
    }

    /// Synthetic first tick so the face is never blank.
    pub async fn initialize(&mut self) -> SystemResult<()> {
        let sample = match self.clock.now().await {
            Ok(sample) => sample,
            Err(e) => {
                error!("Wall clock unavailable at startup: {:?}", DriverError(&e));
                DateTime::epoch()
            }
        };
        self.update(&sample);
        self.initialized = true;
        info!("Clock service initialized");
        Ok(())
    }

    /// Take a fresh wall-clock sample.
    pub async fn resample(&mut self) -> SystemResult<ClockState> {
        if !self.initialized {
            return Err(SystemError::HardwareError(HardwareError::NotInitialized));
        }
        let sample = self.clock.now().await.map_err(|e| {
            error!("Failed to read wall clock: {:?}", DriverError(&e));
            SystemError::HardwareError(HardwareError::ClockUnavailable)
        })?;
        Ok(self.update(&sample))
    }

    pub fn update(&mut self, sample: &DateTime) -> ClockState {
        self.state = ClockState {
            hour: sample.hour,
            minute: sample.minute,
            second: sample.second,
        };
        self.sample = *sample;

        self.minute_text.clear();
        let _ = write!(Truncating::new(&mut self.minute_text), "{:02}", sample.minute % 100);
        self.date_text = self.date_format.format(sample);

        debug!("Clock updated to {}:{}", sample.hour, self.minute_text.as_str());
        self.state
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn sample(&self) -> &DateTime {
        &self.sample
    }

    pub fn minute_text(&self) -> &str {
        &self.minute_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }
}
