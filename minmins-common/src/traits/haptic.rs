#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibePattern {
    ShortPulse,
    LongPulse,
    DoublePulse,
}

impl VibePattern {
    /// On/off segments in milliseconds, starting with "on".
    pub fn segments(&self) -> &'static [u32] {
        match self {
            VibePattern::ShortPulse => &[100],
            VibePattern::LongPulse => &[500],
            VibePattern::DoublePulse => &[100, 100, 100],
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "short" => Some(VibePattern::ShortPulse),
            "long" => Some(VibePattern::LongPulse),
            "double" => Some(VibePattern::DoublePulse),
            _ => None,
        }
    }
}

/// Vibration motor. Fire-and-forget: no completion is reported.
pub trait HapticDriver {
    type Error: core::fmt::Debug;

    async fn vibrate(&mut self, pattern: VibePattern) -> Result<(), Self::Error>;
}

/// Haptic driver for boards without a motor.
pub struct NoHaptic;

impl HapticDriver for NoHaptic {
    type Error = core::convert::Infallible;

    async fn vibrate(&mut self, _pattern: VibePattern) -> Result<(), Self::Error> {
        Ok(())
    }
}
