use crate::traits::VibePattern;
use crate::types::{BackgroundColor, DateFormat};

/// Persisted record holding the background color.
pub const KEY_BACKGROUND_COLOR: u32 = 0;

/// Placeholder shown until the first weather message arrives.
pub const WEATHER_PLACEHOLDER: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Used when nothing is persisted yet
    pub default_background: BackgroundColor,
    pub date_format: DateFormat,
    /// Pattern played once when the companion link drops
    pub disconnect_alert: VibePattern,
    pub settings_key: u32,
    pub weather_placeholder: &'static str,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            default_background: BackgroundColor::WHITE,
            date_format: DateFormat::MonthDayYear,
            disconnect_alert: VibePattern::DoublePulse,
            settings_key: KEY_BACKGROUND_COLOR,
            weather_placeholder: WEATHER_PLACEHOLDER,
        }
    }
}
