use core::fmt::Write;

use heapless::String;

use crate::types::text::{Truncating, push_truncated, truncated};

/// Longest conditions text kept from a message, in bytes.
pub const CONDITIONS_LEN: usize = 31;
/// Fits any `i32` followed by a degree sign.
pub const TEMPERATURE_LEN: usize = 16;
/// Capacity of the weather line shown on the face.
pub const WEATHER_TEXT_LEN: usize = 48;

/// Latest weather received from the companion. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub temperature: String<TEMPERATURE_LEN>,
    pub conditions: String<CONDITIONS_LEN>,
}

impl WeatherSnapshot {
    pub fn new(degrees: i32, conditions: &str) -> Self {
        let mut temperature = String::new();
        let _ = write!(Truncating::new(&mut temperature), "{}\u{00B0}", degrees);
        Self {
            temperature,
            conditions: truncated(conditions),
        }
    }

    /// `"<temperature>°, <conditions>"`
    pub fn text(&self) -> String<WEATHER_TEXT_LEN> {
        let mut out = String::new();
        push_truncated(&mut out, &self.temperature);
        push_truncated(&mut out, ", ");
        push_truncated(&mut out, &self.conditions);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_text() {
        let snapshot = WeatherSnapshot::new(72, "Cloudy");
        assert_eq!(snapshot.temperature.as_str(), "72°");
        assert_eq!(snapshot.text().as_str(), "72°, Cloudy");
    }

    #[test]
    fn test_negative_and_extreme_temperature() {
        assert_eq!(WeatherSnapshot::new(-5, "Snow").text().as_str(), "-5°, Snow");
        let snapshot = WeatherSnapshot::new(i32::MIN, "Odd");
        assert_eq!(snapshot.temperature.as_str(), "-2147483648°");
    }

    #[test]
    fn test_long_conditions_are_truncated() {
        let long = "Scattered thunderstorms with occasional hail";
        let snapshot = WeatherSnapshot::new(10, long);
        assert_eq!(snapshot.conditions.len(), CONDITIONS_LEN);
        assert!(long.starts_with(snapshot.conditions.as_str()));
    }
}
