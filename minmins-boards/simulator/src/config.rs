//! Simulator settings from `MINMINS_*` environment variables.

use std::path::PathBuf;
use std::sync::OnceLock;

use minmins_common::*;

pub const ENV_DEFAULT_BG: &str = "MINMINS_DEFAULT_BG";
pub const ENV_DATE_FORMAT: &str = "MINMINS_DATE_FORMAT";
pub const ENV_ALERT: &str = "MINMINS_ALERT";
pub const ENV_FLASH_PATH: &str = "MINMINS_FLASH_PATH";
pub const ENV_FRAME_PATH: &str = "MINMINS_FRAME_PATH";
pub const ENV_CONNECTED: &str = "MINMINS_CONNECTED";

const DEFAULT_FRAME_PATH: &str = "minmins-frame.ppm";

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub face: FaceConfig,
    /// RAM-only flash when unset
    pub flash_path: Option<PathBuf>,
    pub frame_path: Option<PathBuf>,
    pub connected: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            face: FaceConfig::default(),
            flash_path: None,
            frame_path: Some(PathBuf::from(DEFAULT_FRAME_PATH)),
            connected: true,
        }
    }
}

impl SimulatorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unparsable values are reported and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_BG) {
            match parse_color(&raw) {
                Some(color) => config.face.default_background = color,
                None => warn!("Invalid {}: {}", ENV_DEFAULT_BG, raw),
            }
        }
        if let Some(raw) = lookup(ENV_DATE_FORMAT) {
            match DateFormat::parse(raw.trim()) {
                Some(format) => config.face.date_format = format,
                None => warn!("Invalid {}: {}", ENV_DATE_FORMAT, raw),
            }
        }
        if let Some(raw) = lookup(ENV_ALERT) {
            match VibePattern::parse(raw.trim()) {
                Some(pattern) => config.face.disconnect_alert = pattern,
                None => warn!("Invalid {}: {}", ENV_ALERT, raw),
            }
        }
        if let Some(raw) = lookup(ENV_FLASH_PATH) {
            config.flash_path = non_empty_path(&raw);
        }
        if let Some(raw) = lookup(ENV_FRAME_PATH) {
            config.frame_path = non_empty_path(&raw);
        }
        if let Some(raw) = lookup(ENV_CONNECTED) {
            match parse_bool(&raw) {
                Some(connected) => config.connected = connected,
                None => warn!("Invalid {}: {}", ENV_CONNECTED, raw),
            }
        }

        config
    }
}

/// Process-wide configuration, read once.
pub fn get() -> &'static SimulatorConfig {
    static CONFIG: OnceLock<SimulatorConfig> = OnceLock::new();
    CONFIG.get_or_init(SimulatorConfig::from_env)
}

/// `0xRRGGBB`, `#RRGGBB` or decimal.
pub fn parse_color(raw: &str) -> Option<BackgroundColor> {
    let raw = raw.trim();
    let value = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix('#')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        raw.parse::<u32>().ok()?
    };
    Some(BackgroundColor::from_wire(value as i32))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SimulatorConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SimulatorConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.face, FaceConfig::default());
        assert_eq!(config.flash_path, None);
        assert_eq!(config.frame_path, Some(PathBuf::from(DEFAULT_FRAME_PATH)));
        assert!(config.connected);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (ENV_DEFAULT_BG, "#00AA55"),
            (ENV_DATE_FORMAT, "iso"),
            (ENV_ALERT, "long"),
            (ENV_FLASH_PATH, "/tmp/minmins.bin"),
            (ENV_FRAME_PATH, ""),
            (ENV_CONNECTED, "off"),
        ]);
        assert_eq!(
            config.face.default_background,
            BackgroundColor::from_wire(0x00AA55)
        );
        assert_eq!(config.face.date_format, DateFormat::YearMonthDay);
        assert_eq!(config.face.disconnect_alert, VibePattern::LongPulse);
        assert_eq!(config.flash_path, Some(PathBuf::from("/tmp/minmins.bin")));
        assert_eq!(config.frame_path, None);
        assert!(!config.connected);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = config_from(&[
            (ENV_DEFAULT_BG, "teal"),
            (ENV_DATE_FORMAT, "stardate"),
            (ENV_CONNECTED, "maybe"),
        ]);
        assert_eq!(config.face, FaceConfig::default());
        assert!(config.connected);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("0xFF0000"), Some(BackgroundColor::from_wire(0xFF0000)));
        assert_eq!(parse_color("0"), Some(BackgroundColor::BLACK));
        assert_eq!(parse_color("16777215"), Some(BackgroundColor::WHITE));
        assert_eq!(parse_color("#xyz"), None);
    }
}
