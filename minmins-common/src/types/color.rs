use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Background color as carried on the wire and persisted: `0xRRGGBB` in an `i32`.
///
/// The raw value is never `0`. The settings store cannot tell a stored `0`
/// from a missing record, so a requested `0` is moved to `1`, which still
/// renders black on the 64-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BackgroundColor(i32);

impl BackgroundColor {
    /// Raw value the settings store reports for an absent record.
    pub const UNSET: i32 = 0;

    pub const WHITE: Self = Self(0x00FF_FFFF);
    pub const BLACK: Self = Self(1);

    /// Accept a value received from the companion, biasing `0` away from the sentinel.
    pub const fn from_wire(raw: i32) -> Self {
        if raw == Self::UNSET {
            Self(Self::UNSET + 1)
        } else {
            Self(raw)
        }
    }

    /// Interpret a persisted record, `None` when it is the absent sentinel.
    pub const fn from_stored(raw: i32) -> Option<Self> {
        if raw == Self::UNSET {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn to_rgb(self) -> Rgb888 {
        color_from_hex(self.0 as u32)
    }
}

/// Quantize `0xRRGGBB` to the display's 2-bit-per-channel palette.
///
/// Bits above the low 24 are ignored.
pub fn color_from_hex(hex: u32) -> Rgb888 {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    Rgb888::new(expand(r >> 6), expand(g >> 6), expand(b >> 6))
}

/// Palette levels (0..=3) of each channel.
pub fn palette_levels(color: Rgb888) -> (u8, u8, u8) {
    (color.r() >> 6, color.g() >> 6, color.b() >> 6)
}

/// Pack a color back into `0xRRGGBB`, mostly for log lines.
pub fn color_to_hex(color: Rgb888) -> u32 {
    (u32::from(color.r()) << 16) | (u32::from(color.g()) << 8) | u32::from(color.b())
}

const fn expand(level: u8) -> u8 {
    level * 85
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_biased_to_one() {
        assert_eq!(BackgroundColor::from_wire(0).raw(), 1);
        assert_eq!(BackgroundColor::from_wire(0), BackgroundColor::BLACK);
        assert_eq!(BackgroundColor::from_wire(0xFF0000).raw(), 0xFF0000);
    }

    #[test]
    fn test_stored_sentinel_is_absent() {
        assert_eq!(BackgroundColor::from_stored(0), None);
        assert_eq!(
            BackgroundColor::from_stored(1),
            Some(BackgroundColor::BLACK)
        );
    }

    #[test]
    fn test_one_renders_black() {
        assert_eq!(BackgroundColor::from_wire(1).to_rgb(), Rgb888::BLACK);
        assert_eq!(BackgroundColor::WHITE.to_rgb(), Rgb888::WHITE);
    }

    #[test]
    fn test_quantization() {
        assert_eq!(color_from_hex(0xFF0000), Rgb888::new(255, 0, 0));
        assert_eq!(color_from_hex(0x55AA00), Rgb888::new(85, 170, 0));
        // 0x3F is below the first palette step
        assert_eq!(color_from_hex(0x3F3F3F), Rgb888::BLACK);
        // high byte is not part of the color
        assert_eq!(color_from_hex(0xFF00_00FF), Rgb888::new(0, 0, 255));
    }

    #[test]
    fn test_palette_levels() {
        assert_eq!(palette_levels(Rgb888::WHITE), (3, 3, 3));
        assert_eq!(palette_levels(color_from_hex(0x55AA00)), (1, 2, 0));
        assert_eq!(color_to_hex(color_from_hex(0xFFAA55)), 0xFFAA55);
    }
}
