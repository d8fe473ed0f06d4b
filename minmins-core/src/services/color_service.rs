use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use minmins_common::palette_levels;

/// Weighted palette luma at or above which black text is used.
const LUMA_THRESHOLD: u8 = 15;

/// Foreground that stays readable on `background`.
///
/// Works on the 2-bit palette levels so that every color which renders the
/// same on the display gets the same answer.
pub fn legible_foreground(background: Rgb888) -> Rgb888 {
    let (r, g, b) = palette_levels(background);
    let luma = 3 * r + 6 * g + b;
    if luma >= LUMA_THRESHOLD {
        Rgb888::BLACK
    } else {
        Rgb888::WHITE
    }
}
