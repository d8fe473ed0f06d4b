//! Bounded text building.
//!
//! Every string shown on the face lives in a fixed-capacity `heapless::String`.
//! Writers here truncate at a character boundary and never report an overflow.

use core::fmt;

use heapless::String;

/// Append as much of `s` as fits. Returns `false` if anything was cut.
pub fn push_truncated<const N: usize>(out: &mut String<N>, s: &str) -> bool {
    for c in s.chars() {
        if out.push(c).is_err() {
            return false;
        }
    }
    true
}

/// Copy `s` into a new bounded string, truncating if needed.
pub fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    push_truncated(&mut out, s);
    out
}

/// `fmt::Write` adapter that stops writing once the buffer is full.
pub struct Truncating<'a, const N: usize> {
    out: &'a mut String<N>,
    full: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    pub fn new(out: &'a mut String<N>) -> Self {
        Self { out, full: false }
    }

    pub fn is_truncated(&self) -> bool {
        self.full
    }
}

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.full && !push_truncated(self.out, s) {
            self.full = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_truncates_at_char_boundary() {
        let s: String<3> = truncated("72°C");
        // '°' is two bytes and does not fit after "72"
        assert_eq!(s.as_str(), "72");
    }

    #[test]
    fn test_writer_stops_after_overflow() {
        let mut out: String<6> = String::new();
        let mut w = Truncating::new(&mut out);
        write!(w, "{}, {}", "Cloudy", "x").unwrap();
        assert!(w.is_truncated());
        assert_eq!(out.as_str(), "Cloudy");
    }

    #[test]
    fn test_fits() {
        let mut out: String<16> = String::new();
        assert!(push_truncated(&mut out, "Rain"));
        assert_eq!(out.as_str(), "Rain");
    }
}
