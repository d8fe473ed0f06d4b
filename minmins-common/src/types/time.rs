use core::fmt::Write;

use heapless::String;

use crate::types::text::Truncating;

/// Capacity of a formatted date line.
pub const DATE_TEXT_LEN: usize = 20;

/// Wall-clock sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 0 = Sunday
    pub weekday: u8,
    pub timezone_offset: i32,
}

impl DateTime {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        weekday: u8,
        timezone_offset: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
            timezone_offset,
        }
    }

    /// Midnight, 1 January 2000 (a Saturday).
    pub const fn epoch() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            weekday: 6,
            timezone_offset: 0,
        }
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
            && self.weekday < 7
    }
}

/// Order of the fields in the date line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateFormat {
    /// `MM/DD/YY`, what a C locale prints for `%x`
    #[default]
    MonthDayYear,
    /// `DD/MM/YY`
    DayMonthYear,
    /// `YYYY-MM-DD`
    YearMonthDay,
}

impl DateFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "mdy" | "us" | "locale" => Some(DateFormat::MonthDayYear),
            "dmy" | "eu" => Some(DateFormat::DayMonthYear),
            "ymd" | "iso" => Some(DateFormat::YearMonthDay),
            _ => None,
        }
    }

    pub fn format(self, date: &DateTime) -> String<DATE_TEXT_LEN> {
        let mut out = String::new();
        let yy = date.year % 100;
        let _ = match self {
            DateFormat::MonthDayYear => write!(
                Truncating::new(&mut out),
                "{:02}/{:02}/{:02}",
                date.month,
                date.day,
                yy
            ),
            DateFormat::DayMonthYear => write!(
                Truncating::new(&mut out),
                "{:02}/{:02}/{:02}",
                date.day,
                date.month,
                yy
            ),
            DateFormat::YearMonthDay => write!(
                Truncating::new(&mut out),
                "{:04}-{:02}-{:02}",
                date.year,
                date.month,
                date.day
            ),
        };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime {
        DateTime::new(2024, 3, 7, 14, 5, 9, 4, 3600)
    }

    #[test]
    fn test_date_formats() {
        let date = sample();
        assert_eq!(DateFormat::MonthDayYear.format(&date).as_str(), "03/07/24");
        assert_eq!(DateFormat::DayMonthYear.format(&date).as_str(), "07/03/24");
        assert_eq!(DateFormat::YearMonthDay.format(&date).as_str(), "2024-03-07");
    }

    #[test]
    fn test_parse_date_format() {
        assert_eq!(DateFormat::parse("iso"), Some(DateFormat::YearMonthDay));
        assert_eq!(DateFormat::parse("dmy"), Some(DateFormat::DayMonthYear));
        assert_eq!(DateFormat::parse("martian"), None);
    }

    #[test]
    fn test_validity() {
        assert!(sample().is_valid());
        assert!(DateTime::epoch().is_valid());
        let mut bad = sample();
        bad.hour = 24;
        assert!(!bad.is_valid());
    }
}
