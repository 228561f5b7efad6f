//! Validated Gregorian (solar) calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::CalendarError;
use crate::julian::{calendar_to_jdn, days_in_month, jdn_to_calendar};

/// A Gregorian calendar date that is known to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Validate and build a date. Years before CE 1 are rejected.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidDate(format!(
                "year must be positive, got {year}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate(format!(
                "month must be 1-12, got {month}"
            )));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDate(format!(
                "day must be 1-{max_day} for {year:04}-{month:02}, got {day}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Unchecked constructor for compile-time constants.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self { year, month, day }
    }

    /// Gregorian year (CE, always positive).
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month 1..=12.
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Day of month.
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Julian Day Number of this date.
    pub const fn jdn(self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Signed number of days from `earlier` to `self`.
    pub const fn days_since(self, earlier: SolarDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// Zero-padded `YYYYMMDD` digit string.
    pub fn compact_digits(self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CalendarError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        };
        let year = y
            .parse::<i32>()
            .map_err(|e| CalendarError::Parse(format!("year '{y}': {e}")))?;
        let month = m
            .parse::<u8>()
            .map_err(|e| CalendarError::Parse(format!("month '{m}': {e}")))?;
        let day = d
            .parse::<u8>()
            .map_err(|e| CalendarError::Parse(format!("day '{d}': {e}")))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_feb_30() {
        assert!(matches!(
            SolarDate::new(1990, 2, 30),
            Err(CalendarError::InvalidDate(_))
        ));
    }

    #[test]
    fn rejects_month_zero() {
        assert!(SolarDate::new(1990, 0, 1).is_err());
        assert!(SolarDate::new(1990, 13, 1).is_err());
    }

    #[test]
    fn accepts_leap_day() {
        let d = SolarDate::new(2024, 2, 29).unwrap();
        assert_eq!(d.to_string(), "2024-02-29");
    }

    #[test]
    fn days_since_epoch() {
        let epoch = SolarDate::new(1899, 12, 22).unwrap();
        let d = SolarDate::new(1990, 7, 7).unwrap();
        assert_eq!(d.days_since(epoch), 33_069);
    }

    #[test]
    fn compact_digits_pad() {
        let d = SolarDate::new(1990, 7, 7).unwrap();
        assert_eq!(d.compact_digits(), "19900707");
        let early = SolarDate::new(5, 1, 1).unwrap();
        assert_eq!(early.compact_digits(), "00050101");
    }

    #[test]
    fn parse_iso() {
        let d: SolarDate = "2023-06-15".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2023, 6, 15));
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            "2023/06/15".parse::<SolarDate>(),
            Err(CalendarError::Parse(_))
        ));
    }

    #[test]
    fn from_jdn_roundtrip() {
        let d = SolarDate::new(2100, 12, 31).unwrap();
        assert_eq!(SolarDate::from_jdn(d.jdn()), d);
    }
}
