//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::solar::SolarDate;

/// Errors from Gregorian validation or lunar-table lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year/month/day do not form a valid Gregorian date.
    InvalidDate(String),
    /// Date lies outside the span covered by the lunar table.
    OutOfRange(SolarDate),
    /// Text could not be parsed as `YYYY-MM-DD`.
    Parse(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::OutOfRange(date) => write!(
                f,
                "date {date} outside lunar table range {}..{}",
                crate::lunar::FIRST_SUPPORTED_DATE,
                crate::lunar::LAST_SUPPORTED_DATE
            ),
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for CalendarError {}
