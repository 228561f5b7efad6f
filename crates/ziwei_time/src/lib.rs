//! Calendar arithmetic for natal-chart computation.
//!
//! This crate provides:
//! - Validated Gregorian dates ([`SolarDate`]) and integer Julian Day Numbers
//! - The [`LunarCalendar`] seam for solar → lunar conversion
//! - A bundled table-driven lunar calendar for 1900..=2100

pub mod error;
pub mod julian;
pub mod lunar;
pub mod solar;

pub use error::CalendarError;
pub use julian::{J2000_JDN, calendar_to_jdn, days_in_month, is_leap_year, jdn_to_calendar};
pub use lunar::{
    FIRST_SUPPORTED_DATE, LAST_SUPPORTED_DATE, LunarCalendar, LunarDate, TabularLunarCalendar,
    leap_month, lunar_year_days,
};
pub use solar::SolarDate;
