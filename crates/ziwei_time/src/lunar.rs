//! Solar → lunar (Chinese lunisolar) calendar conversion.
//!
//! The conversion itself sits behind [`LunarCalendar`] so callers can plug in
//! an astronomical implementation. [`TabularLunarCalendar`] is the bundled
//! one: a packed month-length table covering lunar years 1900..=2100.
//!
//! Table word layout (one `u32` per lunar year):
//! - bits 0-3: leap month number (0 = no leap month)
//! - bits 4-15: month 12 .. month 1 length flags (set = 30 days, clear = 29)
//! - bit 16: leap month length flag (set = 30 days)

use serde::Serialize;

use crate::error::CalendarError;
use crate::solar::SolarDate;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    /// Lunar year (the Gregorian year in which its first month begins).
    pub year: i32,
    /// Month number 1..=12. A leap month repeats the number of its predecessor.
    pub month: u8,
    /// Day of month 1..=30.
    pub day: u8,
    /// Whether `month` is the intercalary repeat.
    pub is_leap_month: bool,
}

/// Anything that can turn a Gregorian date into a lunar date.
pub trait LunarCalendar: Send + Sync {
    fn name(&self) -> &'static str;
    fn to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError>;
}

/// First lunar year covered by [`LUNAR_YEAR_TABLE`].
pub const FIRST_LUNAR_YEAR: i32 = 1900;

/// Gregorian date of lunar 1900-01-01.
pub const FIRST_SUPPORTED_DATE: SolarDate = SolarDate::from_parts(1900, 1, 31);

/// Last Gregorian date accepted by [`TabularLunarCalendar`].
pub const LAST_SUPPORTED_DATE: SolarDate = SolarDate::from_parts(2100, 12, 31);

/// Packed month lengths and leap months for lunar years 1900..=2100.
pub const LUNAR_YEAR_TABLE: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

fn year_word(year: i32) -> Option<u32> {
    let idx = usize::try_from(year.checked_sub(FIRST_LUNAR_YEAR)?).ok()?;
    LUNAR_YEAR_TABLE.get(idx).copied()
}

/// Leap month number of a lunar year (0 when the year has none).
///
/// `None` for years outside [`LUNAR_YEAR_TABLE`].
pub fn leap_month(year: i32) -> Option<u8> {
    year_word(year).map(|w| (w & 0xf) as u8)
}

/// Length of the leap month, or 0 when the year has none.
pub fn leap_month_days(year: i32) -> Option<u16> {
    let word = year_word(year)?;
    Some(if word & 0xf == 0 {
        0
    } else if word & 0x1_0000 != 0 {
        30
    } else {
        29
    })
}

/// Length of regular month `month` (1..=12).
pub fn month_days(year: i32, month: u8) -> Option<u16> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let word = year_word(year)?;
    Some(if word & (0x1_0000 >> month) != 0 { 30 } else { 29 })
}

/// Total days in a lunar year, leap month included.
pub fn lunar_year_days(year: i32) -> Option<u16> {
    let mut total = leap_month_days(year)?;
    for month in 1..=12 {
        total += month_days(year, month)?;
    }
    Some(total)
}

/// Lunar calendar backed by [`LUNAR_YEAR_TABLE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularLunarCalendar;

impl LunarCalendar for TabularLunarCalendar {
    fn name(&self) -> &'static str {
        "tabular-1900-2100"
    }

    fn to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        if date < FIRST_SUPPORTED_DATE || date > LAST_SUPPORTED_DATE {
            return Err(CalendarError::OutOfRange(date));
        }

        let out_of_range = || CalendarError::OutOfRange(date);
        let mut offset = date.days_since(FIRST_SUPPORTED_DATE);
        let mut year = FIRST_LUNAR_YEAR;
        loop {
            let len = i64::from(lunar_year_days(year).ok_or_else(out_of_range)?);
            if offset < len {
                break;
            }
            offset -= len;
            year += 1;
        }

        let leap = leap_month(year).ok_or_else(out_of_range)?;
        for month in 1..=12u8 {
            let len = i64::from(month_days(year, month).ok_or_else(out_of_range)?);
            if offset < len {
                return Ok(lunar_date(year, month, offset, false));
            }
            offset -= len;
            if month == leap {
                let leap_len = i64::from(leap_month_days(year).ok_or_else(out_of_range)?);
                if offset < leap_len {
                    return Ok(lunar_date(year, month, offset, true));
                }
                offset -= leap_len;
            }
        }
        // The year loop guarantees `offset` fits inside `year`.
        Err(CalendarError::OutOfRange(date))
    }
}

fn lunar_date(year: i32, month: u8, offset: i64, is_leap_month: bool) -> LunarDate {
    LunarDate {
        year,
        month,
        day: (offset + 1) as u8,
        is_leap_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(y: i32, m: u8, d: u8) -> LunarDate {
        TabularLunarCalendar
            .to_lunar(SolarDate::new(y, m, d).unwrap())
            .unwrap()
    }

    #[test]
    fn table_covers_201_years() {
        assert_eq!(LUNAR_YEAR_TABLE.len(), 201);
    }

    #[test]
    fn year_lengths_plausible() {
        for year in 1900..=2100 {
            let days = lunar_year_days(year).unwrap();
            assert!((353..=385).contains(&days), "lunar year {year} has {days} days");
        }
    }

    #[test]
    fn epoch_is_first_day() {
        let l = lunar(1900, 1, 31);
        assert_eq!((l.year, l.month, l.day, l.is_leap_month), (1900, 1, 1, false));
    }

    #[test]
    fn day_before_epoch_rejected() {
        let d = SolarDate::new(1900, 1, 30).unwrap();
        assert_eq!(
            TabularLunarCalendar.to_lunar(d),
            Err(CalendarError::OutOfRange(d))
        );
    }

    #[test]
    fn after_range_rejected() {
        let d = SolarDate::new(2101, 1, 1).unwrap();
        assert!(TabularLunarCalendar.to_lunar(d).is_err());
    }

    #[test]
    fn spring_festival_2024() {
        let l = lunar(2024, 2, 10);
        assert_eq!((l.year, l.month, l.day), (2024, 1, 1));
    }

    #[test]
    fn leap_second_month_2023() {
        let l = lunar(2023, 3, 22);
        assert_eq!((l.month, l.day, l.is_leap_month), (2, 1, true));
        let after = lunar(2023, 4, 20);
        assert_eq!((after.month, after.day, after.is_leap_month), (3, 1, false));
    }

    #[test]
    fn leap_month_lookup() {
        assert_eq!(leap_month(1990), Some(5));
        assert_eq!(leap_month(2023), Some(2));
        assert_eq!(leap_month(2024), Some(0));
        assert_eq!(leap_month_days(2024), Some(0));
    }

    #[test]
    fn years_outside_table_are_none() {
        assert_eq!(leap_month(1899), None);
        assert_eq!(leap_month(i32::MIN), None);
        assert_eq!(leap_month_days(2101), None);
        assert_eq!(lunar_year_days(2101), None);
        assert_eq!(month_days(1899, 1), None);
        assert!(lunar_year_days(2100).is_some());
    }

    #[test]
    fn month_outside_range_is_none() {
        assert_eq!(month_days(2000, 0), None);
        assert_eq!(month_days(2000, 13), None);
    }
}
