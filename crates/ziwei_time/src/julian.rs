//! Integer Julian Day Numbers for the proleptic Gregorian calendar.
//!
//! Day-granularity only: every conversion here works on whole civil days,
//! which is all the stem-branch day cycle and the lunar table need.

/// Julian Day Number of 2000-01-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian calendar date to Julian Day Number (Fliegel & Van Flandern).
pub const fn calendar_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let a = (14 - month) / 12;
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Julian Day Number back to a Gregorian `(year, month, day)`.
pub const fn jdn_to_calendar(jdn: i64) -> (i32, u8, u8) {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u8, day as u8)
}
