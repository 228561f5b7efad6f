//! Golden solar → lunar fixtures for the bundled table.
//!
//! Pure-table tests (no external data needed).

use ziwei_time::{LunarCalendar, LunarDate, SolarDate, TabularLunarCalendar};

fn convert(y: i32, m: u8, d: u8) -> LunarDate {
    TabularLunarCalendar
        .to_lunar(SolarDate::new(y, m, d).unwrap())
        .unwrap()
}

#[test]
fn birth_1990_07_07_is_leap_fifth_month() {
    // 1990 has a leap 5th month starting 1990-06-23.
    let l = convert(1990, 7, 7);
    assert_eq!(l.year, 1990);
    assert_eq!(l.month, 5);
    assert_eq!(l.day, 15);
    assert!(l.is_leap_month);
}

#[test]
fn sixth_month_1990_starts_after_leap() {
    let l = convert(1990, 7, 22);
    assert_eq!((l.month, l.day, l.is_leap_month), (6, 1, false));
    let l = convert(1990, 8, 20);
    assert_eq!((l.month, l.day), (7, 1));
}

#[test]
fn mid_june_2023() {
    let l = convert(2023, 6, 15);
    assert_eq!((l.year, l.month, l.day, l.is_leap_month), (2023, 4, 28, false));
}

#[test]
fn new_year_2000_still_in_lunar_1999() {
    let l = convert(2000, 1, 1);
    assert_eq!((l.year, l.month, l.day), (1999, 11, 25));
}

#[test]
fn last_supported_day() {
    let l = convert(2100, 12, 31);
    assert_eq!((l.year, l.month, l.day), (2100, 12, 1));
}

#[test]
fn consecutive_days_advance_by_one() {
    // Walk a full year and check the lunar day either increments or resets to 1.
    let start = SolarDate::new(2020, 1, 1).unwrap();
    let mut prev = TabularLunarCalendar.to_lunar(start).unwrap();
    for i in 1..366 {
        let date = SolarDate::from_jdn(start.jdn() + i);
        let cur = TabularLunarCalendar.to_lunar(date).unwrap();
        if cur.day != 1 {
            assert_eq!(cur.day, prev.day + 1, "at {date}");
            assert_eq!(cur.month, prev.month, "at {date}");
        } else {
            assert!(prev.day == 29 || prev.day == 30, "month ended on day {} at {date}", prev.day);
        }
        prev = cur;
    }
}
