//! Golden fixtures for the chart primitives, stage by stage.
//!
//! Pure table lookups plus the bundled lunar calendar.

use ziwei_base::{
    AUX_STARS, Branch, Bureau, Gender, HourInput, MAJOR_STARS, NaYin, Palace, Placement, Polarity,
    Star, day_stem_branch, hour_stem_branch, locate_palaces, month_stem_branch, place_aux_stars,
    place_major_stars, solar_to_lunar, year_pillar,
};
use ziwei_time::{SolarDate, TabularLunarCalendar};

struct Fixture {
    date: (i32, u8, u8),
    hour: u8,
    gender: Gender,
    pillars: [&'static str; 4],
    na_yin: NaYin,
    bureau: Bureau,
    lunar: (u8, u8, bool),
    palaces: (Palace, Palace),
    polarity: Polarity,
    major: [u8; 14],
    aux: [u8; 14],
}

// Sectors listed in MAJOR_STARS / AUX_STARS order.
const FIXTURES: [Fixture; 3] = [
    Fixture {
        date: (1990, 7, 7),
        hour: 0,
        gender: Gender::Male,
        pillars: ["庚午", "戊申", "癸酉", "癸子"],
        na_yin: NaYin::LuPangTu,
        bureau: Bureau::Earth5,
        lunar: (5, 15, true),
        palaces: (Palace::Travel, Palace::Spouse),
        polarity: Polarity::YangMale,
        major: [8, 9, 10, 11, 0, 1, 2, 1, 0, 11, 10, 9, 8, 7],
        aux: [6, 0, 7, 1, 9, 5, 11, 0, 6, 0, 1, 7, 9, 3],
    },
    Fixture {
        date: (1985, 11, 23),
        hour: 15,
        gender: Gender::Female,
        pillars: ["乙丑", "丁子", "丙寅", "乙申"],
        na_yin: NaYin::HaiZhongJin,
        bureau: Bureau::Metal4,
        lunar: (10, 12, false),
        palaces: (Palace::Children, Palace::Blessing),
        polarity: Polarity::YinFemale,
        major: [0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1, 0, 11],
        aux: [11, 5, 0, 6, 3, 0, 6, 4, 11, 5, 8, 2, 9, 3],
    },
    Fixture {
        date: (2001, 3, 5),
        hour: 23,
        gender: Gender::Male,
        pillars: ["辛巳", "乙辰", "丁卯", "丁子"],
        na_yin: NaYin::BaiLaJin,
        bureau: Bureau::Metal4,
        lunar: (2, 11, false),
        palaces: (Palace::Children, Palace::Spouse),
        polarity: Polarity::YinMale,
        major: [8, 7, 6, 5, 4, 3, 2, 3, 4, 5, 6, 7, 8, 9],
        aux: [5, 11, 6, 0, 10, 4, 10, 4, 5, 11, 2, 8, 9, 3],
    },
];

fn assert_sectors(placement: &Placement, stars: &[Star], expected: &[u8], date: (i32, u8, u8)) {
    assert_eq!(placement.len(), stars.len());
    for (star, &sector) in stars.iter().zip(expected) {
        assert_eq!(
            placement.get(*star).map(|s| s.index()),
            Some(sector),
            "{star} for {date:?}"
        );
    }
}

#[test]
fn pillars() {
    for f in &FIXTURES {
        let (y, m, d) = f.date;
        let date = SolarDate::new(y, m, d).unwrap();
        let year = year_pillar(y).unwrap();
        let month = month_stem_branch(year.stem_branch, m).unwrap();
        let day = day_stem_branch(date);
        let hour_branch = HourInput::Clock(f.hour).hour_branch().unwrap();
        let hour = hour_stem_branch(day, hour_branch);
        let got = [year.stem_branch, month, day, hour].map(|p| p.to_string());
        assert_eq!(got, f.pillars.map(String::from), "{:?}", f.date);
        assert_eq!(year.na_yin, f.na_yin);
        assert_eq!(year.bureau, f.bureau);
    }
}

#[test]
fn lunar_and_palaces() {
    for f in &FIXTURES {
        let (y, m, d) = f.date;
        let date = SolarDate::new(y, m, d).unwrap();
        let birth = solar_to_lunar(&TabularLunarCalendar, date, HourInput::Clock(f.hour)).unwrap();
        let l = birth.lunar;
        assert_eq!((l.month, l.day, l.is_leap_month), f.lunar, "{:?}", f.date);
        let pair = locate_palaces(l.month, birth.hour_branch).unwrap();
        assert_eq!((pair.life_palace(), pair.body_palace()), f.palaces);
    }
}

#[test]
fn star_sectors() {
    for f in &FIXTURES {
        let (y, m, d) = f.date;
        let date = SolarDate::new(y, m, d).unwrap();
        let year = year_pillar(y).unwrap();
        let polarity = Polarity::new(year.stem_branch.stem, f.gender);
        assert_eq!(polarity, f.polarity);

        let birth = solar_to_lunar(&TabularLunarCalendar, date, HourInput::Clock(f.hour)).unwrap();
        let major = place_major_stars(birth.lunar.day, year.bureau.number(), polarity).unwrap();
        assert_sectors(&major, &MAJOR_STARS, &f.major, f.date);

        let month_branch = month_stem_branch(year.stem_branch, m).unwrap().branch;
        let aux = place_aux_stars(year.stem_branch, month_branch, birth.hour_branch).unwrap();
        assert_sectors(&aux, &AUX_STARS, &f.aux, f.date);
    }
}

#[test]
fn late_hour_stays_on_same_day() {
    // 23:00 maps to 子 but the day pair is not advanced
    let date = SolarDate::new(2001, 3, 5).unwrap();
    let day = day_stem_branch(date);
    assert_eq!(day.to_string(), "丁卯");
    assert_eq!(HourInput::Clock(23).hour_branch().unwrap(), Branch::Zi);
}

#[test]
fn bureau_sweep_60_years() {
    let mut seen = [0usize; 5];
    for y in 1984..2044 {
        let b = year_pillar(y).unwrap().bureau;
        seen[b.element().index() as usize] += 1;
    }
    // each element owns six Na Yin names, two years apiece
    assert_eq!(seen, [12; 5]);
}
