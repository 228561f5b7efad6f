//! Birth-date numerology: life number and two-digit "magnetic field" patterns.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use ziwei_time::SolarDate;

use crate::element::Element;

/// The four digit-pair patterns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DigitPattern {
    #[serde(alias = "天医")]
    TianYi,
    #[serde(alias = "延年")]
    YanNian,
    #[serde(alias = "绝命")]
    JueMing,
    #[serde(alias = "生气")]
    ShengQi,
}

pub const ALL_DIGIT_PATTERNS: [DigitPattern; 4] = [
    DigitPattern::TianYi,
    DigitPattern::YanNian,
    DigitPattern::JueMing,
    DigitPattern::ShengQi,
];

impl DigitPattern {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianYi => "天医",
            Self::YanNian => "延年",
            Self::JueMing => "绝命",
            Self::ShengQi => "生气",
        }
    }

    /// The eight digit pairs of the pattern. The four sets are disjoint.
    pub const fn combos(self) -> [&'static str; 8] {
        match self {
            Self::TianYi => ["13", "31", "68", "86", "49", "94", "27", "72"],
            Self::YanNian => ["19", "91", "87", "78", "43", "34", "26", "62"],
            Self::JueMing => ["12", "21", "96", "69", "48", "84", "37", "73"],
            Self::ShengQi => ["14", "41", "67", "76", "39", "93", "28", "82"],
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::TianYi => Element::Fire,
            Self::YanNian => Element::Metal,
            Self::JueMing => Element::Water,
            Self::ShengQi => Element::Wood,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::TianYi => "主财富、婚姻",
            Self::YanNian => "主能力、责任",
            Self::JueMing => "主投资、风险",
            Self::ShengQi => "主贵人、机会",
        }
    }

    /// Pattern containing a two-digit window, if any.
    pub fn of_combo(combo: &str) -> Option<Self> {
        ALL_DIGIT_PATTERNS
            .into_iter()
            .find(|p| p.combos().contains(&combo))
    }
}

impl Display for DigitPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One window of the date string that fell into a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitPatternMatch {
    pub combo: String,
    pub pattern: DigitPattern,
    pub element: Element,
    pub description: &'static str,
}

/// Repeated digit sum of `YYYYMMDD` down to a single digit.
pub fn life_number(date: SolarDate) -> u8 {
    let mut n: u32 = date.compact_digits().bytes().map(|b| u32::from(b - b'0')).sum();
    while n > 9 {
        n = digit_sum(n);
    }
    n as u8
}

fn digit_sum(mut n: u32) -> u32 {
    let mut s = 0;
    while n > 0 {
        s += n % 10;
        n /= 10;
    }
    s
}

/// Every overlapping two-digit window of `YYYYMMDD` that belongs to a pattern.
pub fn digit_patterns(date: SolarDate) -> Vec<DigitPatternMatch> {
    let digits = date.compact_digits();
    digits
        .as_bytes()
        .windows(2)
        .filter_map(|w| std::str::from_utf8(w).ok())
        .filter_map(|combo| {
            DigitPattern::of_combo(combo).map(|pattern| DigitPatternMatch {
                combo: combo.to_string(),
                pattern,
                element: pattern.element(),
                description: pattern.description(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn life_number_1990_07_07() {
        // 1+9+9+0+0+7+0+7 = 33 → 6
        assert_eq!(life_number(date(1990, 7, 7)), 6);
    }

    #[test]
    fn life_number_needs_two_reductions() {
        // 1+9+9+9+0+9+2+9 = 48 → 12 → 3
        assert_eq!(life_number(date(1999, 9, 29)), 3);
    }

    #[test]
    fn life_number_in_range() {
        let mut d = date(1950, 1, 1);
        for _ in 0..2000 {
            let n = life_number(d);
            assert!((1..=9).contains(&n), "{d}: {n}");
            d = SolarDate::from_jdn(d.jdn() + 17);
        }
    }

    #[test]
    fn combo_sets_disjoint() {
        for (i, a) in ALL_DIGIT_PATTERNS.iter().enumerate() {
            for b in &ALL_DIGIT_PATTERNS[i + 1..] {
                for c in a.combos() {
                    assert!(!b.combos().contains(&c), "{c} in {a} and {b}");
                }
            }
        }
    }

    #[test]
    fn patterns_1990_07_07() {
        let found = digit_patterns(date(1990, 7, 7));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].combo, "19");
        assert_eq!(found[0].pattern, DigitPattern::YanNian);
        assert_eq!(found[0].element, Element::Metal);
    }

    #[test]
    fn patterns_in_window_order() {
        // 19861231: 19 延年, 98, 86 天医, 61, 12 绝命, 23, 31 天医
        let found: Vec<_> = digit_patterns(date(1986, 12, 31))
            .into_iter()
            .map(|m| (m.combo, m.pattern))
            .collect();
        assert_eq!(
            found,
            [
                ("19".to_string(), DigitPattern::YanNian),
                ("86".to_string(), DigitPattern::TianYi),
                ("12".to_string(), DigitPattern::JueMing),
                ("31".to_string(), DigitPattern::TianYi),
            ]
        );
    }

    #[test]
    fn deserializes_cjk_name() {
        let p: DigitPattern = serde_json::from_str("\"天医\"").unwrap();
        assert_eq!(p, DigitPattern::TianYi);
    }
}
