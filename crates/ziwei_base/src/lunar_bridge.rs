//! Solar → lunar bridge: lunar month/day plus the two-hour branch of a birth.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ziwei_time::{LunarCalendar, LunarDate, SolarDate};

use crate::error::ZiweiError;
use crate::ganzhi::Branch;
use crate::palace::{PalacePair, locate_palaces};

/// Birth hour as supplied by a caller: a clock hour or a branch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HourInput {
    Clock(u8),
    Branch(Branch),
}

impl HourInput {
    /// Two-hour branch: 23:00-00:59 → 子, 01:00-02:59 → 丑, …
    pub fn hour_branch(self) -> Result<Branch, ZiweiError> {
        match self {
            Self::Clock(h) if h < 24 => Ok(Branch::from_index((i64::from(h) + 1) % 24 / 2)),
            Self::Clock(h) => Err(ZiweiError::InvalidInput(format!(
                "hour must be 0-23, got {h}"
            ))),
            Self::Branch(b) => Ok(b),
        }
    }
}

impl Display for HourInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clock(h) => write!(f, "{h:02}h"),
            Self::Branch(b) => write!(f, "{b}"),
        }
    }
}

impl FromStr for HourInput {
    type Err = ZiweiError;

    /// `"14"` is a clock hour; anything else must name a branch.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(h) = s.parse::<u8>() {
            return Ok(Self::Clock(h));
        }
        s.parse::<Branch>()
            .map(Self::Branch)
            .map_err(|_| ZiweiError::InvalidInput(format!("unrecognized hour '{s}'")))
    }
}

impl From<Branch> for HourInput {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}

/// Lunar date of a birth together with its hour branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarBirth {
    pub lunar: LunarDate,
    pub hour_branch: Branch,
}

/// Convert a Gregorian birth date and hour through `calendar`.
pub fn solar_to_lunar<C: LunarCalendar + ?Sized>(
    calendar: &C,
    date: SolarDate,
    hour: HourInput,
) -> Result<LunarBirth, ZiweiError> {
    let hour_branch = hour.hour_branch()?;
    let lunar = calendar.to_lunar(date)?;
    Ok(LunarBirth { lunar, hour_branch })
}

/// Life and Body palaces straight from a Gregorian date and hour.
pub fn locate_palaces_for_solar<C: LunarCalendar + ?Sized>(
    calendar: &C,
    date: SolarDate,
    hour: HourInput,
) -> Result<PalacePair, ZiweiError> {
    let birth = solar_to_lunar(calendar, date, hour)?;
    locate_palaces(birth.lunar.month, birth.hour_branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::Palace;
    use ziwei_time::TabularLunarCalendar;

    #[test]
    fn clock_hour_boundaries() {
        let b = |h| HourInput::Clock(h).hour_branch().unwrap();
        assert_eq!(b(23), Branch::Zi);
        assert_eq!(b(0), Branch::Zi);
        assert_eq!(b(1), Branch::Chou);
        assert_eq!(b(2), Branch::Chou);
        assert_eq!(b(3), Branch::Yin);
        assert_eq!(b(12), Branch::Wu);
        assert_eq!(b(22), Branch::Hai);
    }

    #[test]
    fn clock_hour_out_of_range() {
        let e = HourInput::Clock(24).hour_branch().unwrap_err();
        assert!(e.is_invalid_input());
    }

    #[test]
    fn branch_passes_through() {
        let h = HourInput::from(Branch::Mao);
        assert_eq!(h.hour_branch().unwrap(), Branch::Mao);
    }

    #[test]
    fn parse_hour_forms() {
        assert_eq!("10".parse::<HourInput>().unwrap(), HourInput::Clock(10));
        assert_eq!("巳".parse::<HourInput>().unwrap(), HourInput::Branch(Branch::Si));
        assert!("noon".parse::<HourInput>().is_err());
    }

    #[test]
    fn deserialize_untagged() {
        let h: HourInput = serde_json::from_str("7").unwrap();
        assert_eq!(h, HourInput::Clock(7));
        let h: HourInput = serde_json::from_str("\"子\"").unwrap();
        assert_eq!(h, HourInput::Branch(Branch::Zi));
    }

    #[test]
    fn lunar_birth_1990() {
        let date = SolarDate::new(1990, 7, 7).unwrap();
        let birth = solar_to_lunar(&TabularLunarCalendar, date, HourInput::Clock(0)).unwrap();
        assert_eq!(birth.lunar.month, 5);
        assert_eq!(birth.lunar.day, 15);
        assert!(birth.lunar.is_leap_month);
        assert_eq!(birth.hour_branch, Branch::Zi);
    }

    #[test]
    fn palaces_for_solar_1990() {
        let date = SolarDate::new(1990, 7, 7).unwrap();
        let pair =
            locate_palaces_for_solar(&TabularLunarCalendar, date, HourInput::Clock(0)).unwrap();
        assert_eq!(pair.life_palace(), Palace::Travel);
        assert_eq!(pair.body_palace(), Palace::Spouse);
    }

    #[test]
    fn out_of_calendar_range_is_invalid_input() {
        let date = SolarDate::new(1850, 1, 1).unwrap();
        let e = solar_to_lunar(&TabularLunarCalendar, date, HourInput::Clock(0)).unwrap_err();
        assert!(e.is_invalid_input());
    }
}
