//! The 12 palaces and the Life/Body palace locator.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ZiweiError;
use crate::ganzhi::Branch;

/// Life domains in fixed ring order starting at Life.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Palace {
    #[serde(alias = "命宫")]
    Life,
    #[serde(alias = "兄弟")]
    Siblings,
    #[serde(alias = "夫妻")]
    Spouse,
    #[serde(alias = "子女")]
    Children,
    #[serde(alias = "财帛")]
    Wealth,
    #[serde(alias = "疾厄")]
    Health,
    #[serde(alias = "迁移")]
    Travel,
    #[serde(alias = "交友")]
    Friends,
    #[serde(alias = "事业")]
    Career,
    #[serde(alias = "田宅")]
    Property,
    #[serde(alias = "福德")]
    Blessing,
    #[serde(alias = "父母")]
    Parents,
}

pub const ALL_PALACES: [Palace; 12] = [
    Palace::Life,
    Palace::Siblings,
    Palace::Spouse,
    Palace::Children,
    Palace::Wealth,
    Palace::Health,
    Palace::Travel,
    Palace::Friends,
    Palace::Career,
    Palace::Property,
    Palace::Blessing,
    Palace::Parents,
];

impl Palace {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "事业",
            Self::Property => "田宅",
            Self::Blessing => "福德",
            Self::Parents => "父母",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Blessing => "Blessing",
            Self::Parents => "Parents",
        }
    }

    pub const fn sector(self) -> Sector {
        Sector(self as u8)
    }
}

impl Display for Palace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position on the 12-sector ring, always in 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Sector(u8);

impl Sector {
    /// Sector at any signed position; wraps modulo 12.
    pub const fn wrap(i: i64) -> Self {
        Self(i.rem_euclid(12) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Sector `steps` further round the ring (negative steps go backwards).
    pub const fn offset(self, steps: i64) -> Self {
        Self::wrap(self.0 as i64 + steps)
    }

    /// The sector directly across the ring (+6).
    pub const fn opposite(self) -> Self {
        self.offset(6)
    }

    pub const fn palace(self) -> Palace {
        ALL_PALACES[self.0 as usize]
    }
}

impl Display for Sector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Life and Body palace sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PalacePair {
    pub life: Sector,
    pub body: Sector,
}

impl PalacePair {
    pub const fn life_palace(self) -> Palace {
        self.life.palace()
    }

    pub const fn body_palace(self) -> Palace {
        self.body.palace()
    }
}

/// Ring index of the first lunar month (寅).
const FIRST_MONTH_INDEX: i64 = 2;

/// Locate the Life and Body palaces from a lunar month number and hour branch.
///
/// Life counts backwards from the month's position by the hour steps;
/// Body counts forwards from 寅 by the same steps.
pub fn locate_palaces(lunar_month: u8, hour: Branch) -> Result<PalacePair, ZiweiError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(ZiweiError::InvalidInput(format!(
            "lunar month must be 1-12, got {lunar_month}"
        )));
    }
    let month_idx = FIRST_MONTH_INDEX + i64::from(lunar_month) - 1;
    let hour_steps = i64::from(hour.index());
    Ok(PalacePair {
        life: Sector::wrap(month_idx - hour_steps),
        body: Sector::wrap(FIRST_MONTH_INDEX + hour_steps),
    })
}
