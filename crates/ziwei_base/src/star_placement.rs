//! Placement of the 14 major and 14 auxiliary stars onto the sector ring.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Stem, StemBranch};
use crate::palace::{Sector, locate_palaces};
use crate::star::{Star, TIANFU_SERIES, ZIWEI_SERIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "男", alias = "M", alias = "m")]
    Male,
    #[serde(alias = "女", alias = "F", alias = "f")]
    Female,
}

impl Gender {
    /// Chinese name (男 / 女).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl FromStr for Gender {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(ZiweiError::InvalidInput(format!("unrecognized gender '{s}'"))),
        }
    }
}

/// Year-stem yin/yang combined with gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    YangMale,
    YinMale,
    YangFemale,
    YinFemale,
}

impl Polarity {
    /// Polarity from the parity of the year stem and the gender.
    pub const fn new(year_stem: Stem, gender: Gender) -> Self {
        match (year_stem.is_yang(), gender) {
            (true, Gender::Male) => Self::YangMale,
            (false, Gender::Male) => Self::YinMale,
            (true, Gender::Female) => Self::YangFemale,
            (false, Gender::Female) => Self::YinFemale,
        }
    }

    /// +1 (forward round the ring) for yang males and yin females, else -1.
    pub const fn direction(self) -> i64 {
        match self {
            Self::YangMale | Self::YinFemale => 1,
            Self::YinMale | Self::YangFemale => -1,
        }
    }

    /// Label such as `YangMale`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::YangMale => "YangMale",
            Self::YinMale => "YinMale",
            Self::YangFemale => "YangFemale",
            Self::YinFemale => "YinFemale",
        }
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Star → sector assignment, one entry per star.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    sectors: BTreeMap<Star, Sector>,
}

impl Placement {
    pub fn get(&self, star: Star) -> Option<Sector> {
        self.sectors.get(&star).copied()
    }

    /// Entries in star display order.
    pub fn iter(&self) -> impl Iterator<Item = (Star, Sector)> + '_ {
        self.sectors.iter().map(|(&s, &sec)| (s, sec))
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Stars occupying `sector`, in display order.
    pub fn stars_in(&self, sector: Sector) -> Vec<Star> {
        self.iter()
            .filter(|&(_, sec)| sec == sector)
            .map(|(s, _)| s)
            .collect()
    }

    fn insert(&mut self, star: Star, sector: Sector) {
        self.sectors.insert(star, sector);
    }
}

impl FromIterator<(Star, Sector)> for Placement {
    fn from_iter<I: IntoIterator<Item = (Star, Sector)>>(iter: I) -> Self {
        Self {
            sectors: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Placement {
    /// Serialized as `{"紫微": 8, ...}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sectors.len()))?;
        for (star, sector) in &self.sectors {
            map.serialize_entry(star.name(), sector)?;
        }
        map.end()
    }
}

/// Sector from which both major series start.
///
/// `bureau × ((lunar_day − 1) mod bureau) mod 12`
pub fn major_pivot(lunar_day: u8, bureau_number: u32) -> Result<Sector, ZiweiError> {
    if !(1..=30).contains(&lunar_day) {
        return Err(ZiweiError::InvalidInput(format!(
            "lunar day must be 1-30, got {lunar_day}"
        )));
    }
    if bureau_number == 0 {
        return Err(ZiweiError::InvalidInput(
            "bureau number must be positive".into(),
        ));
    }
    let b = i64::from(bureau_number);
    Ok(Sector::wrap(b * ((i64::from(lunar_day) - 1) % b)))
}

/// Place the 紫微 and 天府 series.
///
/// The 紫微 series walks from the pivot in the polarity direction; the
/// 天府 series starts opposite the pivot and walks the other way.
pub fn place_major_stars(
    lunar_day: u8,
    bureau_number: u32,
    polarity: Polarity,
) -> Result<Placement, ZiweiError> {
    let pivot = major_pivot(lunar_day, bureau_number)?;
    let dir = polarity.direction();
    let ziwei = ZIWEI_SERIES
        .iter()
        .zip(0i64..)
        .map(|(&star, i)| (star, pivot.offset(dir * i)));
    let anchor = pivot.opposite();
    let tianfu = TIANFU_SERIES
        .iter()
        .zip(0i64..)
        .map(|(&star, i)| (star, anchor.offset(-dir * i)));
    Ok(ziwei.chain(tianfu).collect())
}

/// Year-stem tables: star, its opposite partner (if any), sector per stem 甲..癸.
const STEM_TABLES: [(Star, Option<Star>, [u8; 10]); 6] = [
    (Star::WenChang, Some(Star::WenQu), [0, 11, 10, 9, 8, 7, 6, 5, 4, 3]),
    (Star::ZuoFu, Some(Star::YouBi), [1, 0, 11, 10, 9, 8, 7, 6, 5, 4]),
    (Star::LuCun, None, [2, 3, 4, 6, 7, 8, 9, 10, 0, 1]),
    (Star::TianKui, Some(Star::TianYue), [1, 0, 9, 8, 7, 6, 5, 4, 11, 10]),
    (Star::QingYang, Some(Star::TuoLuo), [0, 11, 10, 9, 8, 7, 6, 5, 4, 3]),
    (Star::HuoXing, Some(Star::LingXing), [7, 8, 9, 10, 11, 0, 1, 2, 3, 4]),
];

/// 地空 and 地劫 never move.
const DI_KONG_SECTOR: i64 = 9;
const DI_JIE_SECTOR: i64 = 3;

/// 天马 for the four "horse" month branches.
const fn tian_ma_by_month(month_branch: Branch) -> Option<i64> {
    match month_branch {
        Branch::Yin => Some(6),
        Branch::Shen => Some(0),
        Branch::Si => Some(9),
        Branch::Hai => Some(3),
        _ => None,
    }
}

/// Place the 14 auxiliary stars.
///
/// 天马 falls back to the Life sector located from the month branch's
/// month number and the hour branch.
pub fn place_aux_stars(
    year: StemBranch,
    month_branch: Branch,
    hour_branch: Branch,
) -> Result<Placement, ZiweiError> {
    let stem = year.stem.index() as usize;
    let mut placement = Placement::default();
    for (star, partner, table) in STEM_TABLES {
        let sector = Sector::wrap(i64::from(table[stem]));
        placement.insert(star, sector);
        if let Some(p) = partner {
            placement.insert(p, sector.opposite());
        }
    }
    placement.insert(Star::DiKong, Sector::wrap(DI_KONG_SECTOR));
    placement.insert(Star::DiJie, Sector::wrap(DI_JIE_SECTOR));

    let tian_ma = match tian_ma_by_month(month_branch) {
        Some(s) => Sector::wrap(s),
        None => locate_palaces(month_branch.month_number(), hour_branch)?.life,
    };
    placement.insert(Star::TianMa, tian_ma);
    Ok(placement)
}
