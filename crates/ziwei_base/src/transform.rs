//! Four transformations (四化) of the year stem and the sector self-transformations.

use std::fmt::{Display, Formatter};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::ganzhi::Stem;
use crate::star::Star;

/// The six transformation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransformKind {
    YearProsperity,
    YearAuthority,
    YearStatus,
    YearObstacle,
    SelfProsperity,
    SelfObstacle,
}

pub const ALL_TRANSFORM_KINDS: [TransformKind; 6] = [
    TransformKind::YearProsperity,
    TransformKind::YearAuthority,
    TransformKind::YearStatus,
    TransformKind::YearObstacle,
    TransformKind::SelfProsperity,
    TransformKind::SelfObstacle,
];

impl TransformKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::YearProsperity => "YearStem-Prosperity",
            Self::YearAuthority => "YearStem-Authority",
            Self::YearStatus => "YearStem-Status",
            Self::YearObstacle => "YearStem-Obstacle",
            Self::SelfProsperity => "SelfTransform-Prosperity",
            Self::SelfObstacle => "SelfTransform-Obstacle",
        }
    }

    /// Chinese name (年干禄 .. 自化忌).
    pub const fn name(self) -> &'static str {
        match self {
            Self::YearProsperity => "年干禄",
            Self::YearAuthority => "年干权",
            Self::YearStatus => "年干科",
            Self::YearObstacle => "年干忌",
            Self::SelfProsperity => "自化禄",
            Self::SelfObstacle => "自化忌",
        }
    }
}

impl Display for TransformKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 禄, 权, 科, 忌 per year stem 甲..癸.
pub const YEAR_TRANSFORMS: [[Star; 4]; 10] = {
    use Star::*;
    [
        [LianZhen, PoJun, WuQu, TaiYang],
        [TianJi, TianLiang, ZiWei, TaiYin],
        [TianTong, TianJi, WenChang, LianZhen],
        [TaiYin, TianTong, TianJi, JuMen],
        [TanLang, TaiYin, YouBi, TianJi],
        [WuQu, TanLang, TianLiang, WenQu],
        [TaiYang, WuQu, TaiYin, TianTong],
        [JuMen, TaiYang, WenQu, WenChang],
        [TianLiang, ZiWei, ZuoFu, WuQu],
        [PoJun, JuMen, TaiYin, TanLang],
    ]
};

/// 自化禄, 自化忌 per sector stem 甲..癸.
pub const SELF_TRANSFORMS: [[Star; 2]; 10] = {
    use Star::*;
    [
        [LianZhen, TaiYang],
        [TianJi, TaiYin],
        [TianTong, LianZhen],
        [TaiYin, JuMen],
        [TanLang, TianJi],
        [WuQu, WenQu],
        [TaiYang, TianTong],
        [JuMen, WenChang],
        [TianLiang, WuQu],
        [PoJun, TanLang],
    ]
};

/// All six transformations; every label is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformSet {
    stars: [Star; 6],
}

impl TransformSet {
    pub const fn get(&self, kind: TransformKind) -> Star {
        self.stars[kind as usize]
    }

    /// Entries in label order.
    pub fn entries(&self) -> impl Iterator<Item = (TransformKind, Star)> + '_ {
        ALL_TRANSFORM_KINDS.into_iter().zip(self.stars)
    }
}

impl Serialize for TransformSet {
    /// Serialized as `{"YearStem-Prosperity": "太阳", ...}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        for (kind, star) in self.entries() {
            map.serialize_entry(kind.label(), star.name())?;
        }
        map.end()
    }
}

/// Transformations for a year stem and the stem used for self-transformation.
pub const fn resolve_transforms(year_stem: Stem, sector_stem: Stem) -> TransformSet {
    let [lu, quan, ke, ji] = YEAR_TRANSFORMS[year_stem.index() as usize];
    let [self_lu, self_ji] = SELF_TRANSFORMS[sector_stem.index() as usize];
    TransformSet {
        stars: [lu, quan, ke, ji, self_lu, self_ji],
    }
}
