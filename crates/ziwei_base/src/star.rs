//! The 28 stars: 14 major, 14 auxiliary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A chart star. Declaration order is the display order: the 紫微 series,
/// the 天府 series, then the auxiliaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Star {
    #[serde(alias = "紫微")]
    ZiWei,
    #[serde(alias = "天机")]
    TianJi,
    #[serde(alias = "太阳")]
    TaiYang,
    #[serde(alias = "武曲")]
    WuQu,
    #[serde(alias = "天同")]
    TianTong,
    #[serde(alias = "廉贞")]
    LianZhen,
    #[serde(alias = "天府")]
    TianFu,
    #[serde(alias = "太阴")]
    TaiYin,
    #[serde(alias = "贪狼")]
    TanLang,
    #[serde(alias = "巨门")]
    JuMen,
    #[serde(alias = "天相")]
    TianXiang,
    #[serde(alias = "天梁")]
    TianLiang,
    #[serde(alias = "七杀")]
    QiSha,
    #[serde(alias = "破军")]
    PoJun,
    #[serde(alias = "文昌")]
    WenChang,
    #[serde(alias = "文曲")]
    WenQu,
    #[serde(alias = "左辅")]
    ZuoFu,
    #[serde(alias = "右弼")]
    YouBi,
    #[serde(alias = "禄存")]
    LuCun,
    #[serde(alias = "天魁")]
    TianKui,
    #[serde(alias = "天钺")]
    TianYue,
    #[serde(alias = "天马")]
    TianMa,
    #[serde(alias = "擎羊")]
    QingYang,
    #[serde(alias = "陀罗")]
    TuoLuo,
    #[serde(alias = "火星")]
    HuoXing,
    #[serde(alias = "铃星")]
    LingXing,
    #[serde(alias = "地空")]
    DiKong,
    #[serde(alias = "地劫")]
    DiJie,
}

/// 紫微 series, walked from the pivot in the placement direction.
pub const ZIWEI_SERIES: [Star; 6] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
];

/// 天府 series, walked from opposite the pivot against the placement direction.
pub const TIANFU_SERIES: [Star; 8] = [
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
];

pub const MAJOR_STARS: [Star; 14] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
];

pub const AUX_STARS: [Star; 14] = [
    Star::WenChang,
    Star::WenQu,
    Star::ZuoFu,
    Star::YouBi,
    Star::LuCun,
    Star::TianKui,
    Star::TianYue,
    Star::TianMa,
    Star::QingYang,
    Star::TuoLuo,
    Star::HuoXing,
    Star::LingXing,
    Star::DiKong,
    Star::DiJie,
];

impl Star {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::LuCun => "禄存",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::TianMa => "天马",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
        }
    }

    /// Pinyin name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::ZiWei => "Zi Wei",
            Self::TianJi => "Tian Ji",
            Self::TaiYang => "Tai Yang",
            Self::WuQu => "Wu Qu",
            Self::TianTong => "Tian Tong",
            Self::LianZhen => "Lian Zhen",
            Self::TianFu => "Tian Fu",
            Self::TaiYin => "Tai Yin",
            Self::TanLang => "Tan Lang",
            Self::JuMen => "Ju Men",
            Self::TianXiang => "Tian Xiang",
            Self::TianLiang => "Tian Liang",
            Self::QiSha => "Qi Sha",
            Self::PoJun => "Po Jun",
            Self::WenChang => "Wen Chang",
            Self::WenQu => "Wen Qu",
            Self::ZuoFu => "Zuo Fu",
            Self::YouBi => "You Bi",
            Self::LuCun => "Lu Cun",
            Self::TianKui => "Tian Kui",
            Self::TianYue => "Tian Yue",
            Self::TianMa => "Tian Ma",
            Self::QingYang => "Qing Yang",
            Self::TuoLuo => "Tuo Luo",
            Self::HuoXing => "Huo Xing",
            Self::LingXing => "Ling Xing",
            Self::DiKong => "Di Kong",
            Self::DiJie => "Di Jie",
        }
    }

    /// Elemental affinities; a star may carry several.
    pub const fn elements(self) -> &'static [Element] {
        use Element::*;
        match self {
            Self::ZiWei => &[Earth],
            Self::TianJi => &[Wood],
            Self::TaiYang => &[Fire],
            Self::WuQu => &[Metal],
            Self::TianTong => &[Water],
            Self::LianZhen => &[Fire, Water],
            Self::TianFu => &[Earth],
            Self::TaiYin => &[Water],
            Self::TanLang => &[Wood, Water],
            Self::JuMen => &[Earth],
            Self::TianXiang => &[Water],
            Self::TianLiang => &[Earth],
            Self::QiSha => &[Metal],
            Self::PoJun => &[Water],
            Self::WenChang => &[Wood],
            Self::WenQu => &[Water],
            Self::ZuoFu => &[Earth],
            Self::YouBi => &[Earth],
            Self::LuCun => &[Earth],
            Self::TianKui => &[Metal],
            Self::TianYue => &[Metal],
            Self::TianMa => &[Fire],
            Self::QingYang => &[Metal],
            Self::TuoLuo => &[Metal],
            Self::HuoXing => &[Fire],
            Self::LingXing => &[Fire],
            Self::DiKong => &[Earth],
            Self::DiJie => &[Earth],
        }
    }

    pub const fn is_major(self) -> bool {
        (self as u8) < 14
    }

    pub const fn is_aux(self) -> bool {
        !self.is_major()
    }
}

impl Display for Star {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
