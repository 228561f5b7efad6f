//! Na Yin ("sound") elements of the 60-cycle and the five-elements bureau.
//!
//! Consecutive cycle pairs share one Na Yin: 甲子 and 乙丑 are both 海中金,
//! 丙寅 and 丁卯 both 炉中火, and so on for 30 names.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::error::ZiweiError;
use crate::ganzhi::StemBranch;

/// The 30 Na Yin names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NaYin {
    HaiZhongJin,
    LuZhongHuo,
    DaLinMu,
    LuPangTu,
    JianFengJin,
    ShanTouHuo,
    JianXiaShui,
    ChengTouTu,
    BaiLaJin,
    YangLiuMu,
    QuanZhongShui,
    WuShangTu,
    PiLiHuo,
    SongBaiMu,
    ChangLiuShui,
    ShaZhongJin,
    ShanXiaHuo,
    PingDiMu,
    BiShangTu,
    JinBoJin,
    FuDengHuo,
    TianHeShui,
    DaYiTu,
    ChaiChuanJin,
    SangZheMu,
    DaXiShui,
    ShaZhongTu,
    TianShangHuo,
    ShiLiuMu,
    DaHaiShui,
}

/// Na Yin of each 60-cycle position (甲子 = 0 .. 癸亥 = 59).
pub const NAYIN_TABLE: [NaYin; 60] = {
    let mut table = [NaYin::HaiZhongJin; 60];
    let mut i = 0;
    while i < 60 {
        table[i] = ALL_NAYIN[i / 2];
        i += 1;
    }
    table
};

/// All 30 names in cycle order.
pub const ALL_NAYIN: [NaYin; 30] = [
    NaYin::HaiZhongJin,
    NaYin::LuZhongHuo,
    NaYin::DaLinMu,
    NaYin::LuPangTu,
    NaYin::JianFengJin,
    NaYin::ShanTouHuo,
    NaYin::JianXiaShui,
    NaYin::ChengTouTu,
    NaYin::BaiLaJin,
    NaYin::YangLiuMu,
    NaYin::QuanZhongShui,
    NaYin::WuShangTu,
    NaYin::PiLiHuo,
    NaYin::SongBaiMu,
    NaYin::ChangLiuShui,
    NaYin::ShaZhongJin,
    NaYin::ShanXiaHuo,
    NaYin::PingDiMu,
    NaYin::BiShangTu,
    NaYin::JinBoJin,
    NaYin::FuDengHuo,
    NaYin::TianHeShui,
    NaYin::DaYiTu,
    NaYin::ChaiChuanJin,
    NaYin::SangZheMu,
    NaYin::DaXiShui,
    NaYin::ShaZhongTu,
    NaYin::TianShangHuo,
    NaYin::ShiLiuMu,
    NaYin::DaHaiShui,
];

impl NaYin {
    /// Na Yin of a stem-branch pair; `None` for off-cycle pairs.
    pub const fn of(pair: StemBranch) -> Option<Self> {
        match pair.cycle_index() {
            Some(n) => Some(NAYIN_TABLE[n as usize]),
            None => None,
        }
    }

    /// Chinese name, e.g. `海中金`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HaiZhongJin => "海中金",
            Self::LuZhongHuo => "炉中火",
            Self::DaLinMu => "大林木",
            Self::LuPangTu => "路旁土",
            Self::JianFengJin => "剑锋金",
            Self::ShanTouHuo => "山头火",
            Self::JianXiaShui => "涧下水",
            Self::ChengTouTu => "城头土",
            Self::BaiLaJin => "白蜡金",
            Self::YangLiuMu => "杨柳木",
            Self::QuanZhongShui => "泉中水",
            Self::WuShangTu => "屋上土",
            Self::PiLiHuo => "霹雳火",
            Self::SongBaiMu => "松柏木",
            Self::ChangLiuShui => "长流水",
            Self::ShaZhongJin => "砂中金",
            Self::ShanXiaHuo => "山下火",
            Self::PingDiMu => "平地木",
            Self::BiShangTu => "壁上土",
            Self::JinBoJin => "金箔金",
            Self::FuDengHuo => "覆灯火",
            Self::TianHeShui => "天河水",
            Self::DaYiTu => "大驿土",
            Self::ChaiChuanJin => "钗钏金",
            Self::SangZheMu => "桑柘木",
            Self::DaXiShui => "大溪水",
            Self::ShaZhongTu => "沙中土",
            Self::TianShangHuo => "天上火",
            Self::ShiLiuMu => "石榴木",
            Self::DaHaiShui => "大海水",
        }
    }

    /// Element carried by the name's last character.
    pub const fn element(self) -> Element {
        use NaYin::*;
        match self {
            HaiZhongJin | JianFengJin | BaiLaJin | ShaZhongJin | JinBoJin | ChaiChuanJin => {
                Element::Metal
            }
            DaLinMu | YangLiuMu | SongBaiMu | PingDiMu | SangZheMu | ShiLiuMu => Element::Wood,
            JianXiaShui | QuanZhongShui | ChangLiuShui | TianHeShui | DaXiShui | DaHaiShui => {
                Element::Water
            }
            LuZhongHuo | ShanTouHuo | PiLiHuo | ShanXiaHuo | FuDengHuo | TianShangHuo => {
                Element::Fire
            }
            LuPangTu | ChengTouTu | WuShangTu | BiShangTu | DaYiTu | ShaZhongTu => Element::Earth,
        }
    }
}

impl Display for NaYin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for NaYin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Five-elements bureau: an element with its number 2..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

pub const ALL_BUREAUS: [Bureau; 5] = [
    Bureau::Water2,
    Bureau::Wood3,
    Bureau::Metal4,
    Bureau::Earth5,
    Bureau::Fire6,
];

impl Bureau {
    /// Bureau number 2..=6.
    pub const fn number(self) -> u32 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Element of the bureau.
    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Traditional label, e.g. `土五局`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    pub const fn from_element(element: Element) -> Self {
        match element {
            Element::Water => Self::Water2,
            Element::Wood => Self::Wood3,
            Element::Metal => Self::Metal4,
            Element::Earth => Self::Earth5,
            Element::Fire => Self::Fire6,
        }
    }

    pub const fn from_na_yin(na_yin: NaYin) -> Self {
        Self::from_element(na_yin.element())
    }

    /// Bureau with bureau number `n`, if any.
    pub fn from_number(n: u32) -> Option<Self> {
        ALL_BUREAUS.into_iter().find(|b| b.number() == n)
    }
}

impl Display for Bureau {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Bureau {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut st = serializer.serialize_struct("Bureau", 3)?;
        st.serialize_field("label", self.label())?;
        st.serialize_field("number", &self.number())?;
        st.serialize_field("element", &self.element())?;
        st.end()
    }
}

impl FromStr for Bureau {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = extract_bureau_number(s)?;
        Self::from_number(n)
            .ok_or_else(|| ZiweiError::InvalidInput(format!("no bureau numbered {n} ('{s}')")))
    }
}

const CJK_NUMERALS: [char; 10] = ['一', '二', '三', '四', '五', '六', '七', '八', '九', '十'];

/// Number carried by a bureau label.
///
/// Tried in order: all ASCII digits joined (`"5局"` → 5), the first CJK
/// numeral 一..十, then the default number of the first element present,
/// checked in the order 金 木 水 火 土 (`"土局"` → 5, `"土金局"` → 4).
pub fn extract_bureau_number(label: &str) -> Result<u32, ZiweiError> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    if !digits.is_empty() {
        return digits
            .parse()
            .map_err(|_| ZiweiError::InvalidInput(format!("bureau number too large in '{label}'")));
    }
    if let Some(n) = label
        .chars()
        .find_map(|c| CJK_NUMERALS.iter().position(|&d| d == c))
    {
        return Ok(n as u32 + 1);
    }
    ALL_ELEMENTS
        .into_iter()
        .find(|e| label.contains(e.name()))
        .map(|e| Bureau::from_element(e).number())
        .ok_or_else(|| ZiweiError::InvalidInput(format!("no bureau number in '{label}'")))
}
