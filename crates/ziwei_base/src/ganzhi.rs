//! Heavenly stems, earthly branches, and the stem-branch (gan-zhi) calendar.
//!
//! Stems cycle with period 10, branches with period 12; a stem-branch pair
//! names a year, month, day or two-hour period. Each index wraps
//! independently, so the combined cycle has length 60.
//!
//! Anchors used throughout:
//! - year 1900 is 庚子 (stem offset +6 from 甲, branch offset 0 from 子)
//! - month 1 is the 寅 month, its stem two places after the year stem
//! - 1899-12-22 is a 甲子 day

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use ziwei_time::{SolarDate, calendar_to_jdn};

use crate::error::ZiweiError;
use crate::nayin::{Bureau, NaYin};

/// The 10 heavenly stems.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Stem {
    #[serde(alias = "甲")]
    Jia,
    #[serde(alias = "乙")]
    Yi,
    #[serde(alias = "丙")]
    Bing,
    #[serde(alias = "丁")]
    Ding,
    #[serde(alias = "戊")]
    Wu,
    #[serde(alias = "己")]
    Ji,
    #[serde(alias = "庚")]
    Geng,
    #[serde(alias = "辛")]
    Xin,
    #[serde(alias = "壬")]
    Ren,
    #[serde(alias = "癸")]
    Gui,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at any signed position; wraps modulo 10.
    pub const fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Yang stems are the 1st, 3rd, 5th, 7th and 9th (甲丙戊庚壬).
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stem {
    type Err = ZiweiError;

    /// Accepts the character (`"庚"`), the pinyin (`"Geng"`, any case) or both (`"庚(Geng)"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = leading_token(s);
        ALL_STEMS
            .into_iter()
            .find(|st| token == st.name() || token.eq_ignore_ascii_case(st.pinyin()))
            .ok_or_else(|| ZiweiError::InvalidInput(format!("unrecognized stem '{s}'")))
    }
}

/// The 12 earthly branches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Branch {
    #[serde(alias = "子")]
    Zi,
    #[serde(alias = "丑")]
    Chou,
    #[serde(alias = "寅")]
    Yin,
    #[serde(alias = "卯")]
    Mao,
    #[serde(alias = "辰")]
    Chen,
    #[serde(alias = "巳")]
    Si,
    #[serde(alias = "午")]
    Wu,
    #[serde(alias = "未")]
    Wei,
    #[serde(alias = "申")]
    Shen,
    #[serde(alias = "酉")]
    You,
    #[serde(alias = "戌")]
    Xu,
    #[serde(alias = "亥")]
    Hai,
}

/// All 12 branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at any signed position; wraps modulo 12.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Lunar month number whose month branch this is (寅 → 1 .. 丑 → 12).
    pub const fn month_number(self) -> u8 {
        (self.index() + 10) % 12 + 1
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Branch {
    type Err = ZiweiError;

    /// Accepts the character (`"卯"`), the pinyin (`"Mao"`, any case) or both (`"卯(Mao)"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = leading_token(s);
        ALL_BRANCHES
            .into_iter()
            .find(|b| token == b.name() || token.eq_ignore_ascii_case(b.pinyin()))
            .ok_or_else(|| ZiweiError::InvalidInput(format!("unrecognized branch '{s}'")))
    }
}

fn leading_token(s: &str) -> &str {
    s.split(['(', '（']).next().unwrap_or(s).trim()
}

/// A stem paired with a branch.
///
/// Pairs produced by the year and day rules always lie on the 60-cycle.
/// Month and hour rules are tabled and can yield off-cycle pairs such as
/// 癸子; [`StemBranch::cycle_index`] tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    /// Pair a stem and a branch as given, without checking cycle parity.
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at position `n` of the 60-cycle (甲子 = 0); wraps modulo 60.
    pub const fn from_cycle_index(n: i64) -> Self {
        Self {
            stem: Stem::from_index(n),
            branch: Branch::from_index(n),
        }
    }

    /// Position in the 60-cycle, or `None` when stem and branch differ in parity.
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if s % 2 != b % 2 {
            return None;
        }
        // n ≡ s (mod 10) and n ≡ b (mod 12)
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl FromStr for StemBranch {
    type Err = ZiweiError;

    /// Parse a two-character pair such as `"庚午"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(st), Some(br), None) => Ok(Self {
                stem: st.to_string().parse()?,
                branch: br.to_string().parse()?,
            }),
            _ => Err(ZiweiError::InvalidInput(format!(
                "expected a two-character stem-branch pair, got '{s}'"
            ))),
        }
    }
}

impl Serialize for StemBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Year anchoring the year cycle: 1900 is 庚子.
pub const YEAR_CYCLE_EPOCH: i32 = 1900;

/// Stem offset of [`YEAR_CYCLE_EPOCH`] (庚 = 6).
const YEAR_STEM_OFFSET: i64 = 6;

/// Julian Day Number of 1899-12-22, a 甲子 day.
pub const DAY_CYCLE_EPOCH_JDN: i64 = calendar_to_jdn(1899, 12, 22);

/// Hour-stem base per day stem (five-rats rule, as tabled: 甲乙→1, 丙丁→3, …).
pub const HOUR_STEM_BASE: [u8; 10] = [1, 1, 3, 3, 5, 5, 7, 7, 9, 9];

/// Year pair together with its Na Yin and five-elements bureau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearPillar {
    pub stem_branch: StemBranch,
    pub na_yin: NaYin,
    pub bureau: Bureau,
}

/// Stem-branch pair for a Gregorian year number.
pub const fn year_stem_branch(year: i32) -> StemBranch {
    let offset = (year - YEAR_CYCLE_EPOCH) as i64;
    StemBranch {
        stem: Stem::from_index(offset + YEAR_STEM_OFFSET),
        branch: Branch::from_index(offset),
    }
}

/// Year pair, Na Yin and bureau for a Gregorian year number.
///
/// The Na Yin table is total over the 60-cycle, so a miss is a
/// `ComputationFailure`.
pub fn year_pillar(year: i32) -> Result<YearPillar, ZiweiError> {
    let stem_branch = year_stem_branch(year);
    let na_yin = NaYin::of(stem_branch).ok_or_else(|| ZiweiError::ComputationFailure {
        stage: "year_pillar",
        key: stem_branch.to_string(),
    })?;
    Ok(YearPillar {
        stem_branch,
        na_yin,
        bureau: Bureau::from_na_yin(na_yin),
    })
}

/// Month pair for month 1..=12 of a year (five-tigers rule).
pub fn month_stem_branch(year: StemBranch, month: u8) -> Result<StemBranch, ZiweiError> {
    if !(1..=12).contains(&month) {
        return Err(ZiweiError::InvalidInput(format!(
            "month must be 1-12, got {month}"
        )));
    }
    let m = i64::from(month);
    Ok(StemBranch {
        stem: Stem::from_index(i64::from(year.stem.index()) + 2 + m - 1),
        branch: Branch::from_index(m + 1),
    })
}

/// Day pair, counted from the 甲子 day 1899-12-22.
pub const fn day_stem_branch(date: SolarDate) -> StemBranch {
    StemBranch::from_cycle_index(date.jdn() - DAY_CYCLE_EPOCH_JDN)
}

/// Hour pair for a day and its two-hour branch.
pub const fn hour_stem_branch(day: StemBranch, hour_branch: Branch) -> StemBranch {
    let base = HOUR_STEM_BASE[day.stem.index() as usize] as i64;
    StemBranch {
        stem: Stem::from_index(base + hour_branch.index() as i64),
        branch: hour_branch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn yang_stems() {
        let yang: Vec<Stem> = ALL_STEMS.into_iter().filter(|s| s.is_yang()).collect();
        assert_eq!(yang, [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren]);
    }

    #[test]
    fn parse_branch_forms() {
        assert_eq!("卯".parse::<Branch>().unwrap(), Branch::Mao);
        assert_eq!("mao".parse::<Branch>().unwrap(), Branch::Mao);
        assert_eq!("卯(Mao)".parse::<Branch>().unwrap(), Branch::Mao);
        assert!("Tiger".parse::<Branch>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn parse_stem_forms() {
        assert_eq!("庚".parse::<Stem>().unwrap(), Stem::Geng);
        assert_eq!("GENG".parse::<Stem>().unwrap(), Stem::Geng);
        assert!("子".parse::<Stem>().is_err());
    }

    #[test]
    fn month_number_of_branch() {
        assert_eq!(Branch::Yin.month_number(), 1);
        assert_eq!(Branch::Shen.month_number(), 7);
        assert_eq!(Branch::Zi.month_number(), 11);
        assert_eq!(Branch::Chou.month_number(), 12);
    }

    #[test]
    fn cycle_index_roundtrip() {
        for n in 0..60 {
            let sb = StemBranch::from_cycle_index(n);
            assert_eq!(sb.cycle_index(), Some(n as u8));
        }
    }

    #[test]
    fn off_cycle_pair_has_no_index() {
        let sb = StemBranch::new(Stem::Gui, Branch::Zi);
        assert_eq!(sb.cycle_index(), None);
    }

    #[test]
    fn pair_parse_and_display() {
        let sb: StemBranch = "庚午".parse().unwrap();
        assert_eq!(sb, StemBranch::new(Stem::Geng, Branch::Wu));
        assert_eq!(sb.to_string(), "庚午");
        assert!("庚".parse::<StemBranch>().is_err());
        assert!("庚午年".parse::<StemBranch>().is_err());
    }

    #[test]
    fn year_1900_is_geng_zi() {
        assert_eq!(year_stem_branch(1900).to_string(), "庚子");
    }

    #[test]
    fn year_1984_is_jia_zi() {
        assert_eq!(year_stem_branch(1984).to_string(), "甲子");
    }

    #[test]
    fn year_before_epoch_wraps() {
        // 1899 = 己亥
        assert_eq!(year_stem_branch(1899).to_string(), "己亥");
    }

    #[test]
    fn year_cycle_has_period_60() {
        for y in 1850..2050 {
            assert_eq!(year_pillar(y).unwrap(), year_pillar(y + 60).unwrap(), "year {y}");
        }
    }

    #[test]
    fn year_1990_pillar() {
        let p = year_pillar(1990).unwrap();
        assert_eq!(p.stem_branch.to_string(), "庚午");
        assert_eq!(p.na_yin, NaYin::LuPangTu);
        assert_eq!(p.bureau, Bureau::Earth5);
    }

    #[test]
    fn month_one_is_tiger() {
        let year = year_stem_branch(1984); // 甲子
        let m1 = month_stem_branch(year, 1).unwrap();
        assert_eq!(m1.to_string(), "丙寅");
    }

    #[test]
    fn month_seven_1990() {
        let year = year_stem_branch(1990);
        assert_eq!(month_stem_branch(year, 7).unwrap().to_string(), "戊申");
    }

    #[test]
    fn month_twelve_wraps_to_chou() {
        let year = year_stem_branch(1984);
        assert_eq!(month_stem_branch(year, 12).unwrap().branch, Branch::Chou);
    }

    #[test]
    fn month_out_of_range() {
        let year = year_stem_branch(1990);
        assert!(month_stem_branch(year, 0).unwrap_err().is_invalid_input());
        assert!(month_stem_branch(year, 13).is_err());
    }

    #[test]
    fn day_epoch_is_jia_zi() {
        let d = SolarDate::new(1899, 12, 22).unwrap();
        assert_eq!(day_stem_branch(d).to_string(), "甲子");
    }

    #[test]
    fn day_known_values() {
        let d = SolarDate::new(2000, 1, 1).unwrap();
        assert_eq!(day_stem_branch(d).to_string(), "戊午");
        let d = SolarDate::new(2024, 1, 1).unwrap();
        assert_eq!(day_stem_branch(d).to_string(), "甲子");
        let d = SolarDate::new(1990, 7, 7).unwrap();
        assert_eq!(day_stem_branch(d).to_string(), "癸酉");
    }

    #[test]
    fn hour_stem_uses_tabled_base() {
        let day: StemBranch = "癸酉".parse().unwrap();
        assert_eq!(hour_stem_branch(day, Branch::Zi).to_string(), "癸子");
        let day: StemBranch = "甲子".parse().unwrap();
        assert_eq!(hour_stem_branch(day, Branch::Yin).to_string(), "丁寅");
    }

    #[test]
    fn pair_serializes_as_string() {
        let sb = StemBranch::new(Stem::Geng, Branch::Wu);
        assert_eq!(serde_json::to_string(&sb).unwrap(), "\"庚午\"");
    }
}
