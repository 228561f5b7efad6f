//! Input, configuration and output records of the natal-chart pipeline.

use serde::{Deserialize, Serialize};
use ziwei_base::{
    Branch, Bureau, DEFAULT_DEFICIENCY_THRESHOLD, ElementBalance, Gender, HourInput, NaYin,
    Palace, PalacePair, PatternMatch, Placement, Polarity, Stem, StemBranch, TransformSet,
    ZiweiError,
};
use ziwei_time::{LunarDate, SolarDate};

/// Birth data as supplied by a caller.
///
/// `hour` is a clock hour 0..=23 or a branch name (`"子"`, `"Zi"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: HourInput,
    pub gender: Gender,
}

impl BirthRecord {
    pub const fn new(year: i32, month: u8, day: u8, hour: HourInput, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            gender,
        }
    }

    /// Validated Gregorian date of birth.
    pub fn solar_date(&self) -> Result<SolarDate, ZiweiError> {
        Ok(SolarDate::new(self.year, self.month, self.day)?)
    }
}

/// Chart-level tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Stem used for the self-transformations. `None` uses the year stem.
    pub self_transform_stem: Option<Stem>,
    /// Ratio below which an element is reported deficient (default 0.15).
    pub deficiency_threshold: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            self_transform_stem: None,
            deficiency_threshold: DEFAULT_DEFICIENCY_THRESHOLD,
        }
    }
}

impl ChartConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.deficiency_threshold.is_finite()
            || self.deficiency_threshold <= 0.0
            || self.deficiency_threshold >= 1.0
        {
            return Err("deficiency_threshold must lie in (0, 1)");
        }
        Ok(())
    }
}

/// Year, month, day and hour stem-branch pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

/// Complete natal chart. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    pub pillars: FourPillars,
    pub na_yin: NaYin,
    pub bureau: Bureau,
    pub lunar: LunarDate,
    pub hour_branch: Branch,
    pub palaces: PalacePair,
    pub life_palace: Palace,
    pub body_palace: Palace,
    pub polarity: Polarity,
    pub major_stars: Placement,
    pub aux_stars: Placement,
    pub transforms: TransformSet,
    pub patterns: Vec<PatternMatch>,
    pub element_balance: ElementBalance,
}
