//! Numerology report for a birth record.

use serde::Serialize;
use ziwei_base::{DigitPatternMatch, ZiweiError, digit_patterns, life_number};

use crate::chart_types::BirthRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyReport {
    /// Repeated digit sum of the birth date, 1..=9.
    pub life_number: u8,
    pub patterns: Vec<DigitPatternMatch>,
}

impl NumerologyReport {
    /// Names of the matched patterns in window order; repeats are kept.
    pub fn pattern_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|m| m.pattern.name())
    }
}

/// Life number and digit patterns of the birth date. Independent of the chart.
pub fn numerology_for_birth(birth: &BirthRecord) -> Result<NumerologyReport, ZiweiError> {
    let date = birth.solar_date().map_err(|e| e.in_stage("numerology"))?;
    Ok(NumerologyReport {
        life_number: life_number(date),
        patterns: digit_patterns(date),
    })
}
