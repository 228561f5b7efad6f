//! The natal-chart pipeline.
//!
//! Stages, in order: pillars (year/month/day/hour pairs and bureau), lunar
//! conversion, palaces, star placement, transformations, patterns, element
//! balance. Each stage tags its `InvalidInput` errors with its name.

use tracing::{debug, trace};
use ziwei_base::{
    Polarity, ZiweiError, analyze_element_balance, day_stem_branch, hour_stem_branch,
    identify_patterns, locate_palaces, month_stem_branch, place_aux_stars, place_major_stars,
    resolve_transforms, solar_to_lunar, year_pillar,
};
use ziwei_time::{LunarCalendar, TabularLunarCalendar};

use crate::chart_types::{BirthRecord, ChartConfig, FourPillars, NatalChart};

/// Compute a natal chart with the bundled lunar calendar.
pub fn natal_chart_for_birth(
    birth: &BirthRecord,
    config: &ChartConfig,
) -> Result<NatalChart, ZiweiError> {
    natal_chart_with_calendar(&TabularLunarCalendar, birth, config)
}

/// Compute a natal chart, converting dates through `calendar`.
pub fn natal_chart_with_calendar<C: LunarCalendar + ?Sized>(
    calendar: &C,
    birth: &BirthRecord,
    config: &ChartConfig,
) -> Result<NatalChart, ZiweiError> {
    config
        .validate()
        .map_err(|msg| ZiweiError::InvalidInput(msg.to_string()).in_stage("config"))?;
    let date = birth.solar_date().map_err(|e| e.in_stage("birth"))?;

    let year = year_pillar(birth.year).map_err(|e| e.in_stage("pillars"))?;
    let month = month_stem_branch(year.stem_branch, birth.month).map_err(|e| e.in_stage("pillars"))?;
    let day = day_stem_branch(date);
    let lunar_birth =
        solar_to_lunar(calendar, date, birth.hour).map_err(|e| e.in_stage("lunar"))?;
    let hour = hour_stem_branch(day, lunar_birth.hour_branch);
    let pillars = FourPillars {
        year: year.stem_branch,
        month,
        day,
        hour,
    };
    debug!(
        %date,
        year = %year.stem_branch,
        na_yin = %year.na_yin,
        bureau = %year.bureau,
        "pillars computed"
    );
    trace!(?pillars);

    let lunar = lunar_birth.lunar;
    debug!(
        calendar = calendar.name(),
        lunar_month = lunar.month,
        lunar_day = lunar.day,
        leap = lunar.is_leap_month,
        hour_branch = %lunar_birth.hour_branch,
        "lunar date"
    );

    let palaces =
        locate_palaces(lunar.month, lunar_birth.hour_branch).map_err(|e| e.in_stage("palace"))?;
    let polarity = Polarity::new(year.stem_branch.stem, birth.gender);
    debug!(
        life = %palaces.life_palace(),
        body = %palaces.body_palace(),
        %polarity,
        "palaces located"
    );

    let major_stars = place_major_stars(lunar.day, year.bureau.number(), polarity)
        .map_err(|e| e.in_stage("stars"))?;
    let aux_stars = place_aux_stars(year.stem_branch, month.branch, lunar_birth.hour_branch)
        .map_err(|e| e.in_stage("stars"))?;
    trace!(?major_stars, ?aux_stars, "stars placed");

    let self_stem = config.self_transform_stem.unwrap_or(year.stem_branch.stem);
    let transforms = resolve_transforms(year.stem_branch.stem, self_stem);
    trace!(?transforms);

    let patterns = identify_patterns(&major_stars);
    trace!(count = patterns.len(), "patterns identified");

    let element_balance = analyze_element_balance(&major_stars, config.deficiency_threshold)
        .map_err(|e| e.in_stage("balance"))?;
    trace!(
        strongest = element_balance.strongest.name(),
        weakest = element_balance.weakest.name(),
        "element balance"
    );

    Ok(NatalChart {
        pillars,
        na_yin: year.na_yin,
        bureau: year.bureau,
        lunar,
        hour_branch: lunar_birth.hour_branch,
        palaces,
        life_palace: palaces.life_palace(),
        body_palace: palaces.body_palace(),
        polarity,
        major_stars,
        aux_stars,
        transforms,
        patterns,
        element_balance,
    })
}
