//! Natal-chart pipeline over the `ziwei_base` primitives.
//!
//! This crate provides:
//! - [`natal_chart_for_birth`]: birth record → complete [`NatalChart`]
//! - [`numerology_for_birth`]: life number and digit patterns
//! - [`render_report`]: plain-text chart report
//! - [`recommend`]: catalog ranking from a chart and its numerology

pub mod catalog;
pub mod chart;
pub mod chart_types;
pub mod numerology;
pub mod report;

pub use catalog::{
    CatalogItem, DigitTag, FeeSchedule, PriceTier, Recommendation, RecommendationConfig,
    RecommendationList, dedupe_sort, recommend,
};
pub use chart::{natal_chart_for_birth, natal_chart_with_calendar};
pub use chart_types::{BirthRecord, ChartConfig, FourPillars, NatalChart};
pub use numerology::{NumerologyReport, numerology_for_birth};
pub use report::{render_report, write_report};
