//! Catalog ranking driven by a chart and a numerology report.
//!
//! Three lists are produced: items matching the bureau's element (year),
//! items matching the month/day Na Yin elements, the life number or a digit
//! pattern (month/day), and items matching caller-supplied house tags
//! (feng shui). Each list is de-duplicated by id, first occurrence winning,
//! then ordered by price tier and by descending digit-tag count.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ziwei_base::{DigitPattern, Element, NaYin, StemBranch};

use crate::chart_types::NatalChart;
use crate::numerology::NumerologyReport;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    High,
    Mid,
    Low,
    /// Any unrecognised tier label; ranks after `Low`.
    #[serde(other)]
    Unknown,
}

/// A digit tag: a life number or a digit-pattern name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DigitTag {
    Number(u8),
    Pattern(DigitPattern),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "wuxing")]
    pub element: Element,
    pub price_tier: PriceTier,
    #[serde(default, alias = "digital_tags")]
    pub digit_tags: Vec<DigitTag>,
    #[serde(default)]
    pub fengshui_tags: Vec<String>,
}

/// Fee charged for each recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub year: f64,
    pub month_day: f64,
    pub fengshui: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            year: 0.0,
            month_day: 10.0,
            fengshui: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationConfig {
    pub fees: FeeSchedule,
    /// Include items matching the Na Yin element of the month and day pairs.
    pub match_nayin_elements: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            fees: FeeSchedule::default(),
            match_nayin_elements: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationList {
    pub items: Vec<CatalogItem>,
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub year: RecommendationList,
    pub month_day: RecommendationList,
    pub fengshui: RecommendationList,
}

/// Rank `catalog` against a chart, its numerology and optional house tags.
///
/// An empty `house_tags` yields an empty feng-shui list.
pub fn recommend(
    catalog: &[CatalogItem],
    chart: &NatalChart,
    numerology: &NumerologyReport,
    house_tags: &[String],
    config: &RecommendationConfig,
) -> Recommendation {
    Recommendation {
        year: RecommendationList {
            items: by_year(catalog, chart),
            fee: config.fees.year,
        },
        month_day: RecommendationList {
            items: by_month_day(catalog, chart, numerology, config.match_nayin_elements),
            fee: config.fees.month_day,
        },
        fengshui: RecommendationList {
            items: by_fengshui(catalog, house_tags),
            fee: config.fees.fengshui,
        },
    }
}

fn by_year(catalog: &[CatalogItem], chart: &NatalChart) -> Vec<CatalogItem> {
    let element = chart.bureau.element();
    dedupe_sort(catalog.iter().filter(|item| item.element == element))
}

fn by_month_day(
    catalog: &[CatalogItem],
    chart: &NatalChart,
    numerology: &NumerologyReport,
    match_nayin_elements: bool,
) -> Vec<CatalogItem> {
    let mut picked: Vec<&CatalogItem> = Vec::new();

    if match_nayin_elements {
        // off-cycle pairs carry no Na Yin and contribute nothing
        for pair in [chart.pillars.month, chart.pillars.day] {
            if let Some(element) = nayin_element(pair) {
                picked.extend(catalog.iter().filter(|item| item.element == element));
            }
        }
    }

    let life = DigitTag::Number(numerology.life_number);
    picked.extend(catalog.iter().filter(|item| item.digit_tags.contains(&life)));

    let patterns: HashSet<DigitTag> = numerology
        .patterns
        .iter()
        .map(|m| DigitTag::Pattern(m.pattern))
        .collect();
    if !patterns.is_empty() {
        picked.extend(
            catalog
                .iter()
                .filter(|item| item.digit_tags.iter().any(|t| patterns.contains(t))),
        );
    }

    dedupe_sort(picked)
}

fn by_fengshui(catalog: &[CatalogItem], house_tags: &[String]) -> Vec<CatalogItem> {
    if house_tags.is_empty() {
        return Vec::new();
    }
    dedupe_sort(
        catalog
            .iter()
            .filter(|item| item.fengshui_tags.iter().any(|t| house_tags.contains(t))),
    )
}

fn nayin_element(pair: StemBranch) -> Option<Element> {
    NaYin::of(pair).map(NaYin::element)
}

/// Keep the first item per id, then order by tier (high first) and by
/// descending digit-tag count. The sort is stable.
pub fn dedupe_sort<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<CatalogItem> {
    let mut seen = HashSet::new();
    let mut out: Vec<CatalogItem> = items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .cloned()
        .collect();
    out.sort_by_key(|item| (item.price_tier, std::cmp::Reverse(item.digit_tags.len())));
    out
}
