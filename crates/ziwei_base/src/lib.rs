//! Table-driven Zi Wei Dou Shu chart primitives.
//!
//! This crate provides:
//! - Stem-branch (gan-zhi) pairs for year, month, day and hour
//! - Na Yin elements and the five-elements bureau
//! - Life/Body palace location and the solar → lunar bridge
//! - Placement of the 14 major and 14 auxiliary stars
//! - Four transformations, star patterns and element balance
//! - Birth-date numerology
//!
//! Every function is a pure lookup over fixed tables.

pub mod element;
pub mod element_balance;
pub mod error;
pub mod ganzhi;
pub mod lunar_bridge;
pub mod nayin;
pub mod numerology;
pub mod palace;
pub mod pattern;
pub mod star;
pub mod star_placement;
pub mod transform;

pub use element::{ALL_ELEMENTS, Element, element_label};
pub use element_balance::{
    DEFAULT_DEFICIENCY_THRESHOLD, Deficiency, ElementBalance, ElementValues,
    analyze_element_balance,
};
pub use error::ZiweiError;
pub use ganzhi::{
    ALL_BRANCHES, ALL_STEMS, Branch, DAY_CYCLE_EPOCH_JDN, Stem, StemBranch, YearPillar,
    day_stem_branch, hour_stem_branch, month_stem_branch, year_pillar, year_stem_branch,
};
pub use lunar_bridge::{HourInput, LunarBirth, locate_palaces_for_solar, solar_to_lunar};
pub use nayin::{ALL_BUREAUS, Bureau, NaYin, extract_bureau_number};
pub use numerology::{DigitPattern, DigitPatternMatch, digit_patterns, life_number};
pub use palace::{ALL_PALACES, Palace, PalacePair, Sector, locate_palaces};
pub use pattern::{ALL_PATTERNS, PatternMatch, PatternRule, StarPattern, identify_patterns};
pub use star::{AUX_STARS, MAJOR_STARS, Star};
pub use star_placement::{
    Gender, Placement, Polarity, major_pivot, place_aux_stars, place_major_stars,
};
pub use transform::{TransformKind, TransformSet, resolve_transforms};
