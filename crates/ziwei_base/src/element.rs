//! The five elements (wu xing).

use serde::{Deserialize, Serialize};

/// The five elements, in the fixed order used for tie-breaking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Element {
    #[serde(alias = "金")]
    Metal,
    #[serde(alias = "木")]
    Wood,
    #[serde(alias = "水")]
    Water,
    #[serde(alias = "火")]
    Fire,
    #[serde(alias = "土")]
    Earth,
}

/// All 5 elements in fixed order (Metal, Wood, Water, Fire, Earth).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Wood => "Wood",
            Self::Water => "Water",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }

    /// 0-based index in [`ALL_ELEMENTS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// Element named by a single Chinese character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '金' => Some(Self::Metal),
            '木' => Some(Self::Wood),
            '水' => Some(Self::Water),
            '火' => Some(Self::Fire),
            '土' => Some(Self::Earth),
            _ => None,
        }
    }
}

/// Concatenate Chinese element names, e.g. `[Water, Wood]` → `"水木"`.
pub fn element_label(elements: &[Element]) -> String {
    elements.iter().map(|e| e.name()).collect()
}
