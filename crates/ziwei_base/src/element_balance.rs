//! Five-element balance of the major stars.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::element::{ALL_ELEMENTS, Element};
use crate::error::ZiweiError;
use crate::star_placement::Placement;

/// Ratio below which an element counts as deficient.
pub const DEFAULT_DEFICIENCY_THRESHOLD: f64 = 0.15;

/// Per-element values in [`ALL_ELEMENTS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementValues([f64; 5]);

impl ElementValues {
    pub const fn get(&self, e: Element) -> f64 {
        self.0[e.index() as usize]
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.into_iter().zip(self.0)
    }
}

impl Serialize for ElementValues {
    /// Serialized as `{"金": 2.0, "木": 1.5, ...}`.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (e, v) in self.iter() {
            map.serialize_entry(e.name(), &v)?;
        }
        map.end()
    }
}

/// Elements whose ratio fell below the threshold, or `None` when all clear it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deficiency {
    None,
    Elements(Vec<Element>),
}

impl Deficiency {
    /// `"无"` when nothing is deficient, else the element names joined with `、`.
    pub fn label(&self) -> String {
        match self {
            Self::None => "无".to_string(),
            Self::Elements(es) => es.iter().map(|e| e.name()).collect::<Vec<_>>().join("、"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementBalance {
    /// Fractional counts; a star with n affinities adds 1/n to each.
    pub counts: ElementValues,
    /// Counts divided by their total; sums to 1.
    pub ratios: ElementValues,
    /// Highest ratio, earliest element on ties.
    pub strongest: Element,
    /// Lowest ratio, earliest element on ties.
    pub weakest: Element,
    pub deficiency: Deficiency,
}

/// Aggregate the elemental affinities of the major stars in `placement`.
///
/// Auxiliary stars are ignored. A placement without major stars has no
/// balance and yields a `ComputationFailure`.
pub fn analyze_element_balance(
    placement: &Placement,
    deficiency_threshold: f64,
) -> Result<ElementBalance, ZiweiError> {
    if !(deficiency_threshold > 0.0 && deficiency_threshold < 1.0) {
        return Err(ZiweiError::InvalidInput(format!(
            "deficiency threshold must lie in (0, 1), got {deficiency_threshold}"
        )));
    }

    let mut counts = [0.0; 5];
    for (star, _) in placement.iter().filter(|(s, _)| s.is_major()) {
        let elements = star.elements();
        let share = 1.0 / elements.len() as f64;
        for e in elements {
            counts[e.index() as usize] += share;
        }
    }
    let counts = ElementValues(counts);
    let total = counts.total();
    if total <= 0.0 {
        return Err(ZiweiError::ComputationFailure {
            stage: "element_balance",
            key: "no major stars placed".into(),
        });
    }
    let ratios = ElementValues(counts.0.map(|c| c / total));

    let mut strongest = Element::Metal;
    let mut weakest = Element::Metal;
    for (e, r) in ratios.iter() {
        if r > ratios.get(strongest) {
            strongest = e;
        }
        if r < ratios.get(weakest) {
            weakest = e;
        }
    }

    let deficient: Vec<Element> = ratios
        .iter()
        .filter(|&(_, r)| r < deficiency_threshold)
        .map(|(e, _)| e)
        .collect();
    let deficiency = if deficient.is_empty() {
        Deficiency::None
    } else {
        Deficiency::Elements(deficient)
    };

    Ok(ElementBalance {
        counts,
        ratios,
        strongest,
        weakest,
        deficiency,
    })
}
