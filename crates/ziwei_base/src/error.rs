//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziwei_time::CalendarError;

/// Errors from chart primitives and the chart pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ZiweiError {
    /// Caller-supplied data failed validation or fell outside a table's domain.
    InvalidInput(String),
    /// A lookup expected to be total came back empty. Always a table defect.
    ComputationFailure {
        /// Pipeline stage that performed the lookup.
        stage: &'static str,
        /// Key that missed.
        key: String,
    },
}

impl ZiweiError {
    /// Prefix an `InvalidInput` message with the stage that rejected it.
    pub fn in_stage(self, stage: &'static str) -> Self {
        match self {
            Self::InvalidInput(msg) => Self::InvalidInput(format!("{stage}: {msg}")),
            other => other,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl Display for ZiweiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ComputationFailure { stage, key } => {
                write!(f, "computation failure in {stage}: no table entry for '{key}'")
            }
        }
    }
}

impl Error for ZiweiError {}

impl From<CalendarError> for ZiweiError {
    fn from(e: CalendarError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
