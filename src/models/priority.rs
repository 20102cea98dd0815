//! Priority classification for spending categories
//!
//! A derived two-valued label: essentials (bills, groceries) are high
//! priority, everything else is low priority.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending priority derived from a record's category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Essential spending: Bills, Groceries
    High,
    /// Everything else
    Low,
}

impl Priority {
    /// Classify a category label
    ///
    /// Matches the stored label exactly; the vocabulary is open, so unknown
    /// categories fall through to low priority.
    pub fn classify(category: &str) -> Self {
        match category {
            "Bills" | "Groceries" => Self::High,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High Priority"),
            Self::Low => write!(f, "Low Priority"),
        }
    }
}
