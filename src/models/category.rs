//! Entry categories
//!
//! A category is an optional label on an entry. It is shown in listings and
//! persisted, but never changes how reports are totalled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Unspecified,
    Housing,
    Food,
    Transportation,
    Utilities,
    Health,
    Entertainment,
    Shopping,
    Salary,
    Investment,
    Gift,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Unspecified,
            Self::Housing,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Health,
            Self::Entertainment,
            Self::Shopping,
            Self::Salary,
            Self::Investment,
            Self::Gift,
            Self::Other,
        ]
    }

    /// The lowercase name used in files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Housing => "housing",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Utilities => "utilities",
            Self::Health => "health",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Salary => "salary",
            Self::Investment => "investment",
            Self::Gift => "gift",
            Self::Other => "other",
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownCategoryError(s.to_string()))
    }
}

/// Returned when a category name does not match any known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError(pub String);

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategoryError {}
