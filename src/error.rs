//! Custom error types for Budget Rocket
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{EntryKind, EntryValidationError};

/// The main error type for Budget Rocket operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Validation errors for entries
    #[error("Validation error: {0}")]
    Validation(#[from] EntryValidationError),

    /// An entry was handed to the report of the other kind
    #[error("Expected an {expected} entry, got an {found} entry")]
    KindMismatch { expected: EntryKind, found: EntryKind },

    /// Command-line input that could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed or structurally incomplete JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Saving would overwrite entries that a lenient load skipped
    #[error(
        "{skipped} invalid entries in {path} were skipped while loading; \
         saving now would remove them from the file. Fix the file, or pass --force to save anyway"
    )]
    SkippedEntries { skipped: usize, path: String },
}

impl BudgetError {
    /// Create a "not found" error for a budget file
    pub fn file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for an entry position in a report
    pub fn entry_not_found(kind: EntryKind, index: usize) -> Self {
        Self::NotFound {
            entity_type: match kind {
                EntryKind::Expense => "Expense",
                EntryKind::Income => "Income",
            },
            identifier: format!("#{}", index),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if saving was refused to protect skipped entries
    pub fn is_skipped_entries(&self) -> bool {
        matches!(self, Self::SkippedEntries { .. })
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for Budget Rocket operations
pub type BudgetResult<T> = Result<T, BudgetError>;
