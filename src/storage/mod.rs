//! Storage layer for Budget Rocket
//!
//! Converts a [`Budget`] to and from its JSON document and reads or writes
//! that document on disk with atomic writes and automatic directory creation.

pub mod codec;
pub mod file_io;

pub use codec::{decode, from_json, from_json_with, to_json, LoadPolicy, LoadedBudget};
pub use file_io::{read_text_required, write_text_atomic};

use std::path::{Path, PathBuf};

use crate::error::BudgetError;
use crate::models::Budget;

/// Reads and writes one budget file
#[derive(Debug, Clone)]
pub struct BudgetStore {
    path: PathBuf,
}

impl BudgetStore {
    /// Create a store for the file at `path`; nothing is touched on disk yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Check if the file exists and is well-formed JSON
    pub fn is_valid(&self) -> bool {
        file_io::json_file_valid(&self.path)
    }

    /// Load the budget, rejecting any invalid entry
    pub fn load(&self) -> Result<Budget, BudgetError> {
        self.load_with(LoadPolicy::Strict)
    }

    /// Load the budget using the given policy for invalid entries
    pub fn load_with(&self, policy: LoadPolicy) -> Result<Budget, BudgetError> {
        self.load_counted(policy).map(|loaded| loaded.budget)
    }

    /// Load the budget and report how many invalid entries were skipped
    pub fn load_counted(&self, policy: LoadPolicy) -> Result<LoadedBudget, BudgetError> {
        let text = read_text_required(&self.path)?;
        let loaded = decode(&text, policy)?;

        tracing::info!(
            path = %self.path.display(),
            expenses = loaded.budget.expense_report().size(),
            incomes = loaded.budget.income_report().size(),
            skipped = loaded.skipped,
            "loaded budget"
        );
        Ok(loaded)
    }

    /// Load the budget, or start an empty one if the file does not exist yet
    pub fn load_or_default(&self, policy: LoadPolicy) -> Result<LoadedBudget, BudgetError> {
        match self.load_counted(policy) {
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %self.path.display(), "no budget file, starting empty");
                Ok(LoadedBudget {
                    budget: Budget::new(),
                    skipped: 0,
                })
            }
            other => other,
        }
    }

    /// Refuse to overwrite a file whose load dropped entries, unless forced
    pub fn check_overwrite(&self, loaded: &LoadedBudget, force: bool) -> Result<(), BudgetError> {
        if !loaded.is_partial() {
            return Ok(());
        }
        if force {
            tracing::warn!(
                path = %self.path.display(),
                skipped = loaded.skipped,
                "overwriting budget file without its skipped entries"
            );
            return Ok(());
        }
        Err(BudgetError::SkippedEntries {
            skipped: loaded.skipped,
            path: self.path.display().to_string(),
        })
    }

    /// Save the budget atomically
    pub fn save(&self, budget: &Budget) -> Result<(), BudgetError> {
        let text = to_json(budget)?;
        write_text_atomic(&self.path, &text)?;

        tracing::info!(path = %self.path.display(), "saved budget");
        Ok(())
    }
}
