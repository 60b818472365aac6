//! Path management for Budget Rocket
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_ROCKET_HOME` environment variable (if set)
//! 2. The current working directory
//!
//! Data lives under `<base>/data/`, so the default budget file is
//! `./data/budget.json`.

use std::path::PathBuf;

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "BUDGET_ROCKET_HOME";

/// Manages all paths used by Budget Rocket
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all Budget Rocket data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// Uses `BUDGET_ROCKET_HOME` when set, otherwise the current directory.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => PathBuf::from("."),
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the default budget file
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
