//! User settings for Budget Rocket
//!
//! Manages preferences such as how strictly saved budgets are loaded and
//! where the budget file lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::storage::LoadPolicy;

/// User settings for Budget Rocket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How invalid entries in a saved budget are handled
    #[serde(default)]
    pub load_policy: LoadPolicy,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Budget file to use instead of `<data>/budget.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_file: Option<PathBuf>,
}

/// Settings schema written by this version
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            load_policy: LoadPolicy::default(),
            currency_symbol: default_currency(),
            budget_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SCHEMA_VERSION {
                return Err(BudgetError::Config(format!(
                    "Settings file uses schema version {}, newest supported is {}",
                    settings.schema_version, SCHEMA_VERSION
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the budget file, honouring the override
    ///
    /// A relative override is taken relative to the base directory.
    pub fn budget_file(&self, paths: &BudgetPaths) -> PathBuf {
        match &self.budget_file {
            Some(custom) if custom.is_absolute() => custom.clone(),
            Some(custom) => paths.base_dir().join(custom),
            None => paths.budget_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.load_policy, LoadPolicy::Strict);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.budget_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.load_policy = LoadPolicy::Lenient;
        settings.currency_symbol = "€".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.load_policy, LoadPolicy::Lenient);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"load_policy": "lenient"}"#).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.load_policy, LoadPolicy::Lenient);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }

    #[test]
    fn test_newer_schema_version_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"schema_version": 2}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.to_string().contains("schema version 2"));
    }

    #[test]
    fn test_budget_file_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.budget_file(&paths), paths.budget_file());

        settings.budget_file = Some(PathBuf::from("other.json"));
        assert_eq!(
            settings.budget_file(&paths),
            temp_dir.path().join("other.json")
        );

        let absolute = temp_dir.path().join("abs.json");
        settings.budget_file = Some(absolute.clone());
        assert_eq!(settings.budget_file(&paths), absolute);
    }
}
