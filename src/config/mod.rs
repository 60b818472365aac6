//! Configuration module for Budget Rocket
//!
//! This module provides configuration management including:
//! - Path resolution for the data directory and budget file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
