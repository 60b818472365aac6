//! Budget Rocket - personal expense and income tracker
//!
//! This library provides the core functionality for the Budget Rocket
//! application: entries grouped into an expense report and an income report,
//! a budget that derives surplus or deficit from them, and JSON persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, reports, budget)
//! - `storage`: JSON encoding and the budget file store
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_rocket::models::{Budget, Entry};
//! use budget_rocket::storage::BudgetStore;
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), budget_rocket::BudgetError> {
//! let mut budget = Budget::new();
//! let date = NaiveDate::from_ymd_opt(2020, 11, 25).unwrap();
//! budget.add_income(Entry::income("Paycheque", 100.0, date)?)?;
//! budget.add_expense(Entry::expense("Groceries", 65.58, date)?)?;
//! assert!(budget.is_surplus());
//!
//! BudgetStore::new("./data/budget.json").save(&budget)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
