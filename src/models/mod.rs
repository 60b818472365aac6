//! Core data models for Budget Rocket
//!
//! This module contains the data structures that represent the budgeting
//! domain: entries, the reports that hold them, and the budget that pairs an
//! expense report with an income report.

pub mod amount;
pub mod budget;
pub mod category;
pub mod date;
pub mod entry;
pub mod report;

pub use budget::{Budget, BudgetStatus};
pub use category::Category;
pub use entry::{Entry, EntryKind, EntryValidationError};
pub use report::Report;
