//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries, reports and the budget summary
//! for terminal display.

pub mod entry;
pub mod report;

pub use entry::{format_entry_row, format_report, format_rows, report_title};
pub use report::{format_bar_chart, format_budget_summary};
