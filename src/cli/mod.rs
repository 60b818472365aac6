//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget model and storage.

pub mod entry;

pub use entry::{handle_entry_command, EntryCommands};

use crate::config::{BudgetPaths, Settings};
use crate::display::{format_bar_chart, format_budget_summary};
use crate::error::BudgetResult;
use crate::storage::BudgetStore;

/// Print totals, the surplus/deficit line and the bar chart
pub fn handle_summary_command(store: &BudgetStore, settings: &Settings) -> BudgetResult<()> {
    let loaded = store.load_or_default(settings.load_policy)?;
    report_skipped(loaded.skipped);
    let budget = loaded.budget;

    print!("{}", format_budget_summary(&budget, &settings.currency_symbol));
    println!();
    print!("{}", format_bar_chart(&budget, &settings.currency_symbol));
    Ok(())
}

/// Tell the user that a lenient load left entries out of what they see
pub(crate) fn report_skipped(skipped: usize) {
    if skipped > 0 {
        eprintln!(
            "Warning: {} invalid entries were skipped while loading the budget file",
            skipped
        );
    }
}

/// Print resolved paths and settings
pub fn handle_config_command(paths: &BudgetPaths, settings: &Settings, store: &BudgetStore) {
    println!("Budget Rocket Configuration");
    println!("===========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Budget file:    {}", store.path().display());
    if store.exists() {
        let state = if store.is_valid() { "readable" } else { "not valid JSON" };
        println!("Budget file is {}", state);
    } else {
        println!("Budget file does not exist yet");
    }
    println!();
    println!("Settings:");
    println!("  Load policy:     {:?}", settings.load_policy);
    println!("  Currency symbol: {}", settings.currency_symbol);
}
