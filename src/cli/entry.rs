//! Expense and income CLI commands
//!
//! The same subcommands serve both reports; the caller decides which kind of
//! entry they act on.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_report, format_rows, report_title};
use crate::error::{BudgetError, BudgetResult};
use crate::models::amount::{format_with_symbol, parse_amount};
use crate::models::{date, Category, Entry, EntryKind};
use crate::storage::BudgetStore;

/// Expense / income subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add a new entry
    Add {
        /// Amount (e.g., "12.50" or "$1,200")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List entries, optionally restricted to a date range
    List {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
    },
    /// Edit an existing entry
    Edit {
        /// Entry number as shown by `list`
        index: usize,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD); out-of-range months and days roll over
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry number as shown by `list`
        index: usize,
    },
}

/// Handle an expense or income command
pub fn handle_entry_command(
    store: &BudgetStore,
    settings: &Settings,
    kind: EntryKind,
    cmd: EntryCommands,
    force: bool,
) -> BudgetResult<()> {
    let loaded = store.load_or_default(settings.load_policy)?;
    if matches!(cmd, EntryCommands::List { .. }) {
        super::report_skipped(loaded.skipped);
    } else {
        store.check_overwrite(&loaded, force)?;
    }
    let mut budget = loaded.budget;

    match cmd {
        EntryCommands::Add {
            amount,
            description,
            date,
            category,
        } => {
            let amount = parse_amount_arg(&amount)?;
            let date = match date {
                Some(date_str) => parse_date_arg(&date_str)?,
                None => chrono::Local::now().date_naive(),
            };

            let mut entry = Entry::new(kind, description.join(" "), amount, date)?;
            if let Some(name) = category {
                entry.set_category(parse_category_arg(&name)?);
            }

            println!("Added {}:", kind);
            println!("  {}", entry);
            budget.add_entry(entry);
            store.save(&budget)?;
        }

        EntryCommands::List { from, to } => {
            println!("{}", report_title(kind));
            let report = budget.report(kind);

            if from.is_none() && to.is_none() {
                print!("{}", format_report(report));
                println!(
                    "\nTotal: {}",
                    format_with_symbol(report.sum(), &settings.currency_symbol)
                );
                return Ok(());
            }

            let start = from
                .as_deref()
                .map(parse_date_arg)
                .transpose()?
                .unwrap_or(NaiveDate::MIN);
            let end = to
                .as_deref()
                .map(parse_date_arg)
                .transpose()?
                .unwrap_or(NaiveDate::MAX);

            let rows = report.indexed_entries_in_range(start, end);
            print!("{}", format_rows(kind, &rows));
            println!(
                "\nTotal in range: {}",
                format_with_symbol(report.sum_in_range(start, end), &settings.currency_symbol)
            );
        }

        EntryCommands::Edit {
            index,
            amount,
            description,
            date,
            category,
        } => {
            if amount.is_none() && description.is_none() && date.is_none() && category.is_none() {
                println!("Nothing to change. Use --amount, --description, --date or --category.");
                return Ok(());
            }

            // Parse everything up front so a bad argument leaves the entry untouched
            let amount = amount.as_deref().map(parse_amount_arg).transpose()?;
            let date_parts = date.as_deref().map(parse_date_parts).transpose()?;
            let category = category.as_deref().map(parse_category_arg).transpose()?;

            let mut entry = budget
                .report(kind)
                .get(index)
                .cloned()
                .ok_or_else(|| BudgetError::entry_not_found(kind, index))?;

            if let Some(description) = description {
                entry.set_description(description)?;
            }
            if let Some(amount) = amount {
                entry.set_amount(amount)?;
            }
            if let Some((year, month0, day)) = date_parts {
                entry.set_date_ymd(year, month0, day)?;
            }
            if let Some(category) = category {
                entry.set_category(category);
            }

            if let Some(slot) = budget.report_mut(kind).get_mut(index) {
                *slot = entry.clone();
            }
            store.save(&budget)?;

            println!("The entry has been updated");
            println!("  {}", entry);
        }

        EntryCommands::Delete { index } => {
            let removed = budget.delete_at(kind, index)?;
            store.save(&budget)?;

            println!("The entry has been deleted");
            println!("  {}", removed);
        }
    }

    Ok(())
}

fn parse_amount_arg(s: &str) -> BudgetResult<f64> {
    parse_amount(s).map_err(|e| {
        BudgetError::InvalidInput(format!(
            "'{}' is not an amount. Use a format like '12.50'. Error: {}",
            s, e
        ))
    })
}

fn parse_category_arg(s: &str) -> BudgetResult<Category> {
    s.parse::<Category>().map_err(|e| {
        let known: Vec<&str> = Category::all().iter().map(Category::name).collect();
        BudgetError::InvalidInput(format!("{}. Known categories: {}", e, known.join(", ")))
    })
}

/// Split "YYYY-MM-DD" into a year, 0-based month and day without range checks
fn parse_date_parts(s: &str) -> BudgetResult<(i32, i32, i32)> {
    let invalid = || BudgetError::InvalidInput(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s));

    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let year: i32 = parts[0].parse().map_err(|_| invalid())?;
    let month: i32 = parts[1].parse().map_err(|_| invalid())?;
    let day: i32 = parts[2].parse().map_err(|_| invalid())?;

    Ok((year, month - 1, day))
}

/// Parse "YYYY-MM-DD", rolling over out-of-range months and days
fn parse_date_arg(s: &str) -> BudgetResult<NaiveDate> {
    let (year, month0, day) = parse_date_parts(s)?;
    date::lenient_date(year, month0, day).ok_or_else(|| {
        BudgetError::InvalidInput(format!("Date '{}' is outside the supported range", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_parts() {
        assert_eq!(parse_date_parts("2020-11-25").unwrap(), (2020, 10, 25));
        assert!(parse_date_parts("2020/11/25").is_err());
        assert!(parse_date_parts("2020-xx-25").is_err());
    }

    #[test]
    fn test_parse_date_arg_rolls_over() {
        assert_eq!(
            parse_date_arg("2020-13-01").unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date_arg("2021-02-30").unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_category_arg() {
        assert_eq!(parse_category_arg("food").unwrap(), Category::Food);
        let err = parse_category_arg("yachts").unwrap_err();
        assert!(err.to_string().contains("Known categories"));
    }

    #[test]
    fn test_parse_amount_arg() {
        assert_eq!(parse_amount_arg("$1,200").unwrap(), 1200.0);
        assert!(matches!(
            parse_amount_arg("lots"),
            Err(BudgetError::InvalidInput(_))
        ));
    }
}
