//! JSON encoding of a budget
//!
//! The persisted document is a plain nested object:
//!
//! ```json
//! {
//!    "expenseReport": { "entries": [ { "description": "...", "amount": 1.5,
//!                                      "date": { "year": 2020, "month": 10, "day": 25 } } ] },
//!    "incomeReport": { "entries": [] }
//! }
//! ```
//!
//! Months are 0-based. Entries are rebuilt through the same validated
//! constructors used in memory, so bad persisted data fails exactly like a bad
//! fresh entry would.

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{date, Budget, Category, Entry, EntryKind, EntryValidationError, Report};

/// Indentation used for files on disk
const INDENT: &[u8] = b"   ";

/// What to do with an entry that fails validation while loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Abort the whole load with the entry's validation error
    #[default]
    Strict,
    /// Skip the entry, log a warning, and keep going
    Lenient,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BudgetDocument {
    expense_report: ReportDocument,
    income_report: ReportDocument,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReportDocument {
    entries: Vec<EntryDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EntryDocument {
    description: String,
    amount: f64,
    date: DateDocument,
    #[serde(default, skip_serializing_if = "Category::is_unspecified")]
    category: Category,
}

#[derive(Debug, Serialize, Deserialize)]
struct DateDocument {
    year: i32,
    month: i32,
    day: i32,
}

impl From<&Entry> for EntryDocument {
    fn from(entry: &Entry) -> Self {
        let (year, month0, day) = date::to_parts(entry.date());
        Self {
            description: entry.description().to_string(),
            amount: entry.amount(),
            date: DateDocument {
                year,
                // 0..=11 and 1..=31 always fit
                month: month0 as i32,
                day: day as i32,
            },
            category: entry.category(),
        }
    }
}

impl From<&Report> for ReportDocument {
    fn from(report: &Report) -> Self {
        Self {
            entries: report.iter().map(EntryDocument::from).collect(),
        }
    }
}

impl EntryDocument {
    fn into_entry(self, kind: EntryKind) -> Result<Entry, EntryValidationError> {
        let DateDocument { year, month, day } = self.date;
        let date = date::lenient_date(year, month, day).ok_or(
            EntryValidationError::DateOutOfRange {
                year,
                month0: month,
                day,
            },
        )?;

        Ok(Entry::new(kind, self.description, self.amount, date)?.with_category(self.category))
    }
}

/// Serialize a budget to pretty-printed JSON
pub fn to_json(budget: &Budget) -> BudgetResult<String> {
    let document = BudgetDocument {
        expense_report: budget.expense_report().into(),
        income_report: budget.income_report().into(),
    };

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    String::from_utf8(buffer)
        .map_err(|e| BudgetError::Storage(format!("Serialized budget is not UTF-8: {}", e)))
}

/// Parse a budget from JSON, rejecting any invalid entry
pub fn from_json(text: &str) -> BudgetResult<Budget> {
    from_json_with(text, LoadPolicy::Strict)
}

/// Parse a budget from JSON using the given policy for invalid entries
///
/// Structural problems (bad JSON, missing keys, wrong types) always fail with
/// [`BudgetError::Parse`]; no partial budget is returned.
pub fn from_json_with(text: &str, policy: LoadPolicy) -> BudgetResult<Budget> {
    decode(text, policy).map(|loaded| loaded.budget)
}

/// A decoded budget and the number of entries a lenient load dropped
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBudget {
    pub budget: Budget,
    pub skipped: usize,
}

impl LoadedBudget {
    /// Whether saving this budget would lose entries present in the source
    pub fn is_partial(&self) -> bool {
        self.skipped > 0
    }
}

/// Parse a budget from JSON, counting the entries skipped under
/// [`LoadPolicy::Lenient`]
pub fn decode(text: &str, policy: LoadPolicy) -> BudgetResult<LoadedBudget> {
    let document: BudgetDocument = serde_json::from_str(text)?;

    let mut budget = Budget::new();
    let mut skipped = load_report(&mut budget, EntryKind::Expense, document.expense_report, policy)?;
    skipped += load_report(&mut budget, EntryKind::Income, document.income_report, policy)?;
    Ok(LoadedBudget { budget, skipped })
}

fn load_report(
    budget: &mut Budget,
    kind: EntryKind,
    report: ReportDocument,
    policy: LoadPolicy,
) -> BudgetResult<usize> {
    let mut skipped = 0;
    for (index, doc) in report.entries.into_iter().enumerate() {
        match doc.into_entry(kind) {
            Ok(entry) => budget.add_entry(entry),
            Err(e) if policy == LoadPolicy::Lenient => {
                tracing::warn!(%kind, index, error = %e, "skipping invalid entry");
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(skipped)
}
