//! Budget model
//!
//! A budget owns one expense report and one income report and derives the
//! surplus or deficit from their totals.

use std::fmt;

use super::entry::{Entry, EntryKind};
use super::report::Report;
use crate::error::{BudgetError, BudgetResult};

/// Sign of income minus expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Surplus,
    Deficit,
    Balanced,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surplus => write!(f, "surplus"),
            Self::Deficit => write!(f, "deficit"),
            Self::Balanced => write!(f, "balance"),
        }
    }
}

/// An expense report paired with an income report
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    expense_report: Report,
    income_report: Report,
}

impl Budget {
    /// Create a budget with two empty reports
    pub fn new() -> Self {
        Self {
            expense_report: Report::new(EntryKind::Expense),
            income_report: Report::new(EntryKind::Income),
        }
    }

    /// Add an expense to the expense report
    pub fn add_expense(&mut self, expense: Entry) -> BudgetResult<()> {
        Self::check_kind(EntryKind::Expense, &expense)?;
        self.expense_report.add_entry(expense);
        Ok(())
    }

    /// Add an income to the income report
    pub fn add_income(&mut self, income: Entry) -> BudgetResult<()> {
        Self::check_kind(EntryKind::Income, &income)?;
        self.income_report.add_entry(income);
        Ok(())
    }

    /// Add an entry to whichever report matches its kind
    pub fn add_entry(&mut self, entry: Entry) {
        tracing::debug!(kind = %entry.kind(), description = entry.description(), "adding entry");
        self.report_mut(entry.kind()).add_entry(entry);
    }

    /// Remove the expense at `index`
    pub fn delete_expense_at(&mut self, index: usize) -> BudgetResult<Entry> {
        self.delete_at(EntryKind::Expense, index)
    }

    /// Remove the income at `index`
    pub fn delete_income_at(&mut self, index: usize) -> BudgetResult<Entry> {
        self.delete_at(EntryKind::Income, index)
    }

    /// Remove the entry at `index` from the report of `kind`
    pub fn delete_at(&mut self, kind: EntryKind, index: usize) -> BudgetResult<Entry> {
        self.report_mut(kind)
            .remove_at(index)
            .ok_or_else(|| BudgetError::entry_not_found(kind, index))
    }

    /// Income total minus expense total
    pub fn difference(&self) -> f64 {
        self.income_report.sum() - self.expense_report.sum()
    }

    pub fn is_surplus(&self) -> bool {
        self.difference() > 0.0
    }

    pub fn is_deficit(&self) -> bool {
        self.difference() < 0.0
    }

    pub fn status(&self) -> BudgetStatus {
        if self.is_surplus() {
            BudgetStatus::Surplus
        } else if self.is_deficit() {
            BudgetStatus::Deficit
        } else {
            BudgetStatus::Balanced
        }
    }

    pub fn expense_report(&self) -> &Report {
        &self.expense_report
    }

    pub fn income_report(&self) -> &Report {
        &self.income_report
    }

    pub fn expense_report_mut(&mut self) -> &mut Report {
        &mut self.expense_report
    }

    pub fn income_report_mut(&mut self) -> &mut Report {
        &mut self.income_report
    }

    pub fn report(&self, kind: EntryKind) -> &Report {
        match kind {
            EntryKind::Expense => &self.expense_report,
            EntryKind::Income => &self.income_report,
        }
    }

    pub fn report_mut(&mut self, kind: EntryKind) -> &mut Report {
        match kind {
            EntryKind::Expense => &mut self.expense_report,
            EntryKind::Income => &mut self.income_report,
        }
    }

    fn check_kind(expected: EntryKind, entry: &Entry) -> BudgetResult<()> {
        if entry.kind() != expected {
            return Err(BudgetError::KindMismatch {
                expected,
                found: entry.kind(),
            });
        }
        Ok(())
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new()
    }
}
