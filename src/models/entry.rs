//! Entry model
//!
//! An entry is a single dated, described, amount-bearing record. Expenses and
//! incomes share one struct and are told apart by their [`EntryKind`].
//! Description and amount are validated on construction and on every setter,
//! so an invalid entry can never be observed.

use chrono::NaiveDate;
use std::fmt;

use super::amount::format_amount;
use super::category::Category;
use super::date;

/// Whether an entry is money going out or coming in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Expense,
    Income,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

/// A single expense or income record
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    kind: EntryKind,
    description: String,
    amount: f64,
    date: NaiveDate,
    category: Category,
}

impl Entry {
    /// Create a new entry
    ///
    /// Fails if the description is empty or whitespace-only, or if the amount
    /// is negative or not finite.
    pub fn new(
        kind: EntryKind,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        let description = description.into();
        validate_description(&description)?;
        validate_amount(amount)?;

        Ok(Self {
            kind,
            description,
            amount,
            date,
            category: Category::Unspecified,
        })
    }

    /// Create a new expense
    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        Self::new(EntryKind::Expense, description, amount, date)
    }

    /// Create a new income
    pub fn income(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        Self::new(EntryKind::Income, description, amount, date)
    }

    /// Attach a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Calendar year of the entry date
    pub fn year(&self) -> i32 {
        date::to_parts(self.date).0
    }

    /// 0-based month of the entry date (January is 0)
    pub fn month0(&self) -> u32 {
        date::to_parts(self.date).1
    }

    /// Day of month of the entry date
    pub fn day(&self) -> u32 {
        date::to_parts(self.date).2
    }

    /// Set the description; the previous value is kept on failure
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), EntryValidationError> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        Ok(())
    }

    /// Set the amount; the previous value is kept on failure
    pub fn set_amount(&mut self, amount: f64) -> Result<(), EntryValidationError> {
        validate_amount(amount)?;
        self.amount = amount;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the date from a year, 0-based month and day
    ///
    /// Components are not range-checked: they roll over the same way
    /// [`date::lenient_date`] does, so `(2020, 12, 1)` becomes 2021-01-01.
    /// Only a result outside the representable calendar is an error, and the
    /// previous date is kept in that case.
    pub fn set_date_ymd(
        &mut self,
        year: i32,
        month0: i32,
        day: i32,
    ) -> Result<(), EntryValidationError> {
        let date = date::lenient_date(year, month0, day)
            .ok_or(EntryValidationError::DateOutOfRange { year, month0, day })?;
        self.date = date;
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Tabular, column-aligned representation used by listings
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<30}${:<30}{}",
            date::format_display(self.date),
            format_amount(self.amount),
            self.description
        )
    }
}

/// Check that a description has visible content
pub fn validate_description(description: &str) -> Result<(), EntryValidationError> {
    if description.trim().is_empty() {
        return Err(EntryValidationError::EmptyDescription);
    }
    Ok(())
}

/// Check that an amount is a finite, non-negative number
pub fn validate_amount(amount: f64) -> Result<(), EntryValidationError> {
    if amount.is_nan() || amount.is_infinite() {
        return Err(EntryValidationError::NonFiniteAmount);
    }
    if amount < 0.0 {
        return Err(EntryValidationError::NegativeAmount(amount));
    }
    Ok(())
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    EmptyDescription,
    NegativeAmount(f64),
    NonFiniteAmount,
    DateOutOfRange { year: i32, month0: i32, day: i32 },
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "empty description"),
            Self::NegativeAmount(amount) => write!(f, "negative amount ({})", amount),
            Self::NonFiniteAmount => write!(f, "amount is not a finite number"),
            Self::DateOutOfRange { year, month0, day } => write!(
                f,
                "date out of range (year {}, month {}, day {})",
                year, month0, day
            ),
        }
    }
}

impl std::error::Error for EntryValidationError {}
