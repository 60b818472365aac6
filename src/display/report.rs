//! Budget summary formatting
//!
//! Totals, the surplus/deficit line, and a text bar chart comparing expenses
//! with income.

use crate::models::amount::format_with_symbol;
use crate::models::Budget;

/// Width of the longest bar in the chart
const BAR_WIDTH: usize = 40;

/// Format the budget summary: totals, difference and status
pub fn format_budget_summary(budget: &Budget, symbol: &str) -> String {
    let expense_total = budget.expense_report().sum();
    let income_total = budget.income_report().sum();
    let difference = budget.difference();

    let mut output = String::new();
    output.push_str("Budget Report:\n\n");
    output.push_str(&format!(
        "Total expenses: {}\n",
        format_with_symbol(expense_total, symbol)
    ));
    output.push_str(&format!(
        "Total income: {}\n",
        format_with_symbol(income_total, symbol)
    ));

    // The status word carries the sign
    output.push_str(&format!(
        "You have a {} of {}\n",
        budget.status(),
        format_with_symbol(difference.abs(), symbol)
    ));

    output
}

/// Format the "Expense vs. Income" bar chart
pub fn format_bar_chart(budget: &Budget, symbol: &str) -> String {
    let expense_total = budget.expense_report().sum();
    let income_total = budget.income_report().sum();
    let max_value = expense_total.max(income_total);

    let mut output = String::new();
    output.push_str(&format_header("Expense vs. Income", BAR_WIDTH + 22));
    output.push('\n');
    output.push_str(&separator(BAR_WIDTH + 22));
    output.push('\n');

    for (label, value) in [("Expenses", expense_total), ("Income", income_total)] {
        output.push_str(&format!(
            "{:<9} {} {}\n",
            label,
            format_bar(value, max_value, BAR_WIDTH),
            format_with_symbol(value, symbol)
        ));
    }

    output
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use chrono::NaiveDate;

    fn budget(expense: f64, income: f64) -> Budget {
        let date = NaiveDate::from_ymd_opt(2008, 4, 3).unwrap();
        let mut budget = Budget::new();
        budget
            .add_expense(Entry::expense("Entry 1", expense, date).unwrap())
            .unwrap();
        budget
            .add_income(Entry::income("Entry 2", income, date).unwrap())
            .unwrap();
        budget
    }

    #[test]
    fn test_summary_surplus() {
        let summary = format_budget_summary(&budget(65.58, 100.0), "$");
        assert!(summary.contains("Total expenses: $65.58"));
        assert!(summary.contains("Total income: $100.00"));
        assert!(summary.contains("You have a surplus of $34.42"));
    }

    #[test]
    fn test_summary_deficit() {
        let summary = format_budget_summary(&budget(100.0, 65.58), "$");
        assert!(summary.contains("You have a deficit of $34.42"));
        assert!(!summary.contains("-$"));
    }

    #[test]
    fn test_summary_balanced() {
        let summary = format_budget_summary(&budget(10.0, 10.0), "$");
        assert!(summary.contains("You have a balance of $0.00"));
    }

    #[test]
    fn test_bar_chart() {
        let chart = format_bar_chart(&budget(50.0, 100.0), "$");
        assert!(chart.contains("Expense vs. Income"));

        let expense_line = chart.lines().find(|l| l.starts_with("Expenses")).unwrap();
        assert_eq!(expense_line.chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);

        let income_line = chart.lines().find(|l| l.starts_with("Income")).unwrap();
        assert_eq!(income_line.chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_bar_chart_empty_budget() {
        let chart = format_bar_chart(&Budget::new(), "$");
        assert!(!chart.contains('█'));
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 0.0, 4), "    ");
    }
}
