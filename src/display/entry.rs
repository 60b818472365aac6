//! Entry display formatting
//!
//! Numbered listings of a report's entries, used when picking an entry to
//! edit or delete by position.

use crate::models::{Entry, EntryKind, Report};

/// Format one numbered row; the number is the entry's position in its report
pub fn format_entry_row(index: usize, entry: &Entry) -> String {
    let category = if entry.category().is_unspecified() {
        String::new()
    } else {
        format!(" [{}]", entry.category())
    };

    format!("{:<14}{}{}", index, entry, category)
}

/// Format a whole report with a header, or a placeholder when it is empty
pub fn format_report(report: &Report) -> String {
    let rows: Vec<(usize, &Entry)> = report.iter().enumerate().collect();
    format_rows(report.kind(), &rows)
}

/// Format the entries of a report that fall in a date range
///
/// Rows keep their position in the full report so the numbers stay usable
/// for edit and delete.
pub fn format_rows(kind: EntryKind, rows: &[(usize, &Entry)]) -> String {
    if rows.is_empty() {
        return match kind {
            EntryKind::Expense => "There are no expenses to show\n".to_string(),
            EntryKind::Income => "There is no income to show\n".to_string(),
        };
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14}{:<30}{:<31}{}\n",
        "Entry Number", "Date of Entry", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(87));
    output.push('\n');

    for (index, entry) in rows {
        output.push_str(&format_entry_row(*index, entry));
        output.push('\n');
    }

    output
}

/// Title used above a report listing
pub fn report_title(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Expense => "Expense Report:",
        EntryKind::Income => "Income Report:",
    }
}
