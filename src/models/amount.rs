//! Amount formatting and parsing
//!
//! Entry amounts are plain `f64` dollars. Sums use ordinary floating-point
//! addition; these helpers only deal with turning amounts into text and back.

use std::fmt;

/// Format an amount with thousands separators and exactly two decimals
///
/// # Examples
/// ```
/// use budget_rocket::models::amount::format_amount;
/// assert_eq!(format_amount(1234.5), "1,234.50");
/// assert_eq!(format_amount(-34.42), "-34.42");
/// ```
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and must not print as "-0.00"
    if amount < 0.0 && fixed != "0.00" {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

/// Format an amount with a currency symbol placed after the sign
pub fn format_with_symbol(amount: f64, symbol: &str) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, formatted),
    }
}

/// Parse an amount from user input
///
/// Accepts formats: "10.50", "$10.50", "1,234.56", "10"
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };

    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let digits: String = rest.chars().filter(|c| *c != ',').collect();

    if digits.is_empty() {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    let value: f64 = digits
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
