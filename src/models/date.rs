//! Calendar helpers for entry dates
//!
//! Entry dates are `NaiveDate`s in memory. The persisted format and the
//! `(year, month, day)` setters use a 0-based month, and out-of-range
//! components roll over into neighbouring months and years instead of
//! being rejected.

use chrono::{Datelike, Duration, NaiveDate};

/// Build a date from a 0-based month, rolling over out-of-range components
///
/// `month0 = 12` is January of the following year, `day = 0` is the last day
/// of the previous month, negative values count backwards. Returns `None`
/// only when the result is outside the range `NaiveDate` can represent.
///
/// # Examples
/// ```
/// use budget_rocket::models::date::lenient_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(lenient_date(2020, 10, 25), NaiveDate::from_ymd_opt(2020, 11, 25));
/// assert_eq!(lenient_date(2020, 12, 1), NaiveDate::from_ymd_opt(2021, 1, 1));
/// assert_eq!(lenient_date(2021, 1, 30), NaiveDate::from_ymd_opt(2021, 3, 2));
/// ```
pub fn lenient_date(year: i32, month0: i32, day: i32) -> Option<NaiveDate> {
    let total_months = i64::from(year) * 12 + i64::from(month0);
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12)).ok()? + 1;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_month.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Split a date into `(year, month0, day)`
pub fn to_parts(date: NaiveDate) -> (i32, u32, u32) {
    (date.year(), date.month0(), date.day())
}

/// Format a date the way entry rows show it, e.g. "Feb 15 2020"
pub fn format_display(date: NaiveDate) -> String {
    date.format("%b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lenient_in_range() {
        assert_eq!(lenient_date(2019, 6, 21), Some(ymd(2019, 7, 21)));
        assert_eq!(lenient_date(2013, 11, 15), Some(ymd(2013, 12, 15)));
    }

    #[test]
    fn test_lenient_month_overflow() {
        assert_eq!(lenient_date(2020, 13, 5), Some(ymd(2021, 2, 5)));
        assert_eq!(lenient_date(2020, -1, 5), Some(ymd(2019, 12, 5)));
        assert_eq!(lenient_date(2020, 24, 1), Some(ymd(2022, 1, 1)));
    }

    #[test]
    fn test_lenient_day_overflow() {
        assert_eq!(lenient_date(2020, 1, 30), Some(ymd(2020, 3, 1)));
        assert_eq!(lenient_date(2020, 3, 0), Some(ymd(2020, 3, 31)));
        assert_eq!(lenient_date(2004, 3, 2), Some(ymd(2004, 4, 2)));
        assert_eq!(lenient_date(2020, 0, -1), Some(ymd(2019, 12, 30)));
    }

    #[test]
    fn test_lenient_out_of_representable_range() {
        assert_eq!(lenient_date(i32::MAX, 11, 31), None);
    }

    #[test]
    fn test_to_parts_uses_zero_based_month() {
        assert_eq!(to_parts(ymd(2020, 11, 25)), (2020, 10, 25));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(ymd(2020, 2, 15)), "Feb 15 2020");
        assert_eq!(format_display(ymd(2004, 4, 3)), "Apr 03 2004");
    }
}
