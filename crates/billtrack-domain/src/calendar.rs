//! Calendar arithmetic used by recurrence rules.
//!
//! Shifts always clamp the day-of-month to the length of the target month,
//! so Jan 31 plus one month lands on the last day of February.

use chrono::{Datelike, NaiveDate};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Moves `date` forward by `months`, clamping the day to the target month.
///
/// Returns `None` when the result falls outside chrono's supported range.
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let month_index = i64::from(date.month0()) + i64::from(months);
    let year = i64::from(date.year()) + month_index.div_euclid(12);
    let year = i32::try_from(year).ok()?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Moves `date` forward by `years`. Feb 29 becomes Feb 28 in non-leap years.
pub fn add_years_clamped(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day)
}
