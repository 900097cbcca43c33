//! Calendar-month arithmetic shared by every forecaster.
//!
//! Forecast horizons are expressed in whole months, so extending a series
//! past December must roll cleanly into the next year and a day-of-month
//! that does not exist in the target month must clamp to the last valid day.

use chrono::{Datelike, NaiveDate};

/// Adds `months` calendar months to `date`.
///
/// Month overflow rolls into year increments (month 13 becomes month 1 of
/// the following year). The day-of-month is preserved when it exists in the
/// target month and clamped to the last valid day otherwise, so
/// Jan 31 + 1 month yields Feb 28 (or Feb 29 in a leap year). Pure and
/// infallible: the result is always a valid calendar date.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month() as i32 - 1 + months as i32;
    let new_year = total_months / 12;
    let new_month = (total_months % 12 + 1) as u32;

    // Clamp day to the valid range for the new month.
    let new_day = date.day().min(days_in_month(new_year, new_month));

    NaiveDate::from_ymd_opt(new_year, new_month, new_day)
        .expect("clamped year/month/day is always a valid date")
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month is always in 1..=12 after decomposition"),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
