use crate::error::{GitheatError, Result};
use chrono::{Datelike, NaiveDate};

/// Row of `date` in a week column: Sunday is 0, Saturday is 6.
pub fn sunday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    match date.succ_opt() {
        Some(tomorrow) => tomorrow.month() != date.month(),
        None => true,
    }
}

pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| GitheatError::InvalidDate(format!("'{input}': {e}")))
}
