// Date utility functions

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the ISO week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Render a date in the `YYYY-MM-DD` wire form.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
