//! Week window computation and navigation.
//!
//! The grid always shows the Monday-through-Sunday ISO week containing the
//! anchor date; navigation shifts the anchor a full week at a time and is
//! unbounded in both directions.

use chrono::{Duration, NaiveDate};

use crate::utils::date::start_of_week;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Monday through Sunday of the ISO week containing `anchor`, ascending.
pub fn week_of(anchor: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    let monday = start_of_week(anchor);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Shift the anchor by one week; the caller re-derives the window with
/// [`week_of`].
pub fn navigate(anchor: NaiveDate, direction: Direction) -> NaiveDate {
    match direction {
        Direction::Prev => anchor - Duration::days(7),
        Direction::Next => anchor + Duration::days(7),
    }
}
