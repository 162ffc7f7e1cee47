//! Per-day partitioning of the event snapshot.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::services::store::Snapshot;

/// One visible day's slice of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
}

/// Partition the snapshot over the visible days.
///
/// Within a bucket, events keep snapshot insertion order; they are not
/// sorted by time. Events dated outside the window land in no bucket, which
/// is not an error.
pub fn bucket<'a>(snapshot: &'a Snapshot, days: &[NaiveDate]) -> Vec<DayBucket<'a>> {
    days.iter()
        .map(|&date| DayBucket {
            date,
            events: snapshot
                .events()
                .iter()
                .filter(|event| event.date == date)
                .collect(),
        })
        .collect()
}
