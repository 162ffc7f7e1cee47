//! Day-level indicator aggregation for the grid header.

use crate::models::category::IndicatorCategory;
use crate::services::bucket::DayBucket;

/// Deduplicated indicator markers for a day, in first-seen order.
///
/// Markers without a display glyph (the `Default` placeholder) are dropped;
/// events without a marker contribute nothing.
pub fn indicators(bucket: &DayBucket<'_>) -> Vec<IndicatorCategory> {
    let mut seen = Vec::new();
    for event in &bucket.events {
        if let Some(indicator) = event.indicator {
            if indicator.glyph().is_some() && !seen.contains(&indicator) {
                seen.push(indicator);
            }
        }
    }
    seen
}

/// Unfiltered event total for the day badge.
pub fn count(bucket: &DayBucket<'_>) -> usize {
    bucket.events.len()
}
