//! Scheduled shift assignment model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{IndicatorCategory, ShiftCategory};

/// Default shift times offered by the creation dialog and synthesized drops.
pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "17:00";

/// A scheduled shift assignment.
///
/// Times are kept as `HH:MM` wall-clock strings. The engine's contract is
/// structural, not semantic: an empty title or an end time before the start
/// time is stored untouched, and `assignee_id` may dangle (display simply
/// omits the avatar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier across the whole store.
    pub id: String,
    pub title: String,
    pub category: ShiftCategory,
    /// Roster id of the person this shift is assigned to.
    pub assignee_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    /// Optional secondary marker, independent of `category`.
    pub indicator: Option<IndicatorCategory>,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: ShiftCategory,
        assignee_id: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            assignee_id: assignee_id.into(),
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            indicator: None,
        }
    }

    /// Attach a secondary marker.
    pub fn with_indicator(mut self, indicator: IndicatorCategory) -> Self {
        self.indicator = Some(indicator);
        self
    }
}

/// Form-level event record: everything but the id, which the store assigns
/// on create. This is also the shape the creation dialog is pre-filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub category: ShiftCategory,
    pub assignee_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub indicator: Option<IndicatorCategory>,
}

impl EventDraft {
    /// Empty form for the plain "add event" dialog.
    pub fn blank(date: NaiveDate) -> Self {
        Self::prefill(String::new(), date)
    }

    /// Pre-fill produced by dropping a roster entry on a day cell: default
    /// category, default times, empty title, no indicator.
    pub fn prefill(assignee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            category: ShiftCategory::default(),
            assignee_id: assignee_id.into(),
            date,
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            indicator: None,
        }
    }

    /// Promote the draft to a stored event under the given id.
    pub fn into_event(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            title: self.title,
            category: self.category,
            assignee_id: self.assignee_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            indicator: self.indicator,
        }
    }
}
