//! Closed category enumerations for shift events.
//!
//! `ShiftCategory` determines display color and grouping only; the engine
//! never branches on it beyond lookup-by-key. `IndicatorCategory` is the
//! optional secondary marker surfaced in day-level summaries.

use serde::{Deserialize, Serialize};

/// Work type of a scheduled shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftCategory {
    Kitchen,
    RestDay,
    Prep,
    Service,
    Reception,
    Supervisor,
}

impl ShiftCategory {
    /// All categories in display order. The first entry is the default
    /// offered by the creation dialog and synthesized drops.
    pub const ALL: [ShiftCategory; 6] = [
        ShiftCategory::Kitchen,
        ShiftCategory::RestDay,
        ShiftCategory::Prep,
        ShiftCategory::Service,
        ShiftCategory::Reception,
        ShiftCategory::Supervisor,
    ];

    /// Display name for pickers and event cards.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftCategory::Kitchen => "Kitchen",
            ShiftCategory::RestDay => "Weekly Rest Day",
            ShiftCategory::Prep => "Prep Cook",
            ShiftCategory::Service => "Service",
            ShiftCategory::Reception => "Reception",
            ShiftCategory::Supervisor => "Supervisor",
        }
    }

    /// Hex display color for the category.
    pub fn color(&self) -> &'static str {
        match self {
            ShiftCategory::Kitchen => "#3B82F6",
            ShiftCategory::RestDay => "#6B7280",
            ShiftCategory::Prep => "#14B8A6",
            ShiftCategory::Service => "#F97316",
            ShiftCategory::Reception => "#EAB308",
            ShiftCategory::Supervisor => "#EF4444",
        }
    }
}

impl Default for ShiftCategory {
    fn default() -> Self {
        ShiftCategory::Kitchen
    }
}

/// Optional secondary marker on an event, independent of its work category.
///
/// `Default` is the placeholder the dialog starts from; it carries no glyph
/// and never surfaces in day-level aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorCategory {
    Default,
    Birthday,
    Holiday,
    Meeting,
    Deadline,
}

impl IndicatorCategory {
    /// All indicator choices in dialog order.
    pub const ALL: [IndicatorCategory; 5] = [
        IndicatorCategory::Default,
        IndicatorCategory::Birthday,
        IndicatorCategory::Holiday,
        IndicatorCategory::Meeting,
        IndicatorCategory::Deadline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorCategory::Default => "Default",
            IndicatorCategory::Birthday => "Birthday",
            IndicatorCategory::Holiday => "Holiday",
            IndicatorCategory::Meeting => "Meeting",
            IndicatorCategory::Deadline => "Deadline",
        }
    }

    /// Summary glyph shown in the day header; `None` for the placeholder,
    /// which the aggregator discards.
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            IndicatorCategory::Default => None,
            IndicatorCategory::Birthday => Some("🎂"),
            IndicatorCategory::Holiday => Some("🎉"),
            IndicatorCategory::Meeting => Some("📅"),
            IndicatorCategory::Deadline => Some("⏰"),
        }
    }
}
