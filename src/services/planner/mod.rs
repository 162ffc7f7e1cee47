//! Top-level planner controller.
//!
//! Owns the authoritative event store, the week anchor, and the read-only
//! roster, and sequences every mutation. The rendering layer reads buckets
//! and indicators from here and never holds a mutable reference to the
//! store.

use chrono::{Local, NaiveDate};

use crate::models::event::{Event, EventDraft};
use crate::models::mutation::Mutation;
use crate::models::roster::{builtin_roster, Person};
use crate::services::bucket::{bucket, DayBucket};
use crate::services::dragdrop::{resolve_drop, DropOutcome, DropPayload};
use crate::services::store::{EventStore, Snapshot, StoreError};
use crate::services::week::{navigate, week_of, Direction};

pub struct WeekPlanner {
    store: EventStore,
    anchor: NaiveDate,
    roster: Vec<Person>,
}

impl WeekPlanner {
    pub fn new(anchor: NaiveDate, roster: Vec<Person>) -> Self {
        Self {
            store: EventStore::new(),
            anchor,
            roster,
        }
    }

    /// Start from pre-existing events (restored session, fixtures).
    pub fn seeded(
        anchor: NaiveDate,
        roster: Vec<Person>,
        events: Vec<Event>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            store: EventStore::seeded(events)?,
            anchor,
            roster,
        })
    }

    /// The demo deployment: built-in roster plus a seeded sample week.
    pub fn demo() -> Self {
        // Seed ids are static and unique, so this cannot fail.
        Self::seeded(ymd(2024, 11, 25), builtin_roster(), demo_events())
            .expect("demo seed ids are unique")
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The seven visible dates, Monday through Sunday.
    pub fn week(&self) -> [NaiveDate; 7] {
        week_of(self.anchor)
    }

    /// Move the visible window one week; unbounded in both directions.
    pub fn navigate(&mut self, direction: Direction) {
        self.anchor = navigate(self.anchor, direction);
    }

    pub fn roster(&self) -> &[Person] {
        &self.roster
    }

    /// Roster lookup for display. Dangling assignee ids yield `None` and
    /// the caller simply omits the avatar.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.roster.iter().find(|person| person.id == id)
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.store.snapshot()
    }

    /// Forward a mutation to the store. On error the visible schedule is
    /// unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> Result<&Snapshot, StoreError> {
        self.store.apply(mutation)
    }

    /// The current snapshot partitioned over the visible week.
    pub fn buckets(&self) -> Vec<DayBucket<'_>> {
        let days = self.week();
        bucket(self.store.snapshot(), &days)
    }

    /// Handle a completed drop on the day cell for `date`.
    ///
    /// Event moves apply immediately and return `None`; person drops leave
    /// the store untouched and return the draft to open the dialog with.
    pub fn handle_drop(
        &mut self,
        payload: DropPayload,
        date: NaiveDate,
    ) -> Result<Option<EventDraft>, StoreError> {
        match resolve_drop(payload, date) {
            DropOutcome::OpenDialog(draft) => Ok(Some(draft)),
            DropOutcome::Apply(mutation) => {
                self.apply(mutation)?;
                Ok(None)
            }
        }
    }

    /// Pre-fill for the plain "add event" button; falls back to today when
    /// the caller supplies no date.
    pub fn draft_for(&self, date: Option<NaiveDate>) -> EventDraft {
        EventDraft::blank(date.unwrap_or_else(|| Local::now().date_naive()))
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Built-in sample week of shifts for demos and tests.
fn demo_events() -> Vec<Event> {
    use crate::models::category::ShiftCategory::*;

    vec![
        Event::new("1", "Kitchen Morning", Kitchen, "1", ymd(2024, 11, 25), "08:00", "16:00"),
        Event::new("2", "Service Evening", Service, "3", ymd(2024, 11, 25), "16:00", "23:00"),
        Event::new("3", "Prep Shift", Prep, "2", ymd(2024, 11, 26), "09:00", "17:00"),
        Event::new("7", "Evening Reception", Reception, "5", ymd(2024, 11, 26), "15:00", "23:00"),
        Event::new("4", "Supervisor Duty", Supervisor, "4", ymd(2024, 11, 27), "10:00", "18:00"),
        Event::new("8", "Kitchen Late", Kitchen, "1", ymd(2024, 11, 27), "14:00", "22:00"),
        Event::new("5", "Reception", Reception, "5", ymd(2024, 11, 28), "08:00", "16:00"),
        Event::new("9", "Service Evening", Service, "3", ymd(2024, 11, 28), "16:00", "23:00"),
        Event::new("6", "Day Off", RestDay, "1", ymd(2024, 11, 29), "00:00", "23:59"),
        Event::new("10", "Prep Morning", Prep, "2", ymd(2024, 11, 29), "07:00", "15:00"),
        Event::new("11", "Weekend Service", Service, "3", ymd(2024, 11, 30), "12:00", "20:00"),
        Event::new("12", "Supervisor Weekend", Supervisor, "4", ymd(2024, 11, 30), "09:00", "17:00"),
        Event::new("13", "Weekend Reception", Reception, "5", ymd(2024, 12, 1), "10:00", "18:00"),
    ]
}
