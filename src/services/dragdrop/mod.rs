//! Drag-and-drop resolution for drops onto day cells.
//!
//! Two payload shapes arrive at a cell: a roster entry dragged from the
//! sidebar, or an existing event card dragged between days. Person drops
//! open the creation dialog pre-filled with a draft; nothing is written
//! until the dialog confirms. Event drops move immediately with no
//! confirmation. The asymmetry is deliberate and matches the grid's
//! interaction model.

use chrono::NaiveDate;

use crate::models::event::{Event, EventDraft};
use crate::models::mutation::Mutation;

/// Payload carried by a drag token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    /// A roster entry; only its id travels with the drag.
    Person { person_id: String },
    /// An existing event card, carried in full.
    Event(Event),
}

/// What a completed drop asks the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Open the creation dialog pre-filled with this draft.
    OpenDialog(EventDraft),
    /// Apply this mutation to the store right away.
    Apply(Mutation),
}

/// Resolve a drop of `payload` onto the day cell for `date`.
pub fn resolve_drop(payload: DropPayload, date: NaiveDate) -> DropOutcome {
    match payload {
        DropPayload::Person { person_id } => {
            log::debug!("person {person_id} dropped on {date}, pre-filling dialog");
            DropOutcome::OpenDialog(EventDraft::prefill(person_id, date))
        }
        DropPayload::Event(event) => {
            log::debug!("event {} dropped on {date}, moving", event.id);
            DropOutcome::Apply(Mutation::Replace(Event { date, ..event }))
        }
    }
}
