//! Action-tagged mutation protocol for the event store.

use serde::{Deserialize, Serialize};

use super::event::{Event, EventDraft};

/// A single write request against the event store.
///
/// One constructor per action; there is no untagged default. `Replace` is
/// the form produced by drag-move: the full prior record with only the date
/// changed, applied exactly like `Update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Mutation {
    /// Insert a new event. A fresh id is generated when `id` is `None`;
    /// a caller-supplied id must not collide with a stored one.
    Create {
        id: Option<String>,
        draft: EventDraft,
    },
    /// Wholesale replacement of the stored event with the same id.
    Update(Event),
    /// Remove the event with this id.
    Delete { id: String },
    /// Drag-move form; behaves as `Update`.
    Replace(Event),
}

impl Mutation {
    /// Create-request without a caller-supplied id (the normal path).
    pub fn create(draft: EventDraft) -> Self {
        Mutation::Create { id: None, draft }
    }

    pub fn delete(id: impl Into<String>) -> Self {
        Mutation::Delete { id: id.into() }
    }
}
