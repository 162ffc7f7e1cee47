//! In-memory event store with immutable snapshots.
//!
//! Every write goes through [`EventStore::apply`], which delegates to the
//! action resolver and swaps in a freshly built snapshot on success. A failed
//! mutation leaves the prior snapshot authoritative; snapshots handed out
//! earlier are never mutated in place.

mod resolver;

use thiserror::Error;

use crate::models::event::Event;
use crate::models::mutation::Mutation;

/// Errors surfaced by the mutation protocol.
///
/// Both are local, synchronous and non-fatal: the requesting action simply
/// does not apply. Field-level validity (empty titles, inverted time
/// ranges) is deliberately not checked here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no event with id `{0}`")]
    NotFound(String),
    #[error("an event with id `{0}` already exists")]
    DuplicateId(String),
}

/// An immutable view of the full event collection.
///
/// Iteration order is insertion order; the day bucketizer relies on this
/// staying stable across updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    events: Vec<Event>,
}

impl Snapshot {
    /// Build a snapshot from trusted seed data, rejecting duplicate ids.
    pub fn from_events(events: Vec<Event>) -> Result<Self, StoreError> {
        for (i, event) in events.iter().enumerate() {
            if events[i + 1..].iter().any(|other| other.id == event.id) {
                return Err(StoreError::DuplicateId(event.id.clone()));
            }
        }
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }
}

/// Monotonic id source for synthesized creations.
///
/// Every generated id is checked against the live snapshot, so a
/// caller-seeded id can never be reissued.
#[derive(Debug, Default)]
struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    fn fresh(&mut self, snapshot: &Snapshot) -> String {
        loop {
            self.next += 1;
            let id = format!("ev-{}", self.next);
            if !snapshot.contains(&id) {
                return id;
            }
        }
    }
}

/// Owner of the authoritative snapshot.
///
/// There is exactly one logical writer at a time by construction; readers
/// only ever see immutable [`Snapshot`] values.
#[derive(Debug, Default)]
pub struct EventStore {
    current: Snapshot,
    ids: IdGenerator,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-existing events (demo data, fixtures).
    pub fn seeded(events: Vec<Event>) -> Result<Self, StoreError> {
        Ok(Self {
            current: Snapshot::from_events(events)?,
            ids: IdGenerator::default(),
        })
    }

    /// Sole mutation entry point. On error the prior snapshot stays
    /// authoritative.
    pub fn apply(&mut self, mutation: Mutation) -> Result<&Snapshot, StoreError> {
        let next = resolver::resolve(&self.current, mutation, &mut self.ids)?;
        self.current = next;
        Ok(&self.current)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }
}
