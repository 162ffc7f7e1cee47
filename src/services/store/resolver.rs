//! Action resolution: applies one tagged mutation to a snapshot.
//!
//! Pure with respect to (snapshot, mutation) apart from id generation, which
//! is expected to differ across separate create calls.

use super::{IdGenerator, Snapshot, StoreError};
use crate::models::mutation::Mutation;

pub(super) fn resolve(
    snapshot: &Snapshot,
    mutation: Mutation,
    ids: &mut IdGenerator,
) -> Result<Snapshot, StoreError> {
    match mutation {
        Mutation::Create { id, draft } => {
            let id = match id {
                Some(id) if snapshot.contains(&id) => {
                    log::warn!("rejecting create with colliding id {id}");
                    return Err(StoreError::DuplicateId(id));
                }
                Some(id) => id,
                None => ids.fresh(snapshot),
            };
            log::debug!("create event {id} on {}", draft.date);
            let mut events = snapshot.events().to_vec();
            events.push(draft.into_event(id));
            Ok(Snapshot { events })
        }
        Mutation::Update(event) | Mutation::Replace(event) => {
            match snapshot.position(&event.id) {
                Some(index) => {
                    log::debug!("update event {}", event.id);
                    let mut events = snapshot.events().to_vec();
                    events[index] = event;
                    Ok(Snapshot { events })
                }
                None => Err(StoreError::NotFound(event.id)),
            }
        }
        Mutation::Delete { id } => match snapshot.position(&id) {
            Some(index) => {
                log::debug!("delete event {id}");
                let mut events = snapshot.events().to_vec();
                events.remove(index);
                Ok(Snapshot { events })
            }
            None => Err(StoreError::NotFound(id)),
        },
    }
}
