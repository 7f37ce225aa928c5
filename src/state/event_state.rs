//! Event lookup state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The activity an order books tickets for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
}

/// Events resolved for the loaded orders, kept for the life of the page.
#[derive(Debug, Default)]
pub struct EventState {
    pub events: HashMap<EventId, Event>,
}

impl EventState {
    /// Display name of an event, if it has been resolved.
    pub fn name_for(&self, id: EventId) -> Option<&str> {
        self.events.get(&id).map(|e| e.name.as_str())
    }

    /// Merge a batch of resolved events into the lookup.
    pub fn merge(&mut self, resolved: HashMap<EventId, Event>) {
        self.events.extend(resolved);
    }
}
