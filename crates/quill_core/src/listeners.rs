//! Listener registration
//!
//! Registering interest in an event returns a [`ListenerId`]. Whoever registered
//! keeps the id in a [`Subscriptions`] list and hands every id back on teardown,
//! so a detached widget never leaves a listener behind.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::events::EventType;

new_key_type! {
    /// Handle to a registered listener
    pub struct ListenerId;
}

/// A registered listener: which element, which event type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listener {
    pub target: u64,
    pub event_type: EventType,
}

/// Tracks listeners per (element, event type)
pub struct ListenerRegistry {
    listeners: SlotMap<ListenerId, Listener>,
    by_target: FxHashMap<(u64, EventType), SmallVec<[ListenerId; 2]>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            by_target: FxHashMap::default(),
        }
    }

    /// Register a listener for an element and event type
    pub fn register(&mut self, target: u64, event_type: EventType) -> ListenerId {
        let id = self.listeners.insert(Listener { target, event_type });
        self.by_target
            .entry((target, event_type))
            .or_default()
            .push(id);
        tracing::trace!(element = target, event_type, "listener registered");
        id
    }

    /// Remove a listener. Returns false if the id was already released.
    pub fn deregister(&mut self, id: ListenerId) -> bool {
        let Some(listener) = self.listeners.remove(id) else {
            return false;
        };

        let key = (listener.target, listener.event_type);
        if let Some(ids) = self.by_target.get_mut(&key) {
            ids.retain(|existing| *existing != id);
            if ids.is_empty() {
                self.by_target.remove(&key);
            }
        }
        tracing::trace!(
            element = listener.target,
            event_type = listener.event_type,
            "listener deregistered"
        );
        true
    }

    /// Whether any listener is registered on an element for an event type
    pub fn has_listener(&self, target: u64, event_type: EventType) -> bool {
        self.by_target.contains_key(&(target, event_type))
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Listener ids owned by one registrant
#[derive(Debug, Default)]
pub struct Subscriptions {
    ids: SmallVec<[ListenerId; 8]>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ListenerId) {
        self.ids.push(id);
    }

    /// Hand every id to `release`, leaving the list empty
    pub fn release_all<F: FnMut(ListenerId)>(&mut self, mut release: F) {
        for id in self.ids.drain(..) {
            release(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
