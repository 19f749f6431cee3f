//! Snapshot subscriptions.
//!
//! Observers are plain callbacks. A session notifies them only when the
//! published snapshot actually changes.

use std::collections::BTreeMap;
use std::fmt;

use super::game::GameUiState;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&GameUiState) + Send>;

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    callbacks: BTreeMap<SubscriptionId, Callback>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameUiState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.insert(id, Box::new(callback));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.remove(&id).is_some()
    }

    /// Deliver a snapshot to a single observer.
    pub fn notify_one(&mut self, id: SubscriptionId, state: &GameUiState) {
        if let Some(callback) = self.callbacks.get_mut(&id) {
            callback(state);
        }
    }

    pub fn notify(&mut self, state: &GameUiState) {
        for callback in self.callbacks.values_mut() {
            callback(state);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
