use tracing::warn;

use crate::action::{Action, reduce};
use crate::error::StoreError;
use crate::state::GoalState;

type Subscriber = Box<dyn Fn(&GoalState) + Send + Sync>;

/// Handle returned by [`GoalStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Owns the current [`GoalState`] and is the only place it is replaced.
///
/// Subscribers are called synchronously after each successful dispatch. A
/// failed dispatch keeps the previous state and notifies nobody.
#[derive(Default)]
pub struct GoalStore {
    state: GoalState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: GoalState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &GoalState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Result<&GoalState, StoreError> {
        let name = action.name();
        let next = reduce(&self.state, action).inspect_err(|e| {
            warn!(action = name, error = %e, "action rejected");
        })?;
        self.state = next;
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
        Ok(&self.state)
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&GoalState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}
