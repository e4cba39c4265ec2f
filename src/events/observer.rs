//! Observer seam for presentation layers.
//!
//! Observers are notified synchronously after each committed command with
//! the new state and the events that produced it. They never see a state in
//! the middle of a command.

use super::event::BattleEvent;
use crate::core::BattleState;

/// Receives state updates from the engine.
///
/// Called while the engine is borrowed (and, behind a `SharedBattle`, while
/// its lock is held), so an observer must not submit commands or block on the
/// same battle.
pub trait BattleObserver: Send {
    /// Called once per committed command.
    fn on_update(&mut self, state: &BattleState, events: &[BattleEvent]);
}

impl<F> BattleObserver for F
where
    F: FnMut(&BattleState, &[BattleEvent]) + Send,
{
    fn on_update(&mut self, state: &BattleState, events: &[BattleEvent]) {
        self(state, events)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u32);

/// Registered observers in subscription order.
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<(ObserverId, Box<dyn BattleObserver>)>,
    next_id: u32,
}

impl ObserverList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer.
    pub fn subscribe(&mut self, observer: impl BattleObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notify every observer in subscription order.
    pub fn notify(&mut self, state: &BattleState, events: &[BattleEvent]) {
        for (_, observer) in &mut self.observers {
            observer.on_update(state, events);
        }
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}
