//! Thread-safe handle for submitting commands to one battle.
//!
//! Commands from any number of threads are serialized through a mutex, so
//! each one observes the state left by the previous one.
//!
//! Observers run while that mutex is held. An observer that keeps a clone of
//! the handle must not call its blocking methods (`apply`, `snapshot`,
//! `with_engine`, ...) or it deadlocks; [`SharedBattle::try_snapshot`] is
//! safe to call from there and returns `None` while a command is in flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use crate::cards::{AbilityId, CardId};
use crate::core::{BattleState, Command, CommandResult, PlayerId};
use crate::events::BattleEvent;

use super::battle::BattleEngine;

/// Cloneable, shareable handle to a [`BattleEngine`].
#[derive(Clone, Debug)]
pub struct SharedBattle {
    inner: Arc<Mutex<BattleEngine>>,
}

impl SharedBattle {
    #[must_use]
    pub fn new(engine: BattleEngine) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }

    // State is committed in a single assignment, so a poisoned lock still
    // guards a consistent engine.
    fn lock(&self) -> MutexGuard<'_, BattleEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a command under the lock.
    pub fn apply(&self, command: Command) -> CommandResult<Vec<BattleEvent>> {
        self.lock().apply(command)
    }

    pub fn start_game(&self, player1: &str, player2: &str) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::start(player1, player2))
    }

    pub fn play_card(&self, player: PlayerId, card: CardId) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::PlayCard { player, card })
    }

    pub fn use_ability(&self, ability: AbilityId, target: Option<PlayerId>) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::UseAbility { ability, target })
    }

    pub fn end_turn(&self) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::EndTurn)
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> BattleState {
        self.lock().snapshot()
    }

    /// Owned copy of the current state, or `None` if the engine is busy.
    ///
    /// Never blocks, so observers may call it on their own handle.
    #[must_use]
    pub fn try_snapshot(&self) -> Option<BattleState> {
        match self.inner.try_lock() {
            Ok(engine) => Some(engine.snapshot()),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner().snapshot()),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut BattleEngine) -> R) -> R {
        f(&mut self.lock())
    }
}
