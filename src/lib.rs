//! # pokecard-battle
//!
//! A two-player Pokémon card battle engine.
//!
//! ## Design Principles
//!
//! 1. **Single Authority**: Only [`BattleEngine`] mutates a [`BattleState`].
//!    Presentation layers read snapshots and submit [`Command`]s.
//!
//! 2. **Atomic Commands**: Every command is checked against the rules and
//!    either fully applied or rejected with a typed [`CommandError`]. A
//!    rejected command changes nothing.
//!
//! 3. **Deterministic**: All shuffling goes through a seeded [`GameRng`], so
//!    the same seed and command history always reproduce the same game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, used for
//!   scratch application of commands and for cheap snapshots.
//!
//! - **Pure Rules**: Legality checks and win detection live in [`rules`] as
//!   functions of the state, usable without an engine.
//!
//! ## Modules
//!
//! - `core`: Players, state, commands, RNG, configuration, errors
//! - `cards`: Card definitions, instances and the starter catalog
//! - `zones`: Deck building, shuffling and dealing
//! - `rules`: Command preconditions, legal moves, win detection
//! - `events`: Battle events and observers
//! - `engine`: The command processor, shared handle and snapshots

pub mod cards;
pub mod core;
pub mod engine;
pub mod events;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleState, Command, CommandError, CommandRecord, CommandResult, ConfigError, GameRng,
    GameRngState, IllegalState, InvalidCommand, Phase, Player, PlayerId, PlayerMap, RejectionKind, ReplayError,
    RestoreError, SnapshotError, StateError,
};

pub use crate::cards::{
    Ability, AbilityCategory, AbilityId, Card, CardCatalog, CardDefinition, CardId, ElementType, Rarity,
    STARTER_DECK,
};

pub use crate::rules::{legal_commands, GameResult};

pub use crate::events::{BattleEvent, BattleObserver, ObserverId};

pub use crate::engine::{BattleEngine, Checkpoint, SharedBattle};
