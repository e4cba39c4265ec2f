//! Core battle types: players, state, commands, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Command, CommandRecord};
pub use config::BattleConfig;
pub use error::{
    CommandError, CommandResult, ConfigError, IllegalState, InvalidCommand, RejectionKind, ReplayError, RestoreError,
    SnapshotError, StateError,
};
pub use player::{ParsePlayerIdError, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{BattleState, Phase, Player};
