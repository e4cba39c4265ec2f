//! Error types for rejected commands and invalid setup.
//!
//! A rejected command never leaves partial changes behind: the engine stays
//! in its last valid state and reports why through [`CommandError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{AbilityId, CardId};

/// Why a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CommandError {
    /// The command referenced something that does not exist or is malformed.
    #[error("invalid command: {0}")]
    InvalidCommand(#[from] InvalidCommand),

    /// The acting player cannot pay the energy cost.
    #[error("insufficient energy: have {have}, need {need}")]
    InsufficientResources { have: u32, need: u32 },

    /// The command is well-formed but not allowed right now.
    #[error("illegal state: {0}")]
    IllegalState(#[from] IllegalState),

    /// A winner has been decided; only a new game may start.
    #[error("the game has already ended")]
    GameAlreadyEnded,
}

/// Details for [`CommandError::InvalidCommand`].
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InvalidCommand {
    #[error("player name for {0} is empty")]
    EmptyPlayerName(PlayerId),

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("the active card has no ability {0}")]
    UnknownAbility(AbilityId),

    #[error("{0} cannot be targeted by its own ability")]
    InvalidTarget(PlayerId),
}

/// Details for [`CommandError::IllegalState`].
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IllegalState {
    #[error("no game has been started")]
    GameNotStarted,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} already has an active card")]
    ActiveCardPresent(PlayerId),

    #[error("{0} has no active card")]
    NoActiveCard(PlayerId),
}

/// Flat category of a [`CommandError`], for callers that only branch on kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    InvalidCommand,
    InsufficientResources,
    IllegalState,
    GameAlreadyEnded,
}

impl CommandError {
    /// Category of this rejection.
    #[must_use]
    pub fn kind(&self) -> RejectionKind {
        match self {
            CommandError::InvalidCommand(_) => RejectionKind::InvalidCommand,
            CommandError::InsufficientResources { .. } => RejectionKind::InsufficientResources,
            CommandError::IllegalState(_) => RejectionKind::IllegalState,
            CommandError::GameAlreadyEnded => RejectionKind::GameAlreadyEnded,
        }
    }
}

/// Result of applying a command.
pub type CommandResult<T> = Result<T, CommandError>;

/// Invalid [`BattleConfig`](super::BattleConfig) or catalog contents.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("starter deck is empty")]
    EmptyStarterDeck,

    #[error("energy cap {cap} is below starting energy {starting}")]
    EnergyCapBelowStart { cap: u32, starting: u32 },

    #[error("card `{0}` is not in the catalog")]
    UnknownCard(String),
}

/// A battle state that breaks an invariant the engine relies on.
///
/// Only reachable through deserialized or hand-built states; the engine never
/// produces one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("turn counter is zero")]
    ZeroTurn,

    #[error("turn flags do not match turn {turn}")]
    TurnFlagMismatch { turn: u32 },

    #[error("{card} has {hp} hp, above its max of {max_hp}")]
    HpAboveMax { card: CardId, hp: u32, max_hp: u32 },

    #[error("{player} has {energy} energy, above its max of {max_energy}")]
    EnergyAboveMax { player: PlayerId, energy: u32, max_energy: u32 },

    #[error("{player} has max energy {max_energy}, above the cap of {cap}")]
    EnergyAboveCap { player: PlayerId, max_energy: u32, cap: u32 },

    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("game has ended without a winner")]
    MissingWinner,
}

/// Failure to resume an engine from a saved state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid state: {0}")]
    State(#[from] StateError),
}

/// Failure to rebuild a game from recorded commands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("recorded command #{sequence} was rejected: {error}")]
    Rejected { sequence: u32, error: CommandError },
}

/// Failure to encode or decode a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("invalid snapshot state: {0}")]
    State(#[from] StateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err: CommandError = IllegalState::NotYourTurn(PlayerId::Player2).into();
        assert_eq!(err.kind(), RejectionKind::IllegalState);

        let err: CommandError = InvalidCommand::UnknownAbility(AbilityId::new(9)).into();
        assert_eq!(err.kind(), RejectionKind::InvalidCommand);

        let err = CommandError::InsufficientResources { have: 1, need: 3 };
        assert_eq!(err.kind(), RejectionKind::InsufficientResources);

        assert_eq!(CommandError::GameAlreadyEnded.kind(), RejectionKind::GameAlreadyEnded);
    }

    #[test]
    fn test_messages() {
        let err: CommandError = InvalidCommand::CardNotInHand {
            player: PlayerId::Player1,
            card: CardId::new(4),
        }
        .into();
        assert_eq!(err.to_string(), "invalid command: Card(4) is not in player1's hand");

        let err = CommandError::InsufficientResources { have: 1, need: 3 };
        assert_eq!(err.to_string(), "insufficient energy: have 1, need 3");

        let err = ConfigError::UnknownCard("mew".to_string());
        assert_eq!(err.to_string(), "card `mew` is not in the catalog");
    }
}
