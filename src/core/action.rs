//! Commands accepted by the battle engine.
//!
//! Presentation layers never mutate battle state directly. They submit a
//! `Command`; the engine validates it and either commits its effects or
//! rejects it with a typed reason.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{AbilityId, CardId};

/// A request to change the battle state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Deal fresh decks and begin turn 1. Allowed from any phase.
    StartGame { player1: String, player2: String },

    /// Put a card from `player`'s hand into play.
    PlayCard { player: PlayerId, card: CardId },

    /// Use an ability of the turn owner's active card.
    ///
    /// `target` defaults to the opponent when omitted; naming the acting
    /// player is rejected.
    UseAbility { ability: AbilityId, target: Option<PlayerId> },

    /// Pass the turn to the other player.
    EndTurn,
}

impl Command {
    /// Build a start command.
    #[must_use]
    pub fn start(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Command::StartGame {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::StartGame { .. } => "start_game",
            Command::PlayCard { .. } => "play_card",
            Command::UseAbility { .. } => "use_ability",
            Command::EndTurn => "end_turn",
        }
    }
}

/// A committed command with its position in the game, for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Turn number when the command was applied.
    pub turn: u32,

    /// Position in the engine history (0-based).
    pub sequence: u32,

    /// The command applied.
    pub command: Command,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(turn: u32, sequence: u32, command: Command) -> Self {
        Self { turn, sequence, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(Command::start("Ash", "Gary").name(), "start_game");
        assert_eq!(
            Command::PlayCard { player: PlayerId::Player1, card: CardId::new(1) }.name(),
            "play_card"
        );
        assert_eq!(
            Command::UseAbility { ability: AbilityId::new(1), target: None }.name(),
            "use_ability"
        );
        assert_eq!(Command::EndTurn.name(), "end_turn");
    }

    #[test]
    fn test_record_serialization() {
        let record = CommandRecord::new(
            3,
            5,
            Command::UseAbility { ability: AbilityId::new(2), target: Some(PlayerId::Player2) },
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CommandRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
