//! Win detection.
//!
//! A player loses when they have no active card and an empty hand. The check
//! runs after every damage event, player 1 first, so if both sides were ever
//! out of cards at once the win would go to player 2.

use serde::{Deserialize, Serialize};

use crate::core::{BattleState, Phase, PlayerId};

/// Result of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl GameResult {
    /// Result where `loser` lost to the other seat.
    #[must_use]
    pub fn lost_by(loser: PlayerId) -> Self {
        Self { winner: loser.opponent(), loser }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// Read the result recorded in a finished state.
    #[must_use]
    pub fn from_state(state: &BattleState) -> Option<Self> {
        match (state.phase, state.winner_id) {
            (Phase::End, Some(winner)) => Some(Self::lost_by(winner.opponent())),
            _ => None,
        }
    }
}

/// The first player (in seat order) that is out of cards.
#[must_use]
pub fn find_loser(state: &BattleState) -> Option<PlayerId> {
    PlayerId::ALL
        .into_iter()
        .find(|&id| state.player(id).is_out_of_cards())
}

/// Run win detection, ending the game if someone has lost.
pub fn resolve_winner(state: &mut BattleState) -> Option<GameResult> {
    let result = GameResult::lost_by(find_loser(state)?);
    state.winner = Some(state.player(result.winner).name.clone());
    state.winner_id = Some(result.winner);
    state.phase = Phase::End;
    Some(result)
}
