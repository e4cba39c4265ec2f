//! Battle events.
//!
//! Every committed command yields the list of events describing what it
//! changed, in the order the changes happened. Presentation layers use them
//! to animate or narrate; the state itself remains the source of truth.

use serde::{Deserialize, Serialize};

use crate::cards::{AbilityId, CardId};
use crate::core::PlayerId;

/// Something that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A new game was dealt.
    GameStarted { player1: String, player2: String },

    /// A card left the hand and became active.
    CardPlayed { player: PlayerId, card: CardId, cost: u32 },

    /// The active card used an ability.
    AbilityUsed { player: PlayerId, card: CardId, ability: AbilityId, cost: u32 },

    /// An active card lost HP.
    DamageDealt { target: PlayerId, card: CardId, amount: u32, remaining_hp: u32 },

    /// An active card reached 0 HP and left play.
    CardDefeated { player: PlayerId, card: CardId },

    /// The turn counter advanced.
    TurnStarted { turn: u32, player: PlayerId },

    /// A card moved from deck to hand.
    CardDrawn { player: PlayerId, card: CardId },

    /// Energy was refilled at the start of a turn.
    EnergyRefilled { player: PlayerId, energy: u32, max_energy: u32 },

    /// A winner was decided.
    GameWon { winner: PlayerId, name: String },
}

impl BattleEvent {
    /// The player most associated with the event, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            BattleEvent::GameStarted { .. } => None,
            BattleEvent::CardPlayed { player, .. }
            | BattleEvent::AbilityUsed { player, .. }
            | BattleEvent::CardDefeated { player, .. }
            | BattleEvent::TurnStarted { player, .. }
            | BattleEvent::CardDrawn { player, .. }
            | BattleEvent::EnergyRefilled { player, .. } => Some(*player),
            BattleEvent::DamageDealt { target, .. } => Some(*target),
            BattleEvent::GameWon { winner, .. } => Some(*winner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_player() {
        let event = BattleEvent::DamageDealt {
            target: PlayerId::Player2,
            card: CardId::new(3),
            amount: 30,
            remaining_hp: 30,
        };
        assert_eq!(event.player(), Some(PlayerId::Player2));

        let event = BattleEvent::GameStarted { player1: "Ash".into(), player2: "Gary".into() };
        assert_eq!(event.player(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = BattleEvent::GameWon { winner: PlayerId::Player1, name: "Ash".into() };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: BattleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
