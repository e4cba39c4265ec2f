//! Battle state: the two players, turn counter, phase and winner.
//!
//! Decks and hands are `im` persistent vectors, so cloning a `BattleState`
//! is O(1). The engine relies on that to apply each command to a scratch
//! copy and commit only if every rule check passes, and presentation layers
//! can hold snapshots without aliasing the engine's live state.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::BattleConfig;
use super::error::StateError;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, CardId};
use crate::rules::GameResult;

/// Coarse game-state marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No game dealt yet.
    #[default]
    Setup,
    /// Players are taking turns.
    Main,
    /// A winner has been decided.
    End,
}

/// One side of the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Display name (trimmed).
    pub name: String,

    /// Draw pile; the front is the next card drawn.
    pub deck: Vector<Card>,

    /// Cards held. Order only matters for display.
    pub hand: Vector<Card>,

    /// The card in play, if any.
    pub active_card: Option<Card>,

    pub energy: u32,
    pub max_energy: u32,

    /// Mirrors turn-counter parity; kept in sync by the engine.
    pub is_turn: bool,
}

impl Player {
    /// A nameless player with no cards.
    #[must_use]
    pub fn empty(id: PlayerId) -> Self {
        Self {
            id,
            name: String::new(),
            deck: Vector::new(),
            hand: Vector::new(),
            active_card: None,
            energy: 0,
            max_energy: 0,
            is_turn: false,
        }
    }

    /// Find a card in hand.
    #[must_use]
    pub fn hand_card(&self, card: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card)
    }

    /// Remove a card from hand.
    ///
    /// Returns the card if it was found.
    pub fn remove_from_hand(&mut self, card: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == card)?;
        Some(self.hand.remove(pos))
    }

    /// Move the front card of the deck to the end of the hand.
    ///
    /// Returns the drawn card's id, or None if the deck is empty.
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.deck.pop_front()?;
        let id = card.id;
        self.hand.push_back(card);
        Some(id)
    }

    /// A player with nothing in play and nothing in hand has lost.
    #[must_use]
    pub fn is_out_of_cards(&self) -> bool {
        self.active_card.is_none() && self.hand.is_empty()
    }

    /// Cards still owned: deck, hand and active card.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len() + usize::from(self.active_card.is_some())
    }
}

/// Complete state of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub players: PlayerMap<Player>,

    /// Turn number (starts at 1, saturates at `u32::MAX`). Odd turns belong
    /// to player 1.
    pub turn: u32,

    pub phase: Phase,

    /// Winner's display name once the game has ended.
    pub winner: Option<String>,

    /// Winner's seat once the game has ended.
    pub winner_id: Option<PlayerId>,
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleState {
    /// Empty state in the setup phase, as at process start.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: PlayerMap::new(Player::empty),
            turn: 1,
            phase: Phase::Setup,
            winner: None,
            winner_id: None,
        }
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Get a mutable player.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The player whose turn it is, derived from turn parity.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn)
    }

    /// Check the invariants every engine-produced state satisfies.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.turn == 0 {
            return Err(StateError::ZeroTurn);
        }
        if self.phase == Phase::Main {
            let owner = self.current_player();
            if self.players.iter().any(|(id, player)| player.is_turn != (id == owner)) {
                return Err(StateError::TurnFlagMismatch { turn: self.turn });
            }
        }
        if self.phase == Phase::End && (self.winner.is_none() || self.winner_id.is_none()) {
            return Err(StateError::MissingWinner);
        }

        let mut seen = FxHashSet::default();
        for (id, player) in self.players.iter() {
            if player.energy > player.max_energy {
                return Err(StateError::EnergyAboveMax {
                    player: id,
                    energy: player.energy,
                    max_energy: player.max_energy,
                });
            }
            let cards = player.active_card.iter().chain(player.hand.iter()).chain(player.deck.iter());
            for card in cards {
                if card.hp() > card.max_hp {
                    return Err(StateError::HpAboveMax { card: card.id, hp: card.hp(), max_hp: card.max_hp });
                }
                if !seen.insert(card.id) {
                    return Err(StateError::DuplicateCard(card.id));
                }
            }
        }
        Ok(())
    }

    /// [`validate`](Self::validate), plus the energy cap from `config`.
    pub fn validate_for(&self, config: &BattleConfig) -> Result<(), StateError> {
        self.validate()?;
        for (id, player) in self.players.iter() {
            if player.max_energy > config.max_energy_cap {
                return Err(StateError::EnergyAboveCap {
                    player: id,
                    max_energy: player.max_energy,
                    cap: config.max_energy_cap,
                });
            }
        }
        Ok(())
    }

    /// Outcome of a finished game.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        GameResult::from_state(self)
    }

    /// Recompute both `is_turn` flags from the turn counter.
    pub fn sync_turn_flags(&mut self) {
        let current = self.current_player();
        for (id, player) in self.players.iter_mut() {
            player.is_turn = id == current;
        }
    }

    /// Find a card anywhere a player owns it.
    #[must_use]
    pub fn find_card(&self, owner: PlayerId, card: CardId) -> Option<&Card> {
        let player = self.player(owner);
        player
            .active_card
            .iter()
            .chain(player.hand.iter())
            .chain(player.deck.iter())
            .find(|c| c.id == card)
    }
}
