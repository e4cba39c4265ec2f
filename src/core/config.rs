//! Battle configuration.
//!
//! The defaults reproduce the classic rules: three-card opening hands, one
//! energy on the first turn, one more per turn, capped at ten.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{CardCatalog, STARTER_DECK};

/// Tunable rules and setup for a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Seed for deck shuffling. Same seed and commands reproduce a game.
    pub seed: u64,

    /// Cards dealt to each player at game start.
    pub hand_size: usize,

    /// Energy and max energy each player starts with.
    pub starting_energy: u32,

    /// Max energy gained at the start of each of the player's turns.
    pub energy_per_turn: u32,

    /// Ceiling for max energy.
    pub max_energy_cap: u32,

    /// Catalog keys of the cards in each player's starter deck.
    pub starter_deck: Vec<String>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hand_size: 3,
            starting_energy: 1,
            energy_per_turn: 1,
            max_energy_cap: 10,
            starter_deck: STARTER_DECK.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl BattleConfig {
    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the starting energy.
    #[must_use]
    pub fn with_starting_energy(mut self, energy: u32) -> Self {
        self.starting_energy = energy;
        self
    }

    /// Set the per-turn max energy gain.
    #[must_use]
    pub fn with_energy_per_turn(mut self, gain: u32) -> Self {
        self.energy_per_turn = gain;
        self
    }

    /// Set the max energy ceiling.
    #[must_use]
    pub fn with_max_energy_cap(mut self, cap: u32) -> Self {
        self.max_energy_cap = cap;
        self
    }

    /// Replace the starter deck.
    #[must_use]
    pub fn with_starter_deck<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starter_deck = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Check the configuration against a catalog.
    pub fn validate(&self, catalog: &CardCatalog) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.starter_deck.is_empty() {
            return Err(ConfigError::EmptyStarterDeck);
        }
        if self.max_energy_cap < self.starting_energy {
            return Err(ConfigError::EnergyCapBelowStart {
                cap: self.max_energy_cap,
                starting: self.starting_energy,
            });
        }
        if let Some(missing) = self.starter_deck.iter().find(|k| !catalog.contains(k)) {
            return Err(ConfigError::UnknownCard(missing.clone()));
        }
        Ok(())
    }
}
