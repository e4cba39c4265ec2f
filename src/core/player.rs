//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! The battle is strictly two-player, so `PlayerId` is a two-variant enum
//! rather than an open index. Turn ownership is derived from the turn
//! counter's parity: odd turns belong to `Player1`.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed array, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// Both seats, in check order.
    pub const ALL: [PlayerId; 2] = [PlayerId::Player1, PlayerId::Player2];

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// The seat that owns the given (1-based) turn.
    ///
    /// ```
    /// use pokecard_battle::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(1), PlayerId::Player1);
    /// assert_eq!(PlayerId::for_turn(2), PlayerId::Player2);
    /// assert_eq!(PlayerId::for_turn(7), PlayerId::Player1);
    /// ```
    #[must_use]
    pub const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 {
            PlayerId::Player1
        } else {
            PlayerId::Player2
        }
    }

    /// Stable string key used by presentation layers (`"player1"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerId::Player1 => "player1",
            PlayerId::Player2 => "player2",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown player key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown player id `{0}`")]
pub struct ParsePlayerIdError(pub String);

impl FromStr for PlayerId {
    type Err = ParsePlayerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player1" => Ok(PlayerId::Player1),
            "player2" => Ok(PlayerId::Player2),
            other => Err(ParsePlayerIdError(other.to_string())),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pokecard_battle::core::{PlayerId, PlayerMap};
///
/// let mut energy: PlayerMap<u32> = PlayerMap::with_value(1);
/// energy[PlayerId::Player2] = 4;
///
/// assert_eq!(energy[PlayerId::Player1], 1);
/// assert_eq!(energy[PlayerId::Player2], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::Player1), factory(PlayerId::Player2)],
        }
    }

    /// Create a PlayerMap from explicit per-seat values.
    pub fn from_pair(player1: T, player2: T) -> Self {
        Self { data: [player1, player2] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow both seats mutably at once, in `(player, opponent)` order.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        match player {
            PlayerId::Player1 => (first, second),
            PlayerId::Player2 => (second, first),
        }
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
