//! Deck and hand allocation for a new game.
//!
//! - `build_starter_deck`: Fresh, uniquely identified card instances from catalog keys
//! - `shuffle`: Uniform shuffle driven by the deterministic `GameRng`
//! - `deal_hand`: Opening hand from the front of the deck

pub mod allocator;

pub use allocator::{build_starter_deck, deal_hand, shuffle};
