//! Battle rules as pure functions of the state.
//!
//! - `validation`: Command preconditions and legal-move enumeration
//! - `outcome`: Win detection and the game result
//!
//! The engine calls into these checks before mutating anything; nothing in
//! this module changes state except `resolve_winner`.

pub mod outcome;
pub mod validation;

pub use outcome::{find_loser, resolve_winner, GameResult};
pub use validation::{
    check_command, check_end_turn, check_play_card, check_player_names, check_use_ability, ensure_in_progress,
    legal_commands,
};
