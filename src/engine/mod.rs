//! Battle engine: command processing, shared access and snapshots.

mod battle;
mod shared;
pub mod snapshot;

pub use battle::BattleEngine;
pub use shared::SharedBattle;
pub use snapshot::Checkpoint;
