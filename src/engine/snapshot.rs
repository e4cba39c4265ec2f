//! Binary snapshots of battle state.
//!
//! Snapshots are bincode-encoded and self-contained: a presentation layer or
//! a test can hold one without any reference back to the engine.

use serde::{Deserialize, Serialize};

use crate::core::{BattleConfig, BattleState, CommandRecord, GameRngState, SnapshotError};

/// Encode a state to bytes.
pub fn encode(state: &BattleState) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(state)?)
}

/// Decode a state previously produced by [`encode`].
///
/// Bytes that decode to a state breaking a battle invariant are rejected.
pub fn decode(bytes: &[u8]) -> Result<BattleState, SnapshotError> {
    let state: BattleState = bincode::deserialize(bytes)?;
    state.validate()?;
    Ok(state)
}

/// Everything needed to resume an engine where it left off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub config: BattleConfig,
    pub state: BattleState,
    pub rng: GameRngState,
    pub history: Vec<CommandRecord>,
}

impl Checkpoint {
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate the state against the stored config.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let checkpoint: Self = bincode::deserialize(bytes)?;
        checkpoint.state.validate_for(&checkpoint.config)?;
        Ok(checkpoint)
    }
}
