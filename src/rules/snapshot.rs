//! Engine snapshots.
//!
//! A snapshot captures config, round state and RNG position, so a restored
//! engine continues with exactly the rounds the original would have rolled.

use serde::{Deserialize, Serialize};

use super::engine::RoundEngine;
use crate::core::{QuizConfig, Result, RoundRng, RoundRngState, RoundState};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: QuizConfig,
    pub state: RoundState,
    pub rng: RoundRngState,
}

impl EngineSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl RoundEngine {
    /// Capture the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config().clone(),
            state: self.state().clone(),
            rng: self.rng().state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    pub fn restore(snapshot: EngineSnapshot) -> Result<Self> {
        let rng = RoundRng::from_state(&snapshot.rng);
        RoundEngine::from_parts(snapshot.config, snapshot.state, rng)
    }
}
