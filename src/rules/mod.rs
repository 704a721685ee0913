//! Session rules.
//!
//! `RoundEngine` drives a quiz session:
//! - Rolls hands and instructions
//! - Scores picks
//! - Advances rounds and detects the end of the game
//!
//! It never renders anything; a UI layer reads its state and forwards picks.

pub mod engine;
pub mod snapshot;

pub use engine::{RoundEngine, RoundResolution, RoundStatus};
pub use snapshot::EngineSnapshot;
