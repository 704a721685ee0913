//! # rps-reflex
//!
//! A rock-paper-scissors reflex quiz engine.
//!
//! Each round the engine shows a hand and an instruction ("you should WIN"
//! or "you should LOSE"). The player picks one of the two other hands; the
//! right counter scores +1, the wrong one -1. A session runs ten rounds by
//! default.
//!
//! ## Design Principles
//!
//! 1. **Explicit phases**: Out-of-turn calls return errors instead of
//!    corrupting the score.
//!
//! 2. **Deterministic**: A seed fully determines a session, so tests and
//!    replays are reproducible.
//!
//! 3. **UI-agnostic**: The engine exposes state and display strings; it
//!    never renders.
//!
//! ## Modules
//!
//! - `core`: Hands, instructions, state, RNG, configuration, errors
//! - `rules`: The round engine and snapshots
//!
//! ```
//! use rps_reflex::{QuizConfig, RoundEngine, RoundStatus};
//!
//! let mut engine = RoundEngine::new(QuizConfig::default(), 42)?;
//! engine.start_round()?;
//!
//! loop {
//!     let pick = engine.state().correct_counter();
//!     engine.submit_choice(pick)?;
//!     if let RoundStatus::GameEnded { final_score } = engine.advance()? {
//!         assert_eq!(final_score, 10);
//!         break;
//!     }
//! }
//! # Ok::<(), rps_reflex::QuizError>(())
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    candidate_choices, correct_counter, Hand, Outcome, OutcomePolicy, Phase, QuizConfig,
    QuizError, Result, RoundRng, RoundRngState, RoundState, DEFAULT_ROUNDS,
};

pub use crate::rules::{EngineSnapshot, RoundEngine, RoundResolution, RoundStatus};
