//! Core quiz types: hands, instructions, state, RNG, configuration, errors.
//!
//! Everything here is independent of how the quiz is displayed. The
//! `rules` module drives these types through a session.

pub mod hand;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use hand::{candidate_choices, correct_counter, Hand, Outcome};
pub use rng::{RoundRng, RoundRngState};
pub use config::{OutcomePolicy, QuizConfig, DEFAULT_ROUNDS};
pub use state::{Phase, RoundState};
pub use error::{QuizError, Result};
