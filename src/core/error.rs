//! Error type for engine misuse.
//!
//! Every failure here is a caller bug: an operation invoked from the wrong
//! phase, a pick that was never offered, or a bad configuration. The
//! engine state is untouched whenever one of these is returned.

use super::hand::Hand;
use super::state::Phase;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("{selected:?} was not offered against {shown:?}")]
    NotACandidate { selected: Hand, shown: Hand },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
