//! Round state: everything a UI needs to render the current screen.
//!
//! `RoundState` is a plain value. The engine owns one and mutates it only
//! through its operations; callers get shared references or clones.

use serde::{Deserialize, Serialize};

use super::hand::{correct_counter, Hand, Outcome};

/// Engine lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, no round rolled yet.
    Init,
    /// A hand and instruction are shown; waiting for the player's pick.
    AwaitingChoice,
    /// The pick for this round has been scored.
    RoundResolved,
    /// The last round was resolved and advanced past. Score is frozen.
    GameEnded,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Init => "not started",
            Phase::AwaitingChoice => "awaiting a choice",
            Phase::RoundResolved => "round resolved",
            Phase::GameEnded => "game ended",
        };
        f.write_str(label)
    }
}

/// Mutable state of a quiz session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Hand the program plays this round.
    pub current_hand: Hand,

    /// Instruction for this round.
    pub desired_outcome: Outcome,

    /// Running score. Can go negative.
    pub score: i64,

    /// Current round (starts at 1).
    pub round_number: u32,

    pub phase: Phase,

    /// The two picks offered this round, in presentation order.
    pub candidates: [Hand; 2],
}

impl RoundState {
    /// Create an unstarted state around an initial hand and instruction.
    #[must_use]
    pub fn new(current_hand: Hand, desired_outcome: Outcome) -> Self {
        Self {
            current_hand,
            desired_outcome,
            score: 0,
            round_number: 1,
            phase: Phase::Init,
            candidates: current_hand.others(),
        }
    }

    /// The one pick that satisfies this round's instruction.
    #[must_use]
    pub fn correct_counter(&self) -> Hand {
        correct_counter(self.current_hand, self.desired_outcome)
    }

    /// Whether `hand` is one of the two picks offered this round.
    #[must_use]
    pub fn is_candidate(&self, hand: Hand) -> bool {
        self.candidates.contains(&hand)
    }

    /// Whether the session has reached its terminal phase.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameEnded
    }
}
