//! The round engine: the whole quiz session as an explicit phase machine.
//!
//! ```text
//! Init -> AwaitingChoice -> RoundResolved -> AwaitingChoice -> ... -> GameEnded
//!                ^                                                     |
//!                +----------------------- reset -----------------------+
//! ```
//!
//! Every operation checks the current phase first and returns
//! `QuizError::InvalidPhase` without touching state when called out of turn.

use log::{debug, info, warn};

use crate::core::{
    Hand, Outcome, OutcomePolicy, Phase, QuizConfig, QuizError, Result, RoundRng, RoundState,
};

/// Scored result of one `submit_choice`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResolution {
    /// What the player picked.
    pub selected: Hand,
    /// What they should have picked.
    pub expected: Hand,
    pub correct: bool,
    /// Score after this round was applied.
    pub new_score: i64,
    pub round_number: u32,
    /// True when advancing next will end the game.
    pub is_last_round: bool,
}

impl RoundResolution {
    /// Feedback dialog title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.correct {
            "Correct Move"
        } else {
            "Wrong Move"
        }
    }

    /// Feedback dialog body.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Your score is {}", self.new_score)
    }
}

/// Where the session stands after `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// A new round is ready.
    AwaitingChoice { round_number: u32 },
    /// No rounds remain.
    GameEnded { final_score: i64 },
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundStatus::GameEnded { .. })
    }

    /// End-of-game dialog body, if the game has ended.
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        match self {
            RoundStatus::GameEnded { final_score } => Some(format!(
                "Your game ends at score {final_score}. Do you wanna play again?"
            )),
            RoundStatus::AwaitingChoice { .. } => None,
        }
    }
}

/// Owns the session state and the RNG that drives it.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: QuizConfig,
    state: RoundState,
    rng: RoundRng,
}

impl RoundEngine {
    /// Create an engine with a fixed seed. Same seed, same session.
    pub fn new(config: QuizConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config, RoundRng::new(seed)))
    }

    /// Create an engine seeded from system randomness.
    pub fn from_entropy(config: QuizConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config, RoundRng::from_entropy()))
    }

    fn with_rng(config: QuizConfig, mut rng: RoundRng) -> Self {
        let hand = rng.pick_hand();
        let outcome = rng.pick_outcome();
        debug!("engine created with seed {}", rng.seed());

        Self {
            config,
            state: RoundState::new(hand, outcome),
            rng,
        }
    }

    /// Assemble an engine from existing parts.
    ///
    /// Fails if the config is invalid or the round number lies outside the
    /// configured session.
    pub fn from_parts(config: QuizConfig, state: RoundState, rng: RoundRng) -> Result<Self> {
        config.validate()?;
        if state.round_number == 0 || state.round_number > config.rounds {
            return Err(QuizError::InvalidConfig(format!(
                "round {} outside a {}-round session",
                state.round_number, config.rounds
            )));
        }
        if !state.current_hand.others().iter().all(|h| state.is_candidate(*h)) {
            return Err(QuizError::InvalidConfig(format!(
                "candidates {:?} do not match hand {:?}",
                state.candidates, state.current_hand
            )));
        }

        Ok(Self { config, state, rng })
    }

    // === Operations ===

    /// Roll the first round of a fresh session.
    pub fn start_round(&mut self) -> Result<()> {
        self.expect_phase(Phase::Init, "start a round")?;

        self.state.desired_outcome = self.rng.pick_outcome();
        self.roll_hand();
        self.state.round_number = 1;
        self.state.score = 0;
        self.state.phase = Phase::AwaitingChoice;

        debug!(
            "round 1: {} / {}",
            self.state.current_hand.name(),
            self.state.desired_outcome
        );
        Ok(())
    }

    /// Score the player's pick for the current round.
    ///
    /// Only one pick per round is accepted; a second call before `advance`
    /// is rejected.
    pub fn submit_choice(&mut self, selected: Hand) -> Result<RoundResolution> {
        self.expect_phase(Phase::AwaitingChoice, "submit a choice")?;

        if !self.state.is_candidate(selected) {
            warn!(
                "rejected pick {:?}: not offered against {:?}",
                selected, self.state.current_hand
            );
            return Err(QuizError::NotACandidate {
                selected,
                shown: self.state.current_hand,
            });
        }

        let expected = self.state.correct_counter();
        let correct = selected == expected;
        self.state.score += if correct { 1 } else { -1 };
        self.state.phase = Phase::RoundResolved;

        debug!(
            "round {}: picked {:?}, expected {:?}, score now {}",
            self.state.round_number, selected, expected, self.state.score
        );

        Ok(RoundResolution {
            selected,
            expected,
            correct,
            new_score: self.state.score,
            round_number: self.state.round_number,
            is_last_round: self.is_last_round(),
        })
    }

    /// Move past a resolved round.
    pub fn advance(&mut self) -> Result<RoundStatus> {
        self.expect_phase(Phase::RoundResolved, "advance")?;

        if self.is_last_round() {
            self.state.phase = Phase::GameEnded;
            info!(
                "game ended after {} rounds with score {}",
                self.state.round_number, self.state.score
            );
            return Ok(RoundStatus::GameEnded {
                final_score: self.state.score,
            });
        }

        self.state.round_number += 1;
        self.state.desired_outcome = self.next_outcome();
        self.roll_hand();
        self.state.phase = Phase::AwaitingChoice;

        debug!(
            "round {}: {} / {}",
            self.state.round_number,
            self.state.current_hand.name(),
            self.state.desired_outcome
        );

        Ok(RoundStatus::AwaitingChoice {
            round_number: self.state.round_number,
        })
    }

    /// Start over from round 1 with a zero score. Valid in any phase.
    pub fn reset(&mut self) {
        info!(
            "reset from {} at round {} with score {}",
            self.state.phase, self.state.round_number, self.state.score
        );

        self.state.round_number = 1;
        self.state.score = 0;
        self.state.desired_outcome = self.next_outcome();
        self.roll_hand();
        self.state.phase = Phase::AwaitingChoice;
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn rng(&self) -> &RoundRng {
        &self.rng
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn current_hand(&self) -> Hand {
        self.state.current_hand
    }

    #[must_use]
    pub fn desired_outcome(&self) -> Outcome {
        self.state.desired_outcome
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.state.score
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.state.round_number
    }

    /// The two picks for this round, in presentation order.
    #[must_use]
    pub fn candidate_choices(&self) -> [Hand; 2] {
        self.state.candidates
    }

    #[must_use]
    pub fn is_last_round(&self) -> bool {
        self.state.round_number >= self.config.rounds
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Prompt line for the current round, e.g. "I play ✊ and you should WIN".
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "I play {} and {}",
            self.state.current_hand,
            self.state.desired_outcome.instruction()
        )
    }

    // === Internals ===

    fn expect_phase(&self, expected: Phase, operation: &'static str) -> Result<()> {
        if self.state.phase != expected {
            warn!("cannot {} while {}", operation, self.state.phase);
            return Err(QuizError::InvalidPhase {
                operation,
                phase: self.state.phase,
            });
        }
        Ok(())
    }

    fn roll_hand(&mut self) {
        let hand = self.rng.pick_hand();
        let mut candidates = hand.others();
        self.rng.shuffle(&mut candidates);

        self.state.current_hand = hand;
        self.state.candidates = candidates;
    }

    fn next_outcome(&mut self) -> Outcome {
        match self.config.outcome_policy {
            OutcomePolicy::Toggle => self.state.desired_outcome.toggled(),
            OutcomePolicy::Random => self.rng.pick_outcome(),
        }
    }
}
