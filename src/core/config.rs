//! Quiz configuration.
//!
//! - `OutcomePolicy`: how the Win/Lose instruction changes between rounds
//! - `QuizConfig`: session length plus policy

use serde::{Deserialize, Serialize};

use super::error::{QuizError, Result};

/// Number of rounds in a standard session.
pub const DEFAULT_ROUNDS: u32 = 10;

/// How `desired_outcome` is chosen for each new round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomePolicy {
    /// Random on the first round, then flipped on every new round and on reset.
    #[default]
    Toggle,
    /// Re-rolled independently every round.
    Random,
}

/// Configuration for a quiz session.
///
/// Built with chained setters:
///
/// ```
/// use rps_reflex::core::{OutcomePolicy, QuizConfig};
///
/// let config = QuizConfig::new()
///     .with_rounds(5)
///     .with_outcome_policy(OutcomePolicy::Random);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Rounds per session. Must be at least 1.
    pub rounds: u32,

    pub outcome_policy: OutcomePolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            outcome_policy: OutcomePolicy::default(),
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session length.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the outcome policy.
    #[must_use]
    pub fn with_outcome_policy(mut self, policy: OutcomePolicy) -> Self {
        self.outcome_policy = policy;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(QuizError::InvalidConfig(
                "a session needs at least one round".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.rounds, 10);
        assert_eq!(config.outcome_policy, OutcomePolicy::Toggle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = QuizConfig::new().with_rounds(0);
        assert!(matches!(config.validate(), Err(QuizError::InvalidConfig(_))));
    }

    #[test]
    fn test_serde() {
        let config = QuizConfig::new()
            .with_rounds(3)
            .with_outcome_policy(OutcomePolicy::Random);

        let json = serde_json::to_string(&config).unwrap();
        let back: QuizConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}
