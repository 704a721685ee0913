//! Hands, round instructions, and the counter lookup.
//!
//! The whole quiz rests on one table: for a displayed hand and an
//! instruction, exactly one of the other two hands satisfies it.
//!
//! | Shown    | Win      | Lose     |
//! |----------|----------|----------|
//! | Rock     | Paper    | Scissors |
//! | Paper    | Scissors | Rock     |
//! | Scissors | Rock     | Paper    |

use serde::{Deserialize, Serialize};

/// One of the three rock-paper-scissors hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Hand {
    /// All hands, in declaration order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// The hand that beats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Hand {
        match self {
            Hand::Rock => Hand::Paper,
            Hand::Paper => Hand::Scissors,
            Hand::Scissors => Hand::Rock,
        }
    }

    /// The hand that this one beats.
    #[must_use]
    pub const fn beats_hand(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    /// Check whether this hand beats `other` under standard rules.
    #[must_use]
    pub fn beats(self, other: Hand) -> bool {
        self.beats_hand() == other
    }

    /// The two hands other than this one, in declaration order.
    ///
    /// The engine shuffles these before presenting them.
    #[must_use]
    pub fn others(self) -> [Hand; 2] {
        match self {
            Hand::Rock => [Hand::Paper, Hand::Scissors],
            Hand::Paper => [Hand::Rock, Hand::Scissors],
            Hand::Scissors => [Hand::Rock, Hand::Paper],
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Hand::Rock => "✊",
            Hand::Paper => "✋",
            Hand::Scissors => "✌️",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The instruction for a round: pick the hand that wins, or the one that loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// The other instruction.
    #[must_use]
    pub const fn toggled(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
        }
    }

    /// Instruction text shown alongside the hand.
    #[must_use]
    pub const fn instruction(self) -> &'static str {
        match self {
            Outcome::Win => "you should WIN",
            Outcome::Lose => "you should LOSE",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => f.write_str("Win"),
            Outcome::Lose => f.write_str("Lose"),
        }
    }
}

/// The hand the player must pick against `hand` to satisfy `outcome`.
///
/// Total over all six pairs.
#[must_use]
pub const fn correct_counter(hand: Hand, outcome: Outcome) -> Hand {
    match outcome {
        Outcome::Win => hand.beaten_by(),
        Outcome::Lose => hand.beats_hand(),
    }
}

/// The two hands offered to the player against `hand`.
///
/// Always contains `correct_counter(hand, o)` for either outcome.
#[must_use]
pub fn candidate_choices(hand: Hand) -> [Hand; 2] {
    hand.others()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_table() {
        assert_eq!(correct_counter(Hand::Rock, Outcome::Win), Hand::Paper);
        assert_eq!(correct_counter(Hand::Rock, Outcome::Lose), Hand::Scissors);
        assert_eq!(correct_counter(Hand::Paper, Outcome::Win), Hand::Scissors);
        assert_eq!(correct_counter(Hand::Paper, Outcome::Lose), Hand::Rock);
        assert_eq!(correct_counter(Hand::Scissors, Outcome::Win), Hand::Rock);
        assert_eq!(correct_counter(Hand::Scissors, Outcome::Lose), Hand::Paper);
    }

    #[test]
    fn test_beats_is_asymmetric() {
        for a in Hand::ALL {
            assert!(!a.beats(a));
            for b in Hand::ALL {
                if a != b {
                    assert_ne!(a.beats(b), b.beats(a));
                }
            }
        }
    }

    #[test]
    fn test_others_excludes_self() {
        for hand in Hand::ALL {
            let others = hand.others();
            assert!(!others.contains(&hand));
            assert_ne!(others[0], others[1]);
        }
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Outcome::Win.toggled(), Outcome::Lose);
        assert_eq!(Outcome::Lose.toggled().toggled(), Outcome::Lose);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hand::Rock.to_string(), "✊");
        assert_eq!(Hand::Scissors.name(), "Scissors");
        assert_eq!(Outcome::Lose.instruction(), "you should LOSE");
    }
}
