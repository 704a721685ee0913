//! Deterministic random number generation for quiz rounds.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rps_reflex::core::RoundRng;
//!
//! let mut rng1 = RoundRng::new(42);
//! let mut rng2 = RoundRng::new(42);
//!
//! assert_eq!(rng1.pick_hand(), rng2.pick_hand());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::hand::{Hand, Outcome};

/// Deterministic RNG driving hand and instruction selection.
///
/// Uses ChaCha8 so a seed fully determines a session.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator, for live play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick one of the three hands uniformly.
    pub fn pick_hand(&mut self) -> Hand {
        Hand::ALL[self.inner.gen_range(0..Hand::ALL.len())]
    }

    /// Pick Win or Lose with equal probability.
    pub fn pick_outcome(&mut self) -> Outcome {
        if self.inner.gen_bool(0.5) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RoundRngState {
        RoundRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RoundRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses ChaCha8 word position so capture cost does not grow with the
/// number of rounds played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = RoundRng::new(42);
        let mut rng2 = RoundRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick_hand(), rng2.pick_hand());
            assert_eq!(rng1.pick_outcome(), rng2.pick_outcome());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = RoundRng::new(1);
        let mut rng2 = RoundRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.pick_hand()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.pick_hand()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_hand_covers_all_hands() {
        let mut rng = RoundRng::new(7);
        let mut seen = [false; 3];

        for _ in 0..200 {
            seen[rng.pick_hand() as usize] = true;
        }

        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_pick_outcome_covers_both() {
        let mut rng = RoundRng::new(7);
        let picks: Vec<_> = (0..100).map(|_| rng.pick_outcome()).collect();

        assert!(picks.contains(&Outcome::Win));
        assert!(picks.contains(&Outcome::Lose));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = RoundRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        rng.shuffle(&mut data);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = RoundRng::new(42);

        for _ in 0..100 {
            rng.pick_hand();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pick_hand()).collect();

        let mut restored = RoundRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.pick_hand()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = RoundRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RoundRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
