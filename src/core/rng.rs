//! Random number sources for dice and purchase decisions.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees the `RandomSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces the same game
//! - **Forkable**: batch simulations give each game its own stream
//! - **Scripted**: `ScriptedRng` replays fixed dice and coin flips
//!
//! ```
//! use monopoly_sim::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_dice();
//! assert!((2..=12).contains(&roll.total()));
//!
//! // Forks are deterministic: same parent seed, same fork sequence.
//! let mut a = GameRng::new(7).fork();
//! let mut b = GameRng::new(7).fork();
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of dice rolls and coin flips.
pub trait RandomSource {
    /// Roll one six-sided die, uniform in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Return `true` with the given probability.
    fn gen_bool(&mut self, probability: f64) -> bool;

    /// Roll two independent dice.
    fn roll_dice(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll { first, second }
    }
}

/// A pair of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    /// Sum of both dice.
    #[must_use]
    pub fn total(self) -> usize {
        usize::from(self.first) + usize::from(self.second)
    }

    /// Both dice show the same face.
    #[must_use]
    pub fn is_double(self) -> bool {
        self.first == self.second
    }
}

/// Deterministic RNG with forking for independent games.
///
/// Uses ChaCha8 for speed while keeping a high quality stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

/// Replays a fixed script of dice faces and coin flips.
///
/// Panics when a script runs dry, so a test that needs more randomness than
/// it scripted fails loudly instead of silently diverging.
///
/// ```
/// use monopoly_sim::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new().with_dice([3, 3]).with_coins([false]);
/// assert!(rng.roll_dice().is_double());
/// assert!(!rng.gen_bool(0.5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    dice: VecDeque<u8>,
    coins: VecDeque<bool>,
}

impl ScriptedRng {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue die faces, consumed one per die.
    #[must_use]
    pub fn with_dice(mut self, faces: impl IntoIterator<Item = u8>) -> Self {
        self.push_dice(faces);
        self
    }

    /// Queue coin flips, consumed one per `gen_bool`.
    #[must_use]
    pub fn with_coins(mut self, coins: impl IntoIterator<Item = bool>) -> Self {
        self.coins.extend(coins);
        self
    }

    /// Append die faces to the script.
    pub fn push_dice(&mut self, faces: impl IntoIterator<Item = u8>) {
        for face in faces {
            assert!((1..=6).contains(&face), "die face {face} out of range");
            self.dice.push_back(face);
        }
    }

    /// Die faces not yet consumed.
    #[must_use]
    pub fn remaining_dice(&self) -> usize {
        self.dice.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll_die(&mut self) -> u8 {
        self.dice.pop_front().expect("scripted dice exhausted")
    }

    fn gen_bool(&mut self, _probability: f64) -> bool {
        self.coins.pop_front().expect("scripted coins exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_die_range() {
        let mut rng = GameRng::new(9);
        let mut seen = [false; 7];

        for _ in 0..1000 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
            seen[face as usize] = true;
        }

        assert!(seen[1..].iter().all(|&s| s), "every face should appear");
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let _ = rng1.fork();
        let _ = rng2.fork();

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_dice_roll() {
        let double = DiceRoll { first: 4, second: 4 };
        assert_eq!(double.total(), 8);
        assert!(double.is_double());

        let mixed = DiceRoll { first: 1, second: 6 };
        assert_eq!(mixed.total(), 7);
        assert!(!mixed.is_double());
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRng::new().with_dice([1, 2, 5]).with_coins([true]);

        assert_eq!(rng.roll_dice(), DiceRoll { first: 1, second: 2 });
        assert_eq!(rng.remaining_dice(), 1);
        assert_eq!(rng.roll_die(), 5);
        assert!(rng.gen_bool(0.5));
    }

    #[test]
    #[should_panic(expected = "scripted dice exhausted")]
    fn test_scripted_exhausted() {
        let mut rng = ScriptedRng::new();
        rng.roll_die();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_scripted_rejects_bad_face() {
        let _ = ScriptedRng::new().with_dice([7]);
    }
}
