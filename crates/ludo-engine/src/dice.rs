//! Dice sources.
//!
//! The turn controller never draws randomness itself; callers hand it a
//! [`DiceSource`]. A seeded [`RandomDice`] reproduces the same game for the
//! same inputs, and [`ScriptedDice`] replays a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Number of faces on the die.
pub const DICE_FACES: u8 = 6;

/// Anything that can produce dice values.
///
/// Implementations should yield values in `1..=6`; the game rejects
/// anything else.
pub trait DiceSource {
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// A fair six-sided die backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Creates a die whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        RandomDice {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a die seeded from the operating system.
    pub fn from_entropy() -> Self {
        RandomDice {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DICE_FACES)
    }
}

/// Replays a fixed sequence of values.
///
/// Once the sequence is exhausted it yields 0, which the game rejects as
/// an invalid dice value.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        ScriptedDice {
            values: values.into_iter().collect(),
        }
    }

    /// Returns how many values are left.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.values.pop_front().unwrap_or(0)
    }
}
