//! Injectable randomness for the turn engine.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine is generic over `RandomSource`, never a
//!   process-global generator
//! - **Deterministic**: `GameRng` produces the same sequence for the same seed
//! - **Scriptable**: `ScriptedRng` replays forced values and counts calls
//!
//! ## Usage
//!
//! ```
//! use capital_struggle::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.roll_die(6), rng2.roll_die(6));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform random source.
///
/// Only `gen_index` is required; the other methods are derived from it.
/// Implementations may override `shuffle` to use a faster algorithm or to
/// force a specific permutation.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass `upper == 0`.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Roll a die with `faces` sides, uniform in `1..=faces`.
    fn roll_die(&mut self, faces: u32) -> u32 {
        let faces = faces.max(1);
        self.gen_index(faces as usize) as u32 + 1
    }

    /// Shuffle a slice in place (Fisher-Yates).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Choose a random element from a slice.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.gen_index(slice.len());
        slice.get(idx)
    }
}

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Random source that replays a fixed script.
///
/// Each `gen_index(upper)` call pops the next scripted value and reduces it
/// modulo `upper`; an exhausted script yields 0. Shuffles leave the slice
/// untouched so deck order stays exactly as set up.
///
/// ```
/// use capital_struggle::core::{RandomSource, ScriptedRng};
///
/// // A die roll of 4 is index 3.
/// let mut rng = ScriptedRng::new([3]);
/// assert_eq!(rng.roll_die(6), 4);
/// assert_eq!(rng.draws(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
    draws: usize,
    shuffles: usize,
}

impl ScriptedRng {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
            shuffles: 0,
        }
    }

    /// Append more values to the script.
    pub fn push(&mut self, values: impl IntoIterator<Item = usize>) {
        self.script.extend(values);
    }

    /// Number of `gen_index` calls so far (die rolls, card picks, choices).
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of shuffles so far.
    #[must_use]
    pub fn shuffles(&self) -> usize {
        self.shuffles
    }

    /// Scripted values not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.draws += 1;
        self.script.pop_front().map_or(0, |v| v % upper.max(1))
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        self.shuffles += 1;
    }
}
