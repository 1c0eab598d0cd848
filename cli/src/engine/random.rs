//! # Random Source
//!
//! File: cli/src/engine/random.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every random decision the composer makes (which response, whether to add
//! the user's name, whether to add a follow-up) goes through the
//! [`RandomSource`] trait. Production code wraps a `rand` generator in
//! [`RngSource`]; tests pass a [`FixedSource`] to force a specific branch.
//!
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of the two kinds of random decision the composer needs.
pub trait RandomSource {
    /// Returns an index in `0..len`, uniformly distributed. `len` is never 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Returns `true` with the given probability (clamped to `[0, 1]`).
    fn roll(&mut self, probability: f64) -> bool;
}

/// Picks a uniformly random element from `items`, or `None` if it is empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick_index(items.len()))
}

/// # RNG-backed Source (`RngSource`)
///
/// Adapts any `rand::Rng` into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng>(pub R);

impl RngSource<StdRng> {
    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// A reproducible generator, used by `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn roll(&mut self, probability: f64) -> bool {
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// # Fixed Source (`FixedSource`)
///
/// Always answers the same way: picks `index` (clamped to the last element)
/// and returns `roll` for every probability check.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSource {
    pub index: usize,
    pub roll: bool,
}

impl FixedSource {
    pub fn new(index: usize, roll: bool) -> Self {
        Self { index, roll }
    }
}

impl RandomSource for FixedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn roll(&mut self, _probability: f64) -> bool {
        self.roll
    }
}
