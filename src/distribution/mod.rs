//! Discrete distribution models
//!
//! This module provides the statistical models that can be fitted to a column
//! of integers and then used to generate synthetic replacement values. Every
//! model is compared against the others through an Akaike-style information
//! criterion, so the selection layer never needs to know concrete types.
//!
//! # Distributions
//!
//! - **DiscreteUniform**: Equal probability for every integer in `[low, high)`
//! - **IntegerKey**: Surrogate-key columns (auto-increment IDs and gapped keys)
//!
//! # Fitted Models Are Immutable
//!
//! A fitted model never changes. Progress through a draw stream (how many values
//! were generated, the last key emitted) lives in a [`DrawState`], and entropy
//! comes from an RNG handle passed in by the caller. [`Synthesizer`] bundles
//! both for the common case.
//!
//! # Example
//!
//! ```
//! use intsynth::distribution::{Synthesizer, uniform::DiscreteUniformDistribution};
//!
//! let dist = DiscreteUniformDistribution::fit(&[3, 9, 4, 7]).unwrap();
//! let mut synth = Synthesizer::with_seed(&dist, 42);
//!
//! for value in synth.column(10) {
//!     assert!((3..10).contains(&value));
//! }
//! ```

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Distribution trait for fitted integer column models
///
/// # Information Criterion
///
/// Scores are `2k - 2 ln L`: `k` free parameters penalize complexity and the
/// log-likelihood rewards fit. Lower is better. Data the model cannot produce
/// at all has likelihood zero and scores `f64::INFINITY`.
///
/// # Thread Safety
///
/// Models are `Send + Sync`. They hold no mutable state, so one fitted model can
/// feed several draw streams, each with its own [`DrawState`] and RNG.
pub trait Distribution: Send + Sync + fmt::Debug {
    /// Names this family answers to; the first one is canonical
    fn aliases(&self) -> &'static [&'static str];

    /// Canonical name
    fn name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Whether the model only ever generates distinct values
    fn is_unique(&self) -> bool {
        false
    }

    /// Number of free parameters (`k` in the criterion)
    fn n_params(&self) -> usize;

    /// Natural log of the likelihood of `values` under this model
    fn log_likelihood(&self, values: &[i64]) -> f64;

    /// Akaike information criterion of `values`, lower is better
    ///
    /// `values` need not be the data the model was fitted on.
    fn information_criterion(&self, values: &[i64]) -> f64 {
        2.0 * self.n_params() as f64 - 2.0 * self.log_likelihood(values)
    }

    /// Draw the next value of a stream
    fn draw(&self, state: &mut DrawState, rng: &mut dyn RngCore) -> i64;

    /// Draw a complete column of `n` values from a fresh stream
    fn draw_column(&self, n: usize, rng: &mut dyn RngCore) -> Vec<i64> {
        let mut state = DrawState::new();
        let mut column = Vec::with_capacity(n);
        for _ in 0..n {
            column.push(self.draw(&mut state, rng));
        }
        column
    }

    /// Name and parameters, for reports
    fn summary(&self) -> DistributionSummary;
}

/// Progress of one draw stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawState {
    drawn: u64,
    last: Option<i64>,
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values drawn so far
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    /// Last value drawn, if any
    pub fn last(&self) -> Option<i64> {
        self.last
    }

    /// Record a drawn value and return it
    pub fn record(&mut self, value: i64) -> i64 {
        self.drawn += 1;
        self.last = Some(value);
        value
    }

    /// Start the stream over
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Name and parameters of a fitted model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub name: String,
    pub parameters: BTreeMap<String, serde_json::Value>,
}

impl DistributionSummary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }
}

impl fmt::Display for DistributionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, (key, value)) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, ")")
    }
}

/// Draw stream over a fitted model
///
/// Owns the RNG and the stream state so callers can simply call `draw()`.
/// Uses xoshiro256++ by default, like the rest of the crate.
pub struct Synthesizer<'a, R = Xoshiro256PlusPlus> {
    dist: &'a dyn Distribution,
    state: DrawState,
    rng: R,
}

impl<'a> Synthesizer<'a, Xoshiro256PlusPlus> {
    /// Create a synthesizer with a random seed
    pub fn new(dist: &'a dyn Distribution) -> Self {
        Self::with_rng(dist, Xoshiro256PlusPlus::from_entropy())
    }

    /// Create a synthesizer with a specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(dist: &'a dyn Distribution, seed: u64) -> Self {
        Self::with_rng(dist, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<'a, R: RngCore> Synthesizer<'a, R> {
    pub fn with_rng(dist: &'a dyn Distribution, rng: R) -> Self {
        Self {
            dist,
            state: DrawState::new(),
            rng,
        }
    }

    pub fn distribution(&self) -> &'a dyn Distribution {
        self.dist
    }

    #[inline]
    pub fn draw(&mut self) -> i64 {
        self.dist.draw(&mut self.state, &mut self.rng)
    }

    /// Restart the stream; the RNG keeps its position
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Generate a full replacement column of `n` values
    ///
    /// Independent of the `draw()` stream position.
    pub fn column(&mut self, n: usize) -> Vec<i64> {
        self.dist.draw_column(n, &mut self.rng)
    }
}

impl<R: RngCore> Iterator for Synthesizer<'_, R> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.draw())
    }
}

pub mod key;
pub mod uniform;
