//! Discrete uniform distribution
//!
//! Models a column as integers drawn with equal probability from the half-open
//! range `[low, high)`, where `low` is the observed minimum and `high` the
//! observed maximum plus one. This is the baseline every other discrete model
//! has to beat.
//!
//! # Information Criterion
//!
//! Two free parameters and a per-value log-likelihood of `-ln(high - low)`:
//!
//! ```text
//! AIC = 4 + 2 * n * ln(high - low)
//! ```

use super::{Distribution, DistributionSummary, DrawState};
use crate::error::{FitError, FitResult};
use rand::{Rng, RngCore};

/// Uniform distribution over the integers in `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniformDistribution {
    low: i64,
    high: i64,
}

impl DiscreteUniformDistribution {
    pub const ALIASES: &'static [&'static str] =
        &["DiscreteUniformDistribution", "UniformDistribution"];

    /// Create a distribution from explicit bounds
    ///
    /// `high` is exclusive and must be greater than `low`.
    pub fn new(low: i64, high: i64) -> FitResult<Self> {
        if high <= low {
            return Err(FitError::InvalidSample(format!(
                "uniform bounds must satisfy low < high, got [{}, {})",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// Fit to the minimum and maximum of `values`
    pub fn fit(values: &[i64]) -> FitResult<Self> {
        let low = *values.iter().min().ok_or(FitError::EmptyInput)?;
        let max = *values.iter().max().ok_or(FitError::EmptyInput)?;
        let high = max.checked_add(1).ok_or_else(|| {
            FitError::InvalidSample(format!("maximum {} leaves no exclusive upper bound", max))
        })?;
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Number of integers in `[low, high)`
    pub fn width(&self) -> u64 {
        // Two's complement difference is exact for any low < high
        self.high.wrapping_sub(self.low) as u64
    }
}

impl Distribution for DiscreteUniformDistribution {
    fn aliases(&self) -> &'static [&'static str] {
        Self::ALIASES
    }

    fn n_params(&self) -> usize {
        2
    }

    fn log_likelihood(&self, values: &[i64]) -> f64 {
        -(values.len() as f64) * (self.width() as f64).ln()
    }

    #[inline]
    fn draw(&self, state: &mut DrawState, rng: &mut dyn RngCore) -> i64 {
        state.record(rng.gen_range(self.low..self.high))
    }

    fn summary(&self) -> DistributionSummary {
        DistributionSummary::new(self.name())
            .with("low", self.low)
            .with("high", self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Synthesizer;
    use std::collections::HashSet;

    fn expected_criterion(dist: &DiscreteUniformDistribution, n: usize) -> f64 {
        4.0 + 2.0 * n as f64 * ((dist.high() - dist.low()) as f64).ln()
    }

    #[test]
    fn test_uniform_fit_bounds() {
        for values in [vec![1, 2, 3, 4, 5], vec![-399, 12, 1, 492], vec![7]] {
            let dist = DiscreteUniformDistribution::fit(&values).unwrap();
            assert_eq!(dist.low(), *values.iter().min().unwrap());
            assert_eq!(dist.high(), *values.iter().max().unwrap() + 1);
        }
    }

    #[test]
    fn test_uniform_fit_empty() {
        assert_eq!(DiscreteUniformDistribution::fit(&[]), Err(FitError::EmptyInput));
    }

    #[test]
    fn test_uniform_fit_overflow() {
        let result = DiscreteUniformDistribution::fit(&[0, i64::MAX]);
        assert!(matches!(result, Err(FitError::InvalidSample(_))));
    }

    #[test]
    fn test_uniform_new_rejects_empty_range() {
        assert!(DiscreteUniformDistribution::new(5, 5).is_err());
        assert!(DiscreteUniformDistribution::new(5, 6).is_ok());
    }

    #[test]
    fn test_uniform_small_range_coverage() {
        let values = [1, 2, 3, 4];
        let dist = DiscreteUniformDistribution::fit(&values).unwrap();
        let mut synth = Synthesizer::with_seed(&dist, 42);

        let drawn: HashSet<i64> = synth.by_ref().take(1000).collect();
        assert_eq!(drawn.len(), values.len());
        assert!(drawn.iter().all(|v| (1..5).contains(v)));
    }

    #[test]
    fn test_uniform_draws_stay_in_range() {
        let dist = DiscreteUniformDistribution::fit(&[-399, 12, 1, 492]).unwrap();
        let mut synth = Synthesizer::new(&dist);

        for _ in 0..1000 {
            let value = synth.draw();
            assert!((-399..493).contains(&value));
        }
    }

    #[test]
    fn test_uniform_criterion_on_drawn_values() {
        let dist = DiscreteUniformDistribution::fit(&[0, 999, 500, 12]).unwrap();
        let mut synth = Synthesizer::with_seed(&dist, 7);

        let drawn: Vec<i64> = synth
            .by_ref()
            .take(1000)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let criterion = dist.information_criterion(&drawn);
        assert!((criterion - expected_criterion(&dist, drawn.len())).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_criterion_ignores_fitted_data() {
        // Evaluation set may differ from the fitted sample
        let dist = DiscreteUniformDistribution::fit(&[10, 20]).unwrap();
        let criterion = dist.information_criterion(&[1, 2, 3]);
        assert!((criterion - expected_criterion(&dist, 3)).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_single_value() {
        let dist = DiscreteUniformDistribution::fit(&[5, 5, 5]).unwrap();
        assert_eq!(dist.width(), 1);
        assert!((dist.information_criterion(&[5, 5, 5, 5, 5]) - 4.0).abs() < 1e-12);

        let mut synth = Synthesizer::new(&dist);
        assert!(synth.by_ref().take(20).all(|v| v == 5));
    }

    #[test]
    fn test_uniform_width_full_range() {
        let dist = DiscreteUniformDistribution::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(dist.width(), u64::MAX);
    }
}
