//! Integer key distribution
//!
//! Models surrogate-key columns: auto-increment IDs and other columns of
//! distinct, tightly packed integers.
//!
//! # Consecutive Keys
//!
//! When the column, in its original row order, reads `low, low+1, low+2, ...`
//! the model is a perfect predictor. Draws reproduce the run exactly and the
//! criterion is `2` (one parameter, no likelihood cost).
//!
//! # Gapped Keys
//!
//! Otherwise the sorted keys are modelled as a walk upward from `low` with
//! geometric gaps:
//!
//! ```text
//! s_0 = low + g_0,  s_i = s_{i-1} + 1 + g_i,  g_i ~ Geometric(p) on {0, 1, ...}
//! ln L = n ln p + G ln(1 - p) + ln P(order)    G = sum of gaps
//! ```
//!
//! `p` is fitted by maximum likelihood, `p = n / (n + G)`. Duplicates or values
//! below `low` mean a negative gap, which the model cannot produce, so the
//! criterion is infinite.
//!
//! # Row Order
//!
//! Key columns are usually stored sorted. For `n >= 3` the rows are ascending
//! with probability 1/4, descending with probability 1/4, and otherwise one of
//! the remaining `n! - 2` orderings, uniformly. Two keys are ascending or
//! descending with probability 1/2 each.

use super::{Distribution, DistributionSummary, DrawState};
use crate::error::{FitError, FitResult};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_distr::{Distribution as _, Geometric};

/// Probability of an ascending column (and, separately, of a descending one)
const SORTED_ORDER_WEIGHT: f64 = 0.25;

/// Row order of a column of distinct keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowOrder {
    Ascending,
    Descending,
    Other,
}

/// Surrogate-key model
#[derive(Debug, Clone)]
pub struct IntegerKeyDistribution {
    /// Smallest key
    low: i64,
    /// Column is a literal count-up from `low`
    consecutive: bool,
    /// Success probability of the gap distribution
    gap_p: f64,
    gaps: Geometric,
}

impl IntegerKeyDistribution {
    pub const ALIASES: &'static [&'static str] =
        &["IntegerKeyDistribution", "UniqueKeyDistribution"];

    /// Create a distribution from explicit parameters
    ///
    /// A consecutive model always has `gap_p == 1`.
    pub fn new(low: i64, consecutive: bool, gap_p: f64) -> FitResult<Self> {
        if !(gap_p > 0.0 && gap_p <= 1.0) {
            return Err(FitError::InvalidSample(format!(
                "gap probability must be in (0, 1], got {}",
                gap_p
            )));
        }
        if consecutive && gap_p != 1.0 {
            return Err(FitError::InvalidSample(
                "consecutive key model requires gap probability 1".to_string(),
            ));
        }
        let gaps = Geometric::new(gap_p)
            .map_err(|e| FitError::InvalidSample(format!("gap distribution: {}", e)))?;
        Ok(Self {
            low,
            consecutive,
            gap_p,
            gaps,
        })
    }

    pub fn fit(values: &[i64]) -> FitResult<Self> {
        let low = *values.iter().min().ok_or(FitError::EmptyInput)?;
        let max = *values.iter().max().ok_or(FitError::EmptyInput)?;

        if is_run_from(values, low) {
            return Self::new(low, true, 1.0);
        }

        let n = values.len() as u64;
        let span = max.wrapping_sub(low) as u64;
        // Duplicates can make the slack negative; they are scored as impossible anyway
        let slack = span.saturating_sub(n - 1);
        let gap_p = n as f64 / (n as f64 + slack as f64);

        Self::new(low, false, gap_p)
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn is_consecutive(&self) -> bool {
        self.consecutive
    }

    pub fn gap_p(&self) -> f64 {
        self.gap_p
    }

    fn gapped_log_likelihood(&self, values: &[i64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        if sorted[0] < self.low {
            return f64::NEG_INFINITY;
        }
        let mut total_gap = sorted[0].wrapping_sub(self.low) as u64 as f64;
        for pair in sorted.windows(2) {
            if pair[1] == pair[0] {
                return f64::NEG_INFINITY;
            }
            total_gap += (pair[1].wrapping_sub(pair[0]) as u64 - 1) as f64;
        }

        let n = values.len() as f64;
        // 0 * ln(0) = 0 when there are no gaps to explain
        let gap_term = if total_gap == 0.0 {
            0.0
        } else {
            total_gap * (-self.gap_p).ln_1p()
        };

        n * self.gap_p.ln() + gap_term + ln_order_probability(row_order(values), values.len())
    }

    fn next_key(&self, state: &mut DrawState, rng: &mut dyn RngCore) -> i64 {
        if self.consecutive {
            return state.record(self.low.saturating_add(state.drawn() as i64));
        }

        let gap = i64::try_from(self.gaps.sample(rng)).unwrap_or(i64::MAX);
        let key = match state.last() {
            None => self.low.saturating_add(gap),
            Some(prev) => prev.saturating_add(1).saturating_add(gap),
        };
        state.record(key)
    }
}

impl Distribution for IntegerKeyDistribution {
    fn aliases(&self) -> &'static [&'static str] {
        Self::ALIASES
    }

    fn is_unique(&self) -> bool {
        true
    }

    fn n_params(&self) -> usize {
        if self.consecutive {
            1
        } else {
            2
        }
    }

    fn log_likelihood(&self, values: &[i64]) -> f64 {
        if self.consecutive {
            if is_run_from(values, self.low) {
                0.0
            } else {
                f64::NEG_INFINITY
            }
        } else {
            self.gapped_log_likelihood(values)
        }
    }

    /// Consecutive models emit `low, low+1, ...`; gapped models emit
    /// ascending keys separated by geometric gaps
    fn draw(&self, state: &mut DrawState, rng: &mut dyn RngCore) -> i64 {
        self.next_key(state, rng)
    }

    /// Gapped columns come back in a row order drawn from the order model
    fn draw_column(&self, n: usize, rng: &mut dyn RngCore) -> Vec<i64> {
        let mut state = DrawState::new();
        let mut column = Vec::with_capacity(n);
        for _ in 0..n {
            column.push(self.next_key(&mut state, rng));
        }
        if !self.consecutive {
            arrange_rows(&mut column, rng);
        }
        column
    }

    fn summary(&self) -> DistributionSummary {
        DistributionSummary::new(self.name())
            .with("low", self.low)
            .with("consecutive", self.consecutive)
            .with("gap_p", self.gap_p)
    }
}

/// Whether `values[i] == low + i` for every position
fn is_run_from(values: &[i64], low: i64) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, &v)| v as i128 == low as i128 + i as i128)
}

fn ln_factorial(n: usize) -> f64 {
    (2..=n).map(|i| (i as f64).ln()).sum()
}

/// Order of distinct values; a single value counts as ascending
fn row_order(values: &[i64]) -> RowOrder {
    if values.windows(2).all(|w| w[0] < w[1]) {
        RowOrder::Ascending
    } else if values.windows(2).all(|w| w[0] > w[1]) {
        RowOrder::Descending
    } else {
        RowOrder::Other
    }
}

/// Log-probability of one specific row order among `n` distinct keys
fn ln_order_probability(order: RowOrder, n: usize) -> f64 {
    match (n, order) {
        (0 | 1, _) => 0.0,
        (2, _) => -std::f64::consts::LN_2,
        (_, RowOrder::Ascending | RowOrder::Descending) => SORTED_ORDER_WEIGHT.ln(),
        (_, RowOrder::Other) => {
            // ln(n! - 2) = ln(n!) + ln(1 - 2 / n!)
            let ln_all = ln_factorial(n);
            let ln_others = ln_all + (-2.0 * (-ln_all).exp()).ln_1p();
            (1.0 - 2.0 * SORTED_ORDER_WEIGHT).ln() - ln_others
        }
    }
}

/// Put ascending keys into a row order drawn from the order model
fn arrange_rows(column: &mut [i64], rng: &mut dyn RngCore) {
    match column.len() {
        0 | 1 => {}
        2 => {
            if rng.gen_bool(0.5) {
                column.reverse();
            }
        }
        _ => {
            let u: f64 = rng.gen();
            if u < SORTED_ORDER_WEIGHT {
                return;
            }
            if u < 2.0 * SORTED_ORDER_WEIGHT {
                column.reverse();
                return;
            }
            // Uniform over the unsorted orderings
            loop {
                column.shuffle(rng);
                if row_order(column) == RowOrder::Other {
                    break;
                }
            }
        }
    }
}
