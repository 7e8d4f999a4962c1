//! Column fitting
//!
//! Wraps selection for real columns: missing values are dropped before fitting
//! and their proportion is remembered, so synthetic columns have the same share
//! of gaps. Columns are fitted independently; [`fit_columns`] runs them in
//! parallel.

use crate::distribution::{Distribution, DistributionSummary};
use crate::error::{FitError, FitResult};
use crate::selection::{CandidateScore, Registry};
use rand::{Rng, RngCore};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-column directives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Force a distribution family by name instead of selecting one
    #[serde(default)]
    pub distribution: Option<String>,
    /// Restrict selection to unique (`true`) or non-unique (`false`) families
    #[serde(default)]
    pub unique: Option<bool>,
}

/// A fitted column ready for synthesis
#[derive(Debug)]
pub struct ColumnModel {
    pub name: String,
    /// Rows in the observed column, missing ones included
    pub n_rows: usize,
    /// Fraction of rows that were missing
    pub prop_missing: f64,
    pub distribution: Box<dyn Distribution>,
    /// Every candidate compared; empty when the family was forced
    pub scores: Vec<CandidateScore>,
    /// Position of the selected model in `scores`
    pub selected: Option<usize>,
}

impl ColumnModel {
    pub fn summary(&self) -> DistributionSummary {
        self.distribution.summary()
    }

    /// Generate `n` synthetic rows, blanking each with probability `prop_missing`
    pub fn synthesize(&self, n: usize, rng: &mut dyn RngCore) -> Vec<Option<i64>> {
        let values = self.distribution.draw_column(n, rng);
        values
            .into_iter()
            .map(|value| {
                if self.prop_missing > 0.0 && rng.gen_bool(self.prop_missing) {
                    None
                } else {
                    Some(value)
                }
            })
            .collect()
    }
}

/// Parse a column written one value per line
///
/// Blank lines and `NA`, `NaN`, `null` or `None` (any case) are missing values.
pub fn parse_column(text: &str) -> FitResult<Vec<Option<i64>>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let token = line.trim();
            if token.is_empty() || MISSING_TOKENS.iter().any(|m| m.eq_ignore_ascii_case(token)) {
                return Ok(None);
            }
            token.parse::<i64>().map(Some).map_err(|e| {
                FitError::InvalidSample(format!(
                    "line {}: '{}' is not an integer ({})",
                    i + 1,
                    token,
                    e
                ))
            })
        })
        .collect()
}

const MISSING_TOKENS: &[&str] = &["na", "nan", "null", "none"];

/// Fit one nullable column
pub fn fit_column(
    name: &str,
    values: &[Option<i64>],
    spec: &ColumnSpec,
    registry: &Registry,
) -> FitResult<ColumnModel> {
    let present: Vec<i64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return Err(FitError::EmptyInput);
    }
    let prop_missing = (values.len() - present.len()) as f64 / values.len() as f64;

    let (distribution, scores, selected) = match &spec.distribution {
        Some(family) => (registry.fit_named(family, &present)?, Vec::new(), None),
        None => {
            let selection = registry.select(&present, spec.unique)?;
            let selected = selection.selected_index();
            (selection.distribution, selection.scores, Some(selected))
        }
    };

    tracing::debug!(
        column = name,
        distribution = %distribution.summary(),
        prop_missing,
        "fitted column"
    );

    Ok(ColumnModel {
        name: name.to_string(),
        n_rows: values.len(),
        prop_missing,
        distribution,
        scores,
        selected,
    })
}

/// Fit independent columns in parallel
///
/// Results come back in input order, one per column.
pub fn fit_columns(
    columns: &[(String, Vec<Option<i64>>, ColumnSpec)],
    registry: &Registry,
) -> Vec<FitResult<ColumnModel>> {
    columns
        .par_iter()
        .map(|(name, values, spec)| fit_column(name, values, spec, registry))
        .collect()
}
