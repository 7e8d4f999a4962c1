//! Model selection
//!
//! Fits every registered candidate family to a column and keeps the one with the
//! lowest information criterion. Selection only talks to the [`Distribution`]
//! trait, so adding a family means registering a [`Candidate`], nothing more.
//!
//! # Example
//!
//! ```
//! use intsynth::selection::Registry;
//!
//! let registry = Registry::discrete();
//! let selection = registry.select(&[1, 2, 3, 4, 5], None).unwrap();
//! assert_eq!(selection.distribution.name(), "IntegerKeyDistribution");
//! ```

use crate::distribution::key::IntegerKeyDistribution;
use crate::distribution::uniform::DiscreteUniformDistribution;
use crate::distribution::Distribution;
use crate::error::{FitError, FitResult};
use serde::Serialize;
use std::fmt;

/// Fit function producing a boxed model
pub type FitFn = fn(&[i64]) -> FitResult<Box<dyn Distribution>>;

/// A distribution family that can take part in selection
#[derive(Clone, Copy)]
pub struct Candidate {
    /// Names the family answers to; the first one is canonical
    pub aliases: &'static [&'static str],
    /// Whether fitted models only generate distinct values
    pub unique: bool,
    pub fit: FitFn,
}

impl Candidate {
    pub fn name(&self) -> &'static str {
        self.aliases[0]
    }

    /// Case-insensitive match against any alias
    pub fn is_named(&self, name: &str) -> bool {
        self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn discrete_uniform() -> Self {
        Self {
            aliases: DiscreteUniformDistribution::ALIASES,
            unique: false,
            fit: fit_uniform,
        }
    }

    pub fn integer_key() -> Self {
        Self {
            aliases: IntegerKeyDistribution::ALIASES,
            unique: true,
            fit: fit_integer_key,
        }
    }
}

fn fit_uniform(values: &[i64]) -> FitResult<Box<dyn Distribution>> {
    Ok(Box::new(DiscreteUniformDistribution::fit(values)?))
}

fn fit_integer_key(values: &[i64]) -> FitResult<Box<dyn Distribution>> {
    Ok(Box::new(IntegerKeyDistribution::fit(values)?))
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name())
            .field("unique", &self.unique)
            .finish()
    }
}

/// Score of one candidate on one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    pub name: String,
    pub criterion: f64,
}

/// Outcome of a selection: the winner plus every score that was compared
#[derive(Debug)]
pub struct Selection {
    pub distribution: Box<dyn Distribution>,
    pub scores: Vec<CandidateScore>,
    selected: usize,
}

impl Selection {
    /// Position of the selected model in `scores`
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Criterion of the selected model
    pub fn criterion(&self) -> f64 {
        self.scores[self.selected].criterion
    }
}

/// Ordered set of candidate families
///
/// Registration order breaks ties: the earliest candidate wins.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    candidates: Vec<Candidate>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in discrete family
    pub fn discrete() -> Self {
        let mut registry = Self::new();
        registry.register(Candidate::discrete_uniform());
        registry.register(Candidate::integer_key());
        registry
    }

    pub fn register(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.candidates.iter().map(Candidate::name).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.is_named(name))
    }

    /// Keep only the named candidates, in registration order
    pub fn restricted(&self, names: &[String]) -> FitResult<Self> {
        for name in names {
            if self.find(name).is_none() {
                return Err(FitError::UnknownDistribution(name.clone()));
            }
        }
        Ok(Self {
            candidates: self
                .candidates
                .iter()
                .filter(|c| names.iter().any(|name| c.is_named(name)))
                .copied()
                .collect(),
        })
    }

    /// Fit one named family without comparing
    pub fn fit_named(&self, name: &str, values: &[i64]) -> FitResult<Box<dyn Distribution>> {
        let candidate = self
            .find(name)
            .ok_or_else(|| FitError::UnknownDistribution(name.to_string()))?;
        (candidate.fit)(values)
    }

    /// Fit every candidate and keep the lowest criterion
    ///
    /// `unique` restricts the comparison: `Some(true)` keeps only families that
    /// generate distinct values, `Some(false)` drops them, `None` keeps all.
    ///
    /// A candidate that cannot be fitted is logged and left out of the
    /// comparison. Its error is returned only if no candidate could be fitted.
    pub fn select(&self, values: &[i64], unique: Option<bool>) -> FitResult<Selection> {
        if values.is_empty() {
            return Err(FitError::EmptyInput);
        }

        let mut best: Option<(Box<dyn Distribution>, f64, usize)> = None;
        let mut scores = Vec::new();
        let mut first_error = None;

        for candidate in &self.candidates {
            if unique.is_some_and(|u| u != candidate.unique) {
                continue;
            }

            let dist = match (candidate.fit)(values) {
                Ok(dist) => dist,
                Err(e) => {
                    tracing::warn!(candidate = candidate.name(), error = %e, "skipping candidate");
                    first_error.get_or_insert(e);
                    continue;
                }
            };
            let criterion = dist.information_criterion(values);
            tracing::debug!(candidate = candidate.name(), criterion, "scored candidate");
            scores.push(CandidateScore {
                name: dist.name().to_string(),
                criterion,
            });

            // Strict comparison keeps the earlier candidate on ties
            let better = match &best {
                None => true,
                Some((_, best_criterion, _)) => criterion < *best_criterion,
            };
            if better {
                best = Some((dist, criterion, scores.len() - 1));
            }
        }

        let (distribution, criterion, selected) = match best {
            Some(best) => best,
            None => return Err(first_error.unwrap_or(FitError::NoCandidates)),
        };
        tracing::debug!(selected = distribution.name(), criterion, "selected distribution");

        if unique.is_none() && !distribution.is_unique() && all_distinct(values) {
            tracing::warn!(
                selected = distribution.name(),
                "all values are distinct; the column may be a key, consider marking it unique"
            );
        }

        Ok(Selection {
            distribution,
            scores,
            selected,
        })
    }
}

fn all_distinct(values: &[i64]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[0] != w[1])
}
