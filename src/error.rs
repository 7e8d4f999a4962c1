//! Error types for fitting and selection

use thiserror::Error;

/// Errors raised while fitting or selecting a distribution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// No observations to estimate parameters from
    #[error("cannot fit a distribution to an empty column")]
    EmptyInput,

    /// A value or parameter outside the domain a model can represent
    #[error("invalid sample: {0}")]
    InvalidSample(String),

    #[error("unknown distribution: {0}")]
    UnknownDistribution(String),

    /// Candidate filtering left nothing to compare
    #[error("no candidate distributions left to select from")]
    NoCandidates,
}

pub type FitResult<T> = Result<T, FitError>;
