//! intsynth - discrete model selection for synthetic data
//!
//! intsynth fits candidate probability models to an observed column of integers,
//! keeps the one with the lowest Akaike information criterion, and draws
//! synthetic values from it that follow the column's shape without copying it.
//!
//! # Architecture
//!
//! - **Distributions**: discrete uniform and integer key (surrogate ID) models
//! - **Selection**: fit every registered family, keep the lowest criterion
//! - **Columns**: missing-value handling and parallel fitting of many columns
//! - **Config/output**: TOML + CLI configuration, text and JSON reports
//!
//! # Example
//!
//! ```
//! use intsynth::distribution::Synthesizer;
//! use intsynth::selection::Registry;
//!
//! let selection = Registry::discrete().select(&[7, 8, 9, 10], None).unwrap();
//! let mut synth = Synthesizer::with_seed(selection.distribution.as_ref(), 1);
//! assert_eq!(synth.column(3), vec![7, 8, 9]);
//! ```

pub mod column;
pub mod config;
pub mod distribution;
pub mod error;
pub mod output;
pub mod selection;

// Re-export commonly used types
pub use distribution::{Distribution, Synthesizer};
pub use error::{FitError, FitResult};
pub use selection::{Registry, Selection};

/// Result type used by the binary and config layers
pub type Result<T> = anyhow::Result<T>;
