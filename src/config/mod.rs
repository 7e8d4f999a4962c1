//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::column::ColumnSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete synthesis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// RNG seed; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Rows to synthesize; defaults to the observed row count
    #[serde(default)]
    pub rows: Option<usize>,
    /// Candidate families by name; empty means every built-in family
    #[serde(default)]
    pub candidates: Vec<String>,
    /// Per-column directives, keyed by column name
    #[serde(default)]
    pub columns: BTreeMap<String, ColumnSpec>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Synthetic values shown in text reports
    #[serde(default = "default_preview")]
    pub preview: usize,
}

fn default_pretty() -> bool {
    true
}

fn default_preview() -> usize {
    20
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
            preview: default_preview(),
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl SynthConfig {
    /// Directives for one column, or the defaults
    pub fn column_spec(&self, name: &str) -> ColumnSpec {
        self.columns.get(name).cloned().unwrap_or_default()
    }
}
