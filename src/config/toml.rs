//! TOML configuration file parsing

use super::*;
use crate::config::cli::{Cli, OutputFormat as CliOutputFormat};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<SynthConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<SynthConfig> {
    let config: SynthConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: SynthConfig) -> SynthConfig {
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(rows) = cli.rows {
        config.rows = Some(rows);
    }
    if !cli.candidates.is_empty() {
        config.candidates = cli.candidates.iter().map(|c| c.trim().to_string()).collect();
    }

    // Column directives apply to every input column
    let unique = cli.unique();
    if cli.distribution.is_some() || unique.is_some() {
        for name in cli.column_names() {
            let spec = config.columns.entry(name).or_default();
            if let Some(ref distribution) = cli.distribution {
                spec.distribution = Some(distribution.clone());
            }
            if unique.is_some() {
                spec.unique = unique;
            }
        }
    }

    // Output
    if let Some(format) = cli.format {
        config.output.format = match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        };
    }
    if cli.compact {
        config.output.pretty = false;
    }

    config
}
