//! intsynth CLI entry point

use anyhow::{Context, Result};
use intsynth::column::{fit_columns, parse_column};
use intsynth::config::cli::Cli;
use intsynth::config::{toml as config_toml, validator, OutputFormat, SynthConfig};
use intsynth::output::{json, text, ColumnReport};
use intsynth::selection::Registry;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logging; --debug wins over RUST_LOG
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli.validate()?;
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;

    let registry = Registry::discrete();
    validator::validate_config(&config, &registry).context("Configuration validation failed")?;
    let registry = if config.candidates.is_empty() {
        registry
    } else {
        registry.restricted(&config.candidates)?
    };
    tracing::debug!(candidates = ?registry.names(), "candidate families");

    let mut columns = Vec::new();
    for (name, path) in cli.sources() {
        let input = read_input(path)?;
        let values = parse_column(&input)
            .with_context(|| format!("Failed to parse column '{}'", name))?;
        let spec = config.column_spec(&name);
        columns.push((name, values, spec));
    }

    let models = fit_columns(&columns, &registry);

    // Columns draw from one stream in input order, so a seed reproduces the whole run
    let mut rng = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    let mut reports = Vec::with_capacity(models.len());
    for ((name, _, _), model) in columns.iter().zip(models) {
        let model = model.with_context(|| format!("Failed to fit column '{}'", name))?;
        let rows = config.rows.unwrap_or(model.n_rows);
        let synthetic = model.synthesize(rows, &mut rng);
        reports.push(ColumnReport::new(&model, synthetic));
    }

    let stdout = std::io::stdout().lock();
    match (config.output.format, reports.as_slice()) {
        (OutputFormat::Text, _) => {
            for report in &reports {
                text::print_report(report, config.output.preview);
            }
        }
        (OutputFormat::Json, [report]) => json::write_report(report, config.output.pretty, stdout)?,
        (OutputFormat::Json, _) => json::write_reports(&reports, config.output.pretty, stdout)?,
    }

    Ok(())
}

/// Load the TOML file (if any) and apply CLI overrides
fn build_config(cli: &Cli) -> Result<SynthConfig> {
    let config = match cli.config {
        Some(ref path) => config_toml::parse_toml_file(path)?,
        None => SynthConfig::default(),
    };
    Ok(config_toml::merge_cli_with_config(cli, config))
}

/// Read the input column from a file, or stdin for `-` / no path
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}
