//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// intsynth - fit a discrete model to an integer column and synthesize a replacement
#[derive(Parser, Debug)]
#[command(name = "intsynth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input files with one integer per line (blank, NA or null lines are missing).
    /// Reads stdin when absent or "-". Several files are fitted in parallel,
    /// each as a column named after its file stem.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long, env = "INTSYNTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Column name used for reports and per-column directives (single input)
    #[arg(long, default_value = "column")]
    pub column: String,

    /// Number of synthetic rows (defaults to the input row count)
    #[arg(short = 'n', long)]
    pub rows: Option<usize>,

    /// RNG seed for reproducible output
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Only consider families that generate distinct values
    #[arg(long, conflicts_with = "not_unique")]
    pub unique: bool,

    /// Only consider families that may repeat values
    #[arg(long)]
    pub not_unique: bool,

    /// Force a distribution family by name instead of selecting one
    #[arg(short = 'd', long)]
    pub distribution: Option<String>,

    /// Comma-separated candidate families (default: all)
    #[arg(long, value_delimiter = ',')]
    pub candidates: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output
    #[arg(long)]
    pub compact: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Uniqueness restriction requested on the command line
    pub fn unique(&self) -> Option<bool> {
        if self.unique {
            Some(true)
        } else if self.not_unique {
            Some(false)
        } else {
            None
        }
    }

    /// Column name and source of each input; `None` reads stdin
    pub fn sources(&self) -> Vec<(String, Option<&Path>)> {
        match self.inputs.as_slice() {
            [] => vec![(self.column.clone(), None)],
            [path] => vec![(self.column.clone(), Some(path.as_path()))],
            paths => paths
                .iter()
                .map(|path| (column_name(path), Some(path.as_path())))
                .collect(),
        }
    }

    /// Column names, in input order
    pub fn column_names(&self) -> Vec<String> {
        self.sources().into_iter().map(|(name, _)| name).collect()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.rows == Some(0) {
            anyhow::bail!("rows must be at least 1");
        }

        if self.column.trim().is_empty() {
            anyhow::bail!("column name must not be empty");
        }

        if self.candidates.iter().any(|c| c.trim().is_empty()) {
            anyhow::bail!("candidates must not contain empty names");
        }

        if self.inputs.len() > 1 {
            if self.inputs.iter().any(|path| path == Path::new("-")) {
                anyhow::bail!("stdin ('-') can only be read as a single input");
            }
            let mut seen = BTreeSet::new();
            for name in self.column_names() {
                if !seen.insert(name.clone()) {
                    anyhow::bail!("two inputs map to the same column name '{}'", name);
                }
            }
        }

        Ok(())
    }
}

/// Column name for one of several input files
fn column_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["intsynth"]).unwrap();
        assert!(cli.inputs.is_empty());
        assert_eq!(cli.sources(), vec![("column".to_string(), None)]);
        assert_eq!(cli.column, "column");
        assert_eq!(cli.unique(), None);
        assert!(cli.candidates.is_empty());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::try_parse_from([
            "intsynth",
            "ids.txt",
            "--column",
            "id",
            "--rows",
            "10",
            "--seed",
            "7",
            "--unique",
            "--candidates",
            "IntegerKeyDistribution,DiscreteUniformDistribution",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.inputs, vec![PathBuf::from("ids.txt")]);
        assert_eq!(cli.column_names(), vec!["id".to_string()]);
        assert_eq!(cli.rows, Some(10));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.unique(), Some(true));
        assert_eq!(cli.candidates.len(), 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unique_flags_conflict() {
        assert!(Cli::try_parse_from(["intsynth", "--unique", "--not-unique"]).is_err());
    }

    #[test]
    fn test_several_inputs_named_by_stem() {
        let args = ["intsynth", "data/id.txt", "data/age.csv", "score"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.validate().is_ok());
        assert_eq!(cli.column_names(), vec!["id", "age", "score"]);

        let sources = cli.sources();
        assert_eq!(sources[1].1, Some(Path::new("data/age.csv")));
    }

    #[test]
    fn test_several_inputs_validation() {
        let cli = Cli::try_parse_from(["intsynth", "a.txt", "-"]).unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["intsynth", "one/id.txt", "two/id.txt"]).unwrap();
        let err = cli.validate().unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_validate_rows() {
        let cli = Cli::try_parse_from(["intsynth", "--rows", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }
}
