//! Configuration validation

use super::*;
use crate::selection::Registry;
use anyhow::Result;

/// Validate complete configuration against the families in `registry`
pub fn validate_config(config: &SynthConfig, registry: &Registry) -> Result<()> {
    if config.rows == Some(0) {
        anyhow::bail!("rows must be at least 1");
    }

    for name in &config.candidates {
        if registry.find(name).is_none() {
            anyhow::bail!(
                "unknown candidate distribution '{}' (available: {})",
                name,
                registry.names().join(", ")
            );
        }
    }

    for (column, spec) in &config.columns {
        validate_column(column, spec, registry)?;
    }

    Ok(())
}

/// Validate one column's directives
fn validate_column(column: &str, spec: &ColumnSpec, registry: &Registry) -> Result<()> {
    let Some(ref name) = spec.distribution else {
        return Ok(());
    };

    let candidate = match registry.find(name) {
        Some(candidate) => candidate,
        None => anyhow::bail!(
            "column '{}': unknown distribution '{}' (available: {})",
            column,
            name,
            registry.names().join(", ")
        ),
    };

    if let Some(unique) = spec.unique {
        if unique != candidate.unique {
            anyhow::bail!(
                "column '{}': distribution '{}' is {}unique but the column is marked unique = {}",
                column,
                candidate.name(),
                if candidate.unique { "" } else { "not " },
                unique
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(distribution: Option<&str>, unique: Option<bool>) -> ColumnSpec {
        ColumnSpec {
            distribution: distribution.map(str::to_string),
            unique,
        }
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&SynthConfig::default(), &Registry::discrete()).is_ok());
    }

    #[test]
    fn test_validate_rows() {
        let config = SynthConfig {
            rows: Some(0),
            ..Default::default()
        };
        assert!(validate_config(&config, &Registry::discrete()).is_err());
    }

    #[test]
    fn test_validate_unknown_candidate() {
        let config = SynthConfig {
            candidates: vec!["PoissonDistribution".to_string()],
            ..Default::default()
        };
        let err = validate_config(&config, &Registry::discrete()).unwrap_err();
        assert!(err.to_string().contains("PoissonDistribution"));
    }

    #[test]
    fn test_validate_column_distribution() {
        let registry = Registry::discrete();
        let key = column(Some("UniqueKeyDistribution"), Some(true));
        assert!(validate_column("id", &key, &registry).is_ok());
        let unknown = column(Some("NormalDistribution"), None);
        assert!(validate_column("id", &unknown, &registry).is_err());
        assert!(validate_column("id", &column(None, Some(true)), &registry).is_ok());
    }

    #[test]
    fn test_validate_uniqueness_conflict() {
        let registry = Registry::discrete();
        let uniform = column(Some("DiscreteUniformDistribution"), Some(true));
        let err = validate_column("id", &uniform, &registry).unwrap_err();
        assert!(err.to_string().contains("not unique"));

        let key = column(Some("IntegerKeyDistribution"), Some(false));
        assert!(validate_column("id", &key, &registry).is_err());
    }
}
