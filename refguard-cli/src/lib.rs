// All validation logic is in refguard-core
// This CLI acts as a thin wrapper around the core library

use anyhow::{Context, Result};
use refguard_core::{ReferenceValidator, ValidationReport, ValidatorConfig};
use std::fmt;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Which documents a run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Category(String),
    File(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(f, "all documents"),
            Scope::Category(name) => write!(f, "category '{name}'"),
            Scope::File(path) => write!(f, "{path}"),
        }
    }
}

/// An explicit `--config` must load; without one the defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<ValidatorConfig> {
    match path {
        Some(path) => ValidatorConfig::load_from_file(path)
            .with_context(|| format!("could not load config {}", path.display())),
        None => Ok(ValidatorConfig::default()),
    }
}

/// Run one scope and fold its results into a report. Operational failures
/// come back as errors with the scope attached.
pub fn run_validation(validator: &ReferenceValidator, scope: &Scope) -> Result<ValidationReport> {
    let results = match scope {
        Scope::All => validator.validate_all(),
        Scope::Category(name) => validator.validate_category(name),
        Scope::File(path) => validator.validate_file(path).map(|result| vec![result]),
    }
    .with_context(|| format!("could not validate {scope}"))?;

    Ok(ValidationReport::from_results(results))
}

/// Logs go to stderr so a JSON report on stdout stays parseable.
/// `RUST_LOG` wins over `--verbose` when set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GOOD_DOC: &str = "# Good\n\n| a | b |\n|---|---|\n";

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::All.to_string(), "all documents");
        assert_eq!(Scope::Category("api".into()).to_string(), "category 'api'");
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.error_threshold_bytes, ValidatorConfig::default().error_threshold_bytes);
    }

    #[test]
    fn test_load_config_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_load_config_invalid_yaml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "warn_threshold_bytes: [not, a, number]").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refguard.yaml");
        fs::write(&path, "warn_threshold_bytes: 100\nerror_threshold_bytes: 200\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.warn_threshold_bytes, 100);
        assert_eq!(config.error_threshold_bytes, 200);
    }

    #[test]
    fn test_run_validation_all() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.md"), GOOD_DOC).unwrap();
        fs::write(dir.path().join("bad.md"), "prose").unwrap();

        let validator = ReferenceValidator::new(dir.path());
        let report = run_validation(&validator, &Scope::All).unwrap();

        assert_eq!(report.documents, 2);
        assert_eq!(report.invalid, 1);
        assert!(!report.is_success());
    }

    #[test]
    fn test_run_validation_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let validator = ReferenceValidator::new(dir.path());
        let err = run_validation(&validator, &Scope::File("absent.md".into())).unwrap_err();
        assert!(err.to_string().contains("absent.md"));
    }

    #[test]
    fn test_run_validation_missing_category_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let validator = ReferenceValidator::new(dir.path());
        let report = run_validation(&validator, &Scope::Category("nope".into())).unwrap();
        assert!(report.is_success());
        assert_eq!(report.documents, 0);
    }
}
