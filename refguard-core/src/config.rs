use crate::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Byte size above which a document draws a split warning
pub const WARN_THRESHOLD_BYTES: usize = 2048;
/// Byte size above which a document is rejected
pub const ERROR_THRESHOLD_BYTES: usize = 3072;
/// Prose-only, navigational, or generated files exempt from every rule
pub const EXCLUDED_FILES: [&str; 3] = ["README.md", "index.md", "releases.md"];
pub const DOCUMENT_EXTENSION: &str = "md";

// Default value functions for serde
fn default_warn_threshold() -> usize {
    WARN_THRESHOLD_BYTES
}

fn default_error_threshold() -> usize {
    ERROR_THRESHOLD_BYTES
}

fn default_excluded_files() -> Vec<String> {
    EXCLUDED_FILES.iter().map(|name| name.to_string()).collect()
}

fn default_document_extension() -> String {
    DOCUMENT_EXTENSION.to_string()
}

/// Settings owned by one validator instance. Two validators with different
/// configs never see each other's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Documents strictly larger than this get a `size` warning
    #[serde(default = "default_warn_threshold")]
    pub warn_threshold_bytes: usize,

    /// Documents strictly larger than this get a `size` error
    #[serde(default = "default_error_threshold")]
    pub error_threshold_bytes: usize,

    /// File names (not paths) skipped by batch scopes
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,

    /// Extension, without the dot, that marks a file as a reference document
    #[serde(default = "default_document_extension")]
    pub document_extension: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            warn_threshold_bytes: WARN_THRESHOLD_BYTES,
            error_threshold_bytes: ERROR_THRESHOLD_BYTES,
            excluded_files: default_excluded_files(),
            document_extension: default_document_extension(),
        }
    }
}

impl ValidatorConfig {
    /// Load config from a YAML file. Fields missing from the file keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ValidatorError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ValidatorError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!("{e}; using default config");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_files.iter().any(|name| name == file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = ValidatorConfig::default();
        assert_eq!(config.warn_threshold_bytes, 2048);
        assert_eq!(config.error_threshold_bytes, 3072);
        assert!(config.is_excluded("README.md"));
        assert!(config.is_excluded("index.md"));
        assert!(config.is_excluded("releases.md"));
        assert!(!config.is_excluded("readme.md"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ValidatorConfig = serde_yaml::from_str("warn_threshold_bytes: 1000\n").unwrap();
        assert_eq!(config.warn_threshold_bytes, 1000);
        assert_eq!(config.error_threshold_bytes, ERROR_THRESHOLD_BYTES);
        assert_eq!(config.excluded_files.len(), 3);
        assert_eq!(config.document_extension, "md");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = ValidatorConfig::load_with_fallback(Some(Path::new("/nonexistent/refguard.yaml")));
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_load_from_file_reports_missing_path() {
        let err = ValidatorConfig::load_from_file(Path::new("/nonexistent/refguard.yaml")).unwrap_err();
        assert!(matches!(err, ValidatorError::Config { .. }));
    }
}
