use crate::config::ValidatorConfig;
use crate::discovery::{DiscoveredDocument, FileDiscoverer};
use crate::error::{Result, ValidatorError};
use crate::rules::{Document, RuleEngine};
use crate::types::*;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Validates reference documents under one root. Holds no state between
/// calls: every document is re-read on every invocation.
pub struct ReferenceValidator {
    root: PathBuf,
    config: ValidatorConfig,
    rule_engine: RuleEngine,
}

impl ReferenceValidator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, ValidatorConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: ValidatorConfig) -> Self {
        let rule_engine = RuleEngine::new(&config);
        Self {
            root: root.into(),
            config,
            rule_engine,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate one document, addressed relative to the reference root.
    /// A missing or unreadable file is an error, not a finding.
    pub fn validate_file(&self, relative_path: &str) -> Result<ValidationResult> {
        let relative_path = relative_path.trim_start_matches("./");
        let absolute_path = self.root.join(relative_path);
        let content = read_document(&absolute_path)?;
        Ok(self.evaluate(relative_path, content))
    }

    /// Validate every non-excluded document under the reference root.
    pub fn validate_all(&self) -> Result<Vec<ValidationResult>> {
        tracing::info!(root = %self.root.display(), "validating all reference documents");
        let documents = FileDiscoverer::new(&self.config).discover(&self.root, &self.root)?;
        Ok(self.validate_batch(documents))
    }

    /// Validate the documents of one category. A category that doesn't exist
    /// has nothing to validate and yields an empty list. So does a name that
    /// isn't a single directory segment (`..`, `/abs`, `a/b`), since it can't
    /// name a category directly under the root.
    pub fn validate_category(&self, name: &str) -> Result<Vec<ValidationResult>> {
        if !is_category_name(name) {
            tracing::warn!(category = name, "not a category name, nothing to validate");
            return Ok(Vec::new());
        }

        let category_dir = self.root.join(name);
        if !category_dir.is_dir() {
            tracing::info!(category = name, "category not present, nothing to validate");
            return Ok(Vec::new());
        }

        tracing::info!(category = name, "validating category");
        let documents = FileDiscoverer::new(&self.config).discover(&self.root, &category_dir)?;
        Ok(self.validate_batch(documents))
    }

    // One unreadable file must not abort its siblings: it is reported as an
    // `unreadable` error on its own result.
    fn validate_batch(&self, documents: Vec<DiscoveredDocument>) -> Vec<ValidationResult> {
        documents
            .into_iter()
            .map(|doc| match read_document(&doc.absolute_path) {
                Ok(content) => self.evaluate(&doc.relative_path, content),
                Err(e) => {
                    tracing::warn!(path = %doc.relative_path, error = %e, "document unreadable");
                    ValidationResult::new(
                        doc.relative_path,
                        vec![Finding::new(RuleId::Unreadable, e.to_string())],
                        Vec::new(),
                    )
                }
            })
            .collect()
    }

    fn evaluate(&self, relative_path: &str, content: String) -> ValidationResult {
        let document = Document::new(&self.root, relative_path, content);
        let result = self.rule_engine.evaluate(&document);
        tracing::debug!(
            path = relative_path,
            valid = result.is_valid(),
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "document validated"
        );
        result
    }
}

fn is_category_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ValidatorError::Read {
        path: path.to_path_buf(),
        source,
    })
}
