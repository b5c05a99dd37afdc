use crate::config::ValidatorConfig;
use crate::types::*;
use std::path::{Path, PathBuf};

// Import rule types in evaluation order
use super::single_heading::SingleHeadingRule;
use super::size::SizeRule;
use super::table_first::TableFirstRule;
use super::valid_links::ValidLinksRule;

/// A loaded reference document, as seen by the rules.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Reference root every relative path is anchored at
    pub root: &'a Path,
    /// Forward-slash path relative to `root`
    pub relative_path: String,
    pub content: String,
}

impl<'a> Document<'a> {
    pub fn new(root: &'a Path, relative_path: impl Into<String>, content: String) -> Self {
        Self {
            root,
            relative_path: relative_path.into(),
            content,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }

    /// Absolute directory holding this document, used to resolve relative links
    pub fn directory(&self) -> PathBuf {
        let mut dir = self.root.to_path_buf();
        let mut segments: Vec<&str> = self.relative_path.split('/').collect();
        segments.pop();
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir
    }
}

/// One structural rule. Rules are pure over the document text; only
/// link checking touches the filesystem.
pub trait DocumentRule {
    fn id(&self) -> RuleId;

    fn check(&self, document: &Document<'_>) -> Vec<RuleOutcome>;
}

/// Runs every rule against a document, in a fixed order, and folds the
/// outcomes into a [`ValidationResult`].
pub struct RuleEngine {
    rules: Vec<Box<dyn DocumentRule + Send + Sync>>,
}

impl RuleEngine {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            rules: vec![
                Box::new(SizeRule::new(config)),
                Box::new(TableFirstRule),
                Box::new(SingleHeadingRule),
                Box::new(ValidLinksRule),
            ],
        }
    }

    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    pub fn evaluate(&self, document: &Document<'_>) -> ValidationResult {
        let mut outcomes = Vec::new();

        // Rules never short-circuit each other
        for rule in &self.rules {
            let found = rule.check(document);
            tracing::debug!(
                path = %document.relative_path,
                rule = %rule.id(),
                findings = found.len(),
                "rule evaluated"
            );
            outcomes.extend(found);
        }

        ValidationResult::from_outcomes(document.relative_path.clone(), outcomes)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_fixed() {
        let engine = RuleEngine::default();
        assert_eq!(
            engine.rule_ids(),
            vec![RuleId::Size, RuleId::TableFirst, RuleId::SingleH1, RuleId::ValidLinks]
        );
    }

    #[test]
    fn test_document_directory() {
        let root = Path::new("/refs");
        let nested = Document::new(root, "guides/setup/install.md", String::new());
        assert_eq!(nested.directory(), PathBuf::from("/refs/guides/setup"));

        let top = Document::new(root, "overview.md", String::new());
        assert_eq!(top.directory(), PathBuf::from("/refs"));
    }

    #[test]
    fn test_all_rules_run_on_empty_document() {
        let engine = RuleEngine::default();
        let doc = Document::new(Path::new("/refs"), "empty.md", String::new());
        let result = engine.evaluate(&doc);

        let rules: Vec<_> = result.errors().iter().map(|f| f.rule).collect();
        assert_eq!(rules, vec![RuleId::TableFirst, RuleId::SingleH1]);
        assert!(result.warnings().is_empty());
        assert!(!result.is_valid());
    }
}
