use super::engine::{Document, DocumentRule};
use crate::config::ValidatorConfig;
use crate::types::*;

/// Flags documents that have outgrown a single progressive-disclosure page.
pub struct SizeRule {
    warn_threshold: usize,
    error_threshold: usize,
}

impl SizeRule {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            warn_threshold: config.warn_threshold_bytes,
            error_threshold: config.error_threshold_bytes,
        }
    }
}

impl DocumentRule for SizeRule {
    fn id(&self) -> RuleId {
        RuleId::Size
    }

    fn check(&self, document: &Document<'_>) -> Vec<RuleOutcome> {
        let size = document.size_bytes();
        let size_kb = size as f64 / 1024.0;

        if size > self.error_threshold {
            vec![RuleOutcome::error(
                RuleId::Size,
                format!(
                    "Document is {:.1}KB, exceeds {} limit",
                    size_kb,
                    format_limit(self.error_threshold)
                ),
            )]
        } else if size > self.warn_threshold {
            vec![RuleOutcome::warning(
                RuleId::Size,
                format!(
                    "Document is {:.1}KB, exceeds {} target; consider splitting it",
                    size_kb,
                    format_limit(self.warn_threshold)
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

/// "3KB" for whole kilobytes, "2.5KB" otherwise
fn format_limit(bytes: usize) -> String {
    if bytes % 1024 == 0 {
        format!("{}KB", bytes / 1024)
    } else {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(len: usize) -> Vec<RuleOutcome> {
        let rule = SizeRule::new(&ValidatorConfig::default());
        let doc = Document::new(Path::new("/refs"), "doc.md", "a".repeat(len));
        rule.check(&doc)
    }

    #[test]
    fn test_small_document_passes() {
        assert!(check(0).is_empty());
        assert!(check(2048).is_empty());
    }

    #[test]
    fn test_warning_band() {
        for len in [2049, 2500, 3072] {
            let outcomes = check(len);
            assert_eq!(outcomes.len(), 1, "len {len}");
            assert_eq!(outcomes[0].severity, Severity::Warning);
            assert!(outcomes[0].finding.message.contains("2KB"));
        }
    }

    #[test]
    fn test_error_above_limit() {
        let outcomes = check(3073);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].severity, Severity::Error);
        assert!(outcomes[0].finding.message.contains("3KB"));
        assert!(outcomes[0].finding.message.contains("3.0KB"));
    }

    #[test]
    fn test_size_is_measured_in_bytes() {
        // 1025 three-byte characters
        let rule = SizeRule::new(&ValidatorConfig::default());
        let doc = Document::new(Path::new("/refs"), "doc.md", "€".repeat(1025));
        let outcomes = rule.check(&doc);
        assert_eq!(outcomes[0].severity, Severity::Error);
    }

    #[test]
    fn test_format_limit() {
        assert_eq!(format_limit(3072), "3KB");
        assert_eq!(format_limit(2560), "2.5KB");
    }
}
