use super::code_fence::strip_code_fences;
use super::engine::{Document, DocumentRule};
use crate::types::*;
use regex::Regex;
use std::sync::LazyLock;

// Exactly one '#', then a space. "## Sub" and "#tag" don't match.
static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# ").unwrap());

/// Every document carries one top-level heading naming its single topic.
pub struct SingleHeadingRule;

impl DocumentRule for SingleHeadingRule {
    fn id(&self) -> RuleId {
        RuleId::SingleH1
    }

    fn check(&self, document: &Document<'_>) -> Vec<RuleOutcome> {
        match count_top_level_headings(&document.content) {
            0 => vec![RuleOutcome::error(
                RuleId::SingleH1,
                "Document has no top-level heading; add exactly one '# Title' line",
            )],
            1 => Vec::new(),
            count => vec![RuleOutcome::error(
                RuleId::SingleH1,
                format!("Document has multiple top-level headings ({count}); keep exactly one"),
            )],
        }
    }
}

pub fn count_top_level_headings(text: &str) -> usize {
    let stripped = strip_code_fences(text);
    H1_REGEX.find_iter(&stripped).count()
}
