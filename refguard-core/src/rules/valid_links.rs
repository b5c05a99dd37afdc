use super::engine::{Document, DocumentRule};
use crate::types::*;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(\s*(<[^>\n]*>|[^)\s]*)[^)]*\)").unwrap());

const EXTERNAL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// One-hop link integrity: every relative inline link must point at a file
/// that exists. Scans the raw text, so links inside code fences are checked too.
pub struct ValidLinksRule;

impl DocumentRule for ValidLinksRule {
    fn id(&self) -> RuleId {
        RuleId::ValidLinks
    }

    fn check(&self, document: &Document<'_>) -> Vec<RuleOutcome> {
        extract_link_targets(&document.content)
            .into_iter()
            .filter(|target| is_checkable(target))
            .filter(|target| target.is_empty() || !resolve_link(document, target).exists())
            .map(|target| {
                let message = if target.is_empty() {
                    "Broken link: empty target".to_string()
                } else {
                    format!("Broken link: {target}")
                };
                RuleOutcome::error(RuleId::ValidLinks, message)
            })
            .collect()
    }
}

/// Link targets in the order they appear in the text. `<...>` destinations
/// are unwrapped; an empty destination comes back as "".
pub fn extract_link_targets(text: &str) -> Vec<&str> {
    LINK_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(2))
        .map(|m| {
            let raw = m.as_str();
            raw.strip_prefix('<')
                .and_then(|inner| inner.strip_suffix('>'))
                .unwrap_or(raw)
                .trim()
        })
        .collect()
}

fn is_checkable(target: &str) -> bool {
    !target.starts_with('#') && !EXTERNAL_PREFIXES.iter().any(|p| target.starts_with(p))
}

/// Resolve a link target against the linking document's directory. A leading
/// '/' anchors at the reference root rather than the filesystem root.
pub fn resolve_link(document: &Document<'_>, target: &str) -> PathBuf {
    let path_part = target.split(['#', '?']).next().unwrap_or(target);

    match path_part.strip_prefix('/') {
        Some(rooted) => document.root.join(rooted),
        None => document.directory().join(path_part),
    }
}
