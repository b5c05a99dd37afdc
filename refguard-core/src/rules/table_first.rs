use super::engine::{Document, DocumentRule};
use crate::types::*;

// TableFirstRule - reference pages lead with tabular data, so at least one
// header/separator pair must exist somewhere in the body
pub struct TableFirstRule;

impl DocumentRule for TableFirstRule {
    fn id(&self) -> RuleId {
        RuleId::TableFirst
    }

    fn check(&self, document: &Document<'_>) -> Vec<RuleOutcome> {
        if contains_table(&document.content) {
            Vec::new()
        } else {
            vec![RuleOutcome::error(
                RuleId::TableFirst,
                "No Markdown table found; reference documents must present their content as a table",
            )]
        }
    }
}

/// True when some pipe-delimited line is followed, after optional blank
/// lines, by a separator row.
pub fn contains_table(text: &str) -> bool {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if !is_header_row(line) {
            continue;
        }

        let next = lines[i + 1..].iter().find(|l| !l.trim().is_empty());
        if next.is_some_and(|l| is_separator_row(l)) {
            return true;
        }
    }

    false
}

fn is_header_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('|') && !is_separator_row(trimmed)
}

/// `|---|:---:|` style row: only dashes, colons, pipes and whitespace
fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.contains('|')
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_table() {
        let text = "# Title\n\n| Key | Value |\n|-----|-------|\n| a | b |\n";
        assert!(contains_table(text));
    }

    #[test]
    fn test_aligned_separator_after_blank_lines() {
        let text = "| Option | Default |\n\n\n| :--- | ---: |\n";
        assert!(contains_table(text));
    }

    #[test]
    fn test_table_anywhere_in_body() {
        let text = "# Title\n\nIntro prose.\n\nMore prose.\n\n| A | B |\n|---|---|\n";
        assert!(contains_table(text));
    }

    #[test]
    fn test_no_table() {
        assert!(!contains_table("# Title\n\nJust prose with a | pipe.\n"));
        assert!(!contains_table(""));
    }

    #[test]
    fn test_separator_must_follow_header() {
        // Separator with prose in between does not count
        let text = "| A | B |\nprose\n|---|---|\n";
        assert!(!contains_table(text));
    }

    #[test]
    fn test_separator_rejects_other_characters() {
        assert!(is_separator_row("| --- | :-: |"));
        assert!(!is_separator_row("| --- | x |"));
        assert!(!is_separator_row("---"));
    }

    #[test]
    fn test_rule_reports_error() {
        let doc = Document::new(std::path::Path::new("/refs"), "a.md", "# Title\n".to_string());
        let outcomes = TableFirstRule.check(&doc);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].finding.rule, RuleId::TableFirst);
        assert_eq!(outcomes[0].severity, Severity::Error);
    }
}
