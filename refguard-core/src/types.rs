use serde::{Deserialize, Serialize};
use std::fmt;

// ===== RULE IDENTIFIERS =====
// These strings are keyed on by tooling and tests. Never rename them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "table-first")]
    TableFirst,
    #[serde(rename = "single-h1")]
    SingleH1,
    #[serde(rename = "valid-links")]
    ValidLinks,
    /// Only produced by batch scopes when a discovered document cannot be read
    #[serde(rename = "unreadable")]
    Unreadable,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Size => "size",
            RuleId::TableFirst => "table-first",
            RuleId::SingleH1 => "single-h1",
            RuleId::ValidLinks => "valid-links",
            RuleId::Unreadable => "unreadable",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One rule violation or caution. Severity is carried by the list the
/// finding lands in on a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub message: String,
}

impl Finding {
    pub fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// A finding as produced by a rule, before it is sorted into the error or
/// warning list of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub severity: Severity,
    pub finding: Finding,
}

impl RuleOutcome {
    pub fn error(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            finding: Finding::new(rule, message),
        }
    }

    pub fn warning(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            finding: Finding::new(rule, message),
        }
    }
}

/// Per-document verdict. Fields are private so `valid` can never drift
/// from the error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    path: String,
    valid: bool,
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(path: impl Into<String>, errors: Vec<Finding>, warnings: Vec<Finding>) -> Self {
        Self {
            path: path.into(),
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Split rule outcomes into errors and warnings, keeping the order in
    /// which the rules produced them.
    pub fn from_outcomes(path: impl Into<String>, outcomes: Vec<RuleOutcome>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = outcomes
            .into_iter()
            .partition(|outcome| outcome.severity == Severity::Error);

        Self::new(
            path,
            errors.into_iter().map(|o| o.finding).collect(),
            warnings.into_iter().map(|o| o.finding).collect(),
        )
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn has_error(&self, rule: RuleId) -> bool {
        self.errors.iter().any(|f| f.rule == rule)
    }

    pub fn has_warning(&self, rule: RuleId) -> bool {
        self.warnings.iter().any(|f| f.rule == rule)
    }
}
