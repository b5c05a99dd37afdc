use crate::error::{Result, ValidatorError};
use crate::types::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Totals over one validation run, with the per-document results kept in
/// discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub documents: usize,
    pub valid: usize,
    pub invalid: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let valid = results.iter().filter(|r| r.is_valid()).count();

        Self {
            documents: results.len(),
            valid,
            invalid: results.len() - valid,
            total_errors: results.iter().map(|r| r.errors().len()).sum(),
            total_warnings: results.iter().map(|r| r.warnings().len()).sum(),
            results,
        }
    }

    pub fn is_success(&self) -> bool {
        self.invalid == 0
    }

    /// Human-readable report. Clean documents are left out; every finding on
    /// the rest is listed with its rule id.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for result in &self.results {
            if result.errors().is_empty() && result.warnings().is_empty() {
                continue;
            }

            let marker = if result.is_valid() { "⚠️ " } else { "❌" };
            out.push_str(&format!("{marker} {}\n", result.path()));
            for error in result.errors() {
                out.push_str(&format!("   error   [{}] {}\n", error.rule, error.message));
            }
            for warning in result.warnings() {
                out.push_str(&format!("   warning [{}] {}\n", warning.rule, warning.message));
            }
        }

        out.push_str("\n📊 Validation Summary:\n");
        out.push_str(&format!("   - Documents: {}\n", self.documents));
        out.push_str(&format!("   - Valid: {}\n", self.valid));
        out.push_str(&format!("   - Invalid: {}\n", self.invalid));
        out.push_str(&format!("   - Errors: {}\n", self.total_errors));
        out.push_str(&format!("   - Warnings: {}\n", self.total_warnings));
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_with_format(&self, path: &Path, format: &str) -> Result<()> {
        let body = match format {
            "json" => self.to_json()?,
            _ => self.render_text(),
        };
        fs::write(path, body).map_err(|source| ValidatorError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
