// Refguard Core Library
//
// Structural validation for progressive-disclosure reference documentation.
// Scopes discover documents, the rule engine checks each one, and results
// come back as plain data for a reporting layer to render.

pub mod config;
pub mod discovery;
pub mod error;
pub mod report;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export main types and functions for easy use
pub use config::ValidatorConfig;
pub use error::{Result, ValidatorError};
pub use report::ValidationReport;
pub use types::*;
pub use validator::ReferenceValidator;
