//! Structured errors for API consumers
//!
//! Errors that cross the facade boundary are values carrying a
//! machine-readable code alongside the human-readable message, so a
//! client can branch without string matching.

use serde::{Deserialize, Serialize};

use crate::MeasureError;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const STORE_ERROR: &str = "STORE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Computation continued with a degraded result
    Warning,
    /// The request failed
    Error,
    /// The process is misconfigured
    Fatal,
}

/// Structured catalog error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl CatalogError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Check the value format")
    }

    pub fn validation_error(details: impl Into<String>) -> Self {
        Self::new(
            codes::VALIDATION_ERROR,
            format!("Invalid value: {}", details.into()),
        )
    }

    pub fn store_error(details: impl Into<String>) -> Self {
        Self::new(codes::STORE_ERROR, format!("Store error: {}", details.into()))
            .with_suggestion("Retry the query")
    }

    pub fn config_error(details: impl Into<String>) -> Self {
        Self::new(
            codes::CONFIG_ERROR,
            format!("Configuration error: {}", details.into()),
        )
        .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for CatalogError {}

impl From<MeasureError> for CatalogError {
    fn from(err: MeasureError) -> Self {
        match err {
            MeasureError::InvalidNumber(_) => Self::parse_error(err.to_string()),
            _ => Self::validation_error(err.to_string()),
        }
    }
}
