//! Validation finding types.

use serde::{Deserialize, Serialize};

/// Finding severity. Errors block submission; warnings are surfaced to the
/// operator but never block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

/// One classified validation finding against a canonical batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Dotted path to the offending field, e.g. `provider.npi` or
    /// `claims[0].service_lines[2].units`.
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Dotted path for a claim-level field.
pub(crate) fn claim_field(claim_index: usize, rest: &str) -> String {
    format!("claims[{claim_index}].{rest}")
}

/// Dotted path for a service-line field.
pub(crate) fn line_field(claim_index: usize, line_index: usize, rest: &str) -> String {
    format!("claims[{claim_index}].service_lines[{line_index}].{rest}")
}
