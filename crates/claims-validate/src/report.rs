//! Aggregated validation report.

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, Severity};

/// All findings from one validation pass over a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    /// A batch is submission-eligible iff it has zero error findings.
    /// Warnings never block.
    pub fn can_submit(&self) -> bool {
        !self.has_errors()
    }

    pub fn errors(&self) -> Vec<Finding> {
        self.findings
            .iter()
            .filter(|f| f.is_error())
            .cloned()
            .collect()
    }

    pub fn warnings(&self) -> Vec<Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .cloned()
            .collect()
    }
}
