//! Response shape for the validate operation.

use claims_model::{ClaimRecord, ClaimStatus, Money};
use serde::{Deserialize, Serialize};

use crate::finding::Finding;
use crate::report::ValidationReport;

/// Compact echo of the claim under validation, for UI correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimEcho {
    pub id: String,
    pub claim_number: String,
    pub status: ClaimStatus,
    pub total_amount: Money,
    pub line_count: usize,
}

impl ClaimEcho {
    pub fn from_record(claim: &ClaimRecord) -> Self {
        Self {
            id: claim.id.clone(),
            claim_number: claim.claim_number.clone(),
            status: claim.status,
            total_amount: claim.total_amount,
            line_count: claim.lines.len(),
        }
    }
}

/// Full error/warning breakdown returned by the validate operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub can_submit: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub claim: ClaimEcho,
}

impl ValidationResponse {
    pub fn new(report: &ValidationReport, claim: ClaimEcho) -> Self {
        Self {
            valid: !report.has_errors(),
            can_submit: report.can_submit(),
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            errors: report.errors(),
            warnings: report.warnings(),
            claim,
        }
    }
}
