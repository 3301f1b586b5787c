//! Request and response shapes for the lifecycle operations.

use claims_edi::EdiFile;
use claims_model::{ClaimStatus, ClaimSubmission, Clearinghouse, Money, Receiver, SubmissionType};
use claims_validate::Finding;
use serde::{Deserialize, Serialize};

/// Single-claim submission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub claim_id: String,
    pub clearinghouse: Clearinghouse,
    #[serde(default)]
    pub submission_type: SubmissionType,
}

/// Outcome of a single-claim submission attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub submission: ClaimSubmission,
    /// Claim status after the attempt; advanced to SUBMITTED only when
    /// the dispatch path did not itself report an error.
    pub claim_status: ClaimStatus,
    /// Advisory findings, surfaced but never blocking.
    pub warnings: Vec<Finding>,
}

/// Multi-claim export request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub claim_ids: Vec<String>,
    #[serde(default)]
    pub receiver_override: Option<Receiver>,
    #[serde(default)]
    pub validate_only: bool,
}

/// Export result: a validation-only summary or the produced file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExportOutcome {
    Validated(ExportValidation),
    Exported(ExportResult),
}

/// `validate_only` response: no side effects were performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportValidation {
    pub valid: bool,
    pub errors: Vec<Finding>,
    pub claim_count: usize,
}

/// A produced export: one shared file, one submission record per claim,
/// all statuses advanced together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    pub file: EdiFile,
    pub submissions: Vec<ClaimSubmission>,
    pub claim_count: usize,
    pub warnings: Vec<Finding>,
}

/// One claim created by the generation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedClaim {
    pub claim_id: String,
    pub claim_number: String,
    pub client_id: String,
    pub total_amount: Money,
    pub line_count: usize,
}

/// One client skipped by the generation step, with the recorded reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedClient {
    pub client_id: String,
    pub reason: String,
}

/// Best-effort generation report: creation continues past skipped
/// clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateReport {
    pub created: Vec<CreatedClaim>,
    pub skipped: Vec<SkippedClient>,
}
