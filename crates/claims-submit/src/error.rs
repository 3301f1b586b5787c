//! Unified error type for lifecycle operations.
//!
//! Everything crosses the component boundary as a typed result, never an
//! opaque panic. Preconditions fail before any work; validation failures
//! carry the full finding list; dispatch problems land on the submission
//! record, not here.

use claims_model::ClaimStatus;
use claims_validate::Finding;
use thiserror::Error;

use crate::store::StoreError;

/// One claim blocking a fail-closed export, itemized for the operator.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IneligibleClaim {
    pub claim_id: String,
    pub claim_number: String,
    pub status: ClaimStatus,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// Claim is not in a status that permits this submission attempt.
    #[error("claim {claim_id} is {status} and cannot be submitted")]
    NotSubmittable {
        claim_id: String,
        status: ClaimStatus,
    },

    /// Blocking findings; nothing was encoded, recorded, or transitioned.
    #[error("validation failed with {} error(s)", findings.len())]
    ValidationFailed { findings: Vec<Finding> },

    /// Fail-closed export: a partially encoded multi-claim file is unsafe
    /// to send, so one bad claim aborts the whole run.
    #[error("export aborted: {} claim(s) not in an exportable status", claims.len())]
    IneligibleClaims { claims: Vec<IneligibleClaim> },

    /// Export called with no claim identifiers.
    #[error("no claims requested for export")]
    EmptyExport,

    /// Batch assembly failed (incomplete provider profile and the like).
    #[error(transparent)]
    Assemble(#[from] claims_assemble::AssembleError),

    /// Encoding fault, fatal for this call only.
    #[error(transparent)]
    Encode(#[from] claims_edi::EdiError),

    /// Record store failure (not found, status conflict).
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// True for precondition failures: reported immediately, no partial
    /// work performed, no submission record created.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SubmitError::NotSubmittable { .. }
                | SubmitError::IneligibleClaims { .. }
                | SubmitError::EmptyExport
                | SubmitError::Assemble(_)
                | SubmitError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;
