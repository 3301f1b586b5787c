//! Persisted submission lifecycle record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{Clearinghouse, DispatchStatus, SubmissionType};

/// Audit record for one submission attempt. Created once per attempt and
/// never mutated afterwards except by asynchronous acknowledgement
/// processing (outside this core). One claim may accumulate many of these
/// across corrections and re-submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub id: String,
    pub claim_id: String,
    pub clearinghouse: Clearinghouse,
    pub submission_type: SubmissionType,
    pub status: DispatchStatus,
    pub edi_file_name: String,
    /// Verbatim encoded text, retained for audit and replay.
    pub edi_content: String,
    pub acknowledgement_id: Option<String>,
    pub errors: Option<String>,
    pub created_at: DateTime<Utc>,
}
