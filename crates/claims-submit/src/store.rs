//! Claim/submission store boundary.
//!
//! The durable store is an external collaborator; this trait is the
//! lifecycle manager's view of it. Status changes go through
//! compare-and-set operations so two concurrent submission attempts on
//! the same claim cannot both succeed, and multi-claim advancement is
//! all-or-nothing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use claims_model::{ClaimRecord, ClaimStatus, ClaimSubmission, ClientRecord, CompanyRecord};
use thiserror::Error;

use claims_assemble::DraftIdentity;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("claim not found: {claim_id}")]
    ClaimNotFound { claim_id: String },

    #[error("client not found: {client_id}")]
    ClientNotFound { client_id: String },

    #[error("no company profile on record")]
    CompanyMissing,

    /// Compare-and-set miss: the claim was not in any of the expected
    /// statuses at transition time.
    #[error("claim {claim_id} is {actual}, expected one of {expected:?}")]
    StatusConflict {
        claim_id: String,
        expected: Vec<ClaimStatus>,
        actual: ClaimStatus,
    },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Lifecycle manager's view of the durable claim/submission store.
pub trait ClaimStore {
    fn company(&self) -> StoreResult<CompanyRecord>;
    fn claim(&self, claim_id: &str) -> StoreResult<ClaimRecord>;
    fn client(&self, client_id: &str) -> StoreResult<ClientRecord>;

    /// Insert a newly drafted claim.
    fn insert_claim(&mut self, claim: ClaimRecord) -> StoreResult<()>;

    /// Allocate identifiers for a new draft.
    fn allocate_identity(&mut self) -> DraftIdentity;

    /// Allocate an identifier for a new submission record.
    fn next_submission_id(&mut self) -> String;

    /// Compare-and-set status transition for one claim. Fails with
    /// [`StoreError::StatusConflict`] when the claim is not currently in
    /// one of `allowed_from`; on success also stamps `submitted_at` when
    /// provided.
    fn transition(
        &mut self,
        claim_id: &str,
        allowed_from: &[ClaimStatus],
        to: ClaimStatus,
        submitted_at: Option<DateTime<Utc>>,
    ) -> StoreResult<()>;

    /// Advance every claim or none: each claim is re-checked against
    /// `allowed_from` and no status changes unless all pass.
    fn advance_all(
        &mut self,
        claim_ids: &[String],
        allowed_from: &[ClaimStatus],
        to: ClaimStatus,
        submitted_at: DateTime<Utc>,
    ) -> StoreResult<()>;

    /// Persist one submission attempt record.
    fn create_submission(&mut self, submission: ClaimSubmission) -> StoreResult<()>;
}

/// In-memory reference store, used by the CLI (backing a JSON book of
/// record) and by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub company: Option<CompanyRecord>,
    pub clients: BTreeMap<String, ClientRecord>,
    pub claims: BTreeMap<String, ClaimRecord>,
    pub submissions: Vec<ClaimSubmission>,
    claim_seq: u64,
    submission_seq: u64,
}

impl MemoryStore {
    pub fn new(company: CompanyRecord) -> Self {
        Self {
            company: Some(company),
            ..Self::default()
        }
    }

    pub fn with_claims(mut self, claims: impl IntoIterator<Item = ClaimRecord>) -> Self {
        for claim in claims {
            self.claims.insert(claim.id.clone(), claim);
        }
        self
    }

    pub fn with_clients(mut self, clients: impl IntoIterator<Item = ClientRecord>) -> Self {
        for client in clients {
            self.clients.insert(client.id.clone(), client);
        }
        self
    }

    pub fn with_submissions(
        mut self,
        submissions: impl IntoIterator<Item = ClaimSubmission>,
    ) -> Self {
        self.submissions.extend(submissions);
        self
    }

    pub fn submissions_for(&self, claim_id: &str) -> Vec<&ClaimSubmission> {
        self.submissions
            .iter()
            .filter(|submission| submission.claim_id == claim_id)
            .collect()
    }
}

impl ClaimStore for MemoryStore {
    fn company(&self) -> StoreResult<CompanyRecord> {
        self.company.clone().ok_or(StoreError::CompanyMissing)
    }

    fn claim(&self, claim_id: &str) -> StoreResult<ClaimRecord> {
        self.claims
            .get(claim_id)
            .cloned()
            .ok_or_else(|| StoreError::ClaimNotFound {
                claim_id: claim_id.to_string(),
            })
    }

    fn client(&self, client_id: &str) -> StoreResult<ClientRecord> {
        self.clients
            .get(client_id)
            .cloned()
            .ok_or_else(|| StoreError::ClientNotFound {
                client_id: client_id.to_string(),
            })
    }

    fn insert_claim(&mut self, claim: ClaimRecord) -> StoreResult<()> {
        self.claims.insert(claim.id.clone(), claim);
        Ok(())
    }

    fn allocate_identity(&mut self) -> DraftIdentity {
        // Skip identifiers already present, for stores loaded from a book
        // of record rather than built empty.
        loop {
            self.claim_seq += 1;
            let seq = self.claim_seq;
            let claim_id = format!("claim-{seq:04}");
            if !self.claims.contains_key(&claim_id) {
                return DraftIdentity {
                    claim_id,
                    claim_number: format!("CLM-{:04}", 1000 + seq),
                };
            }
        }
    }

    fn next_submission_id(&mut self) -> String {
        loop {
            self.submission_seq += 1;
            let id = format!("SUB-{:04}", self.submission_seq);
            if !self.submissions.iter().any(|s| s.id == id) {
                return id;
            }
        }
    }

    fn transition(
        &mut self,
        claim_id: &str,
        allowed_from: &[ClaimStatus],
        to: ClaimStatus,
        submitted_at: Option<DateTime<Utc>>,
    ) -> StoreResult<()> {
        let claim = self
            .claims
            .get_mut(claim_id)
            .ok_or_else(|| StoreError::ClaimNotFound {
                claim_id: claim_id.to_string(),
            })?;
        if !allowed_from.contains(&claim.status) {
            return Err(StoreError::StatusConflict {
                claim_id: claim_id.to_string(),
                expected: allowed_from.to_vec(),
                actual: claim.status,
            });
        }
        claim.status = to;
        if submitted_at.is_some() {
            claim.submitted_at = submitted_at;
        }
        Ok(())
    }

    fn advance_all(
        &mut self,
        claim_ids: &[String],
        allowed_from: &[ClaimStatus],
        to: ClaimStatus,
        submitted_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        // Verify every claim first; mutate only once all pass.
        for claim_id in claim_ids {
            let claim = self
                .claims
                .get(claim_id)
                .ok_or_else(|| StoreError::ClaimNotFound {
                    claim_id: claim_id.clone(),
                })?;
            if !allowed_from.contains(&claim.status) {
                return Err(StoreError::StatusConflict {
                    claim_id: claim_id.clone(),
                    expected: allowed_from.to_vec(),
                    actual: claim.status,
                });
            }
        }
        for claim_id in claim_ids {
            if let Some(claim) = self.claims.get_mut(claim_id) {
                claim.status = to;
                claim.submitted_at = Some(submitted_at);
            }
        }
        Ok(())
    }

    fn create_submission(&mut self, submission: ClaimSubmission) -> StoreResult<()> {
        self.submissions.push(submission);
        Ok(())
    }
}
