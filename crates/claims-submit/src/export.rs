//! Multi-claim export: fail-closed gating, shared-batch validation, one
//! file, one atomic status advancement.

use chrono::{DateTime, Utc};
use claims_assemble::assemble_batch;
use claims_edi::{EdiFile, FileScope, encode, file_name};
use claims_model::{
    ClaimRecord, ClaimStatus, ClaimSubmission, Clearinghouse, DispatchStatus, SubmissionType,
};
use claims_validate::validate;

use crate::dispatch::{ClearinghouseDispatch, DispatchOutcome, GenericFileDispatch};
use crate::error::{IneligibleClaim, Result, SubmitError};
use crate::store::ClaimStore;
use crate::types::{ExportOutcome, ExportRequest, ExportResult, ExportValidation};

/// Statuses eligible for a payer export run.
const EXPORTABLE: [ClaimStatus; 2] = [ClaimStatus::Draft, ClaimStatus::Ready];

/// Export a set of claims as one shared batch file through the generic
/// file path.
pub fn export_many<S: ClaimStore>(
    store: &mut S,
    request: &ExportRequest,
    now: DateTime<Utc>,
) -> Result<ExportOutcome> {
    export_many_with_dispatch(store, &GenericFileDispatch, request, now)
}

/// Export a set of claims through an explicit dispatch implementation.
///
/// Fail-closed: any claim outside {DRAFT, READY} aborts the whole export
/// with an itemized list and zero side effects, because a partially
/// encoded multi-claim file is unsafe to send. When the batch validates
/// clean, the file is produced and dispatched, the claims advance
/// together through the store's all-or-nothing transition only when the
/// dispatch transmitted, then the submission records are written with
/// the status the dispatch actually reported.
pub fn export_many_with_dispatch<S: ClaimStore>(
    store: &mut S,
    dispatcher: &dyn ClearinghouseDispatch,
    request: &ExportRequest,
    now: DateTime<Utc>,
) -> Result<ExportOutcome> {
    if request.claim_ids.is_empty() {
        return Err(SubmitError::EmptyExport);
    }

    let mut claims = Vec::with_capacity(request.claim_ids.len());
    for claim_id in &request.claim_ids {
        claims.push(store.claim(claim_id)?);
    }

    let ineligible: Vec<IneligibleClaim> = claims
        .iter()
        .filter(|claim| !claim.status.is_exportable())
        .map(|claim| IneligibleClaim {
            claim_id: claim.id.clone(),
            claim_number: claim.claim_number.clone(),
            status: claim.status,
        })
        .collect();
    if !ineligible.is_empty() {
        return Err(SubmitError::IneligibleClaims { claims: ineligible });
    }

    let company = store.company()?;
    let batch = assemble_batch(&company, &claims, request.receiver_override.clone())?;

    // One validation pass over the whole batch.
    let report = validate(&batch, now.date_naive());

    if request.validate_only {
        return Ok(ExportOutcome::Validated(ExportValidation {
            valid: !report.has_errors(),
            errors: report.errors(),
            claim_count: claims.len(),
        }));
    }

    if report.has_errors() {
        return Err(SubmitError::ValidationFailed {
            findings: report.errors(),
        });
    }

    let file = EdiFile {
        file_name: file_name(&company.name, FileScope::Batch(claims.len())),
        content: encode(&batch)?,
    };

    let outcome = dispatcher.dispatch(&file);
    let (status, acknowledgement_id, errors) = match &outcome {
        DispatchOutcome::Transmitted { acknowledgement_id } => {
            (DispatchStatus::Transmitted, acknowledgement_id.clone(), None)
        }
        DispatchOutcome::NotSupported { clearinghouse } => (
            DispatchStatus::Pending,
            None,
            Some(format!("clearinghouse {clearinghouse} is not implemented")),
        ),
        DispatchOutcome::Failed { message } => {
            (DispatchStatus::Error, None, Some(message.clone()))
        }
    };

    if matches!(outcome, DispatchOutcome::Transmitted { .. }) {
        // Advance all statuses before recording submissions: the store
        // re-checks eligibility atomically, so a concurrent submit on any
        // claim aborts the export with nothing written.
        store.advance_all(&request.claim_ids, &EXPORTABLE, ClaimStatus::Submitted, now)?;
        tracing::info!(
            claims = claims.len(),
            file = %file.file_name,
            "export produced"
        );
    } else {
        tracing::warn!(
            claims = claims.len(),
            clearinghouse = %dispatcher.clearinghouse(),
            "dispatch did not transmit, claim statuses unchanged"
        );
    }

    let record = SubmissionRecord {
        clearinghouse: dispatcher.clearinghouse(),
        status,
        acknowledgement_id,
        errors,
    };
    let submissions = create_submissions(store, &claims, &file, &record, now)?;

    Ok(ExportOutcome::Exported(ExportResult {
        file,
        claim_count: claims.len(),
        submissions,
        warnings: report.warnings(),
    }))
}

/// Dispatch-derived fields shared by every record of one export run.
struct SubmissionRecord {
    clearinghouse: Clearinghouse,
    status: DispatchStatus,
    acknowledgement_id: Option<String>,
    errors: Option<String>,
}

/// One submission record per claim, sharing the file name and content.
fn create_submissions<S: ClaimStore>(
    store: &mut S,
    claims: &[ClaimRecord],
    file: &EdiFile,
    record: &SubmissionRecord,
    now: DateTime<Utc>,
) -> Result<Vec<ClaimSubmission>> {
    let mut submissions = Vec::with_capacity(claims.len());
    for claim in claims {
        let submission = ClaimSubmission {
            id: store.next_submission_id(),
            claim_id: claim.id.clone(),
            clearinghouse: record.clearinghouse,
            submission_type: SubmissionType::Original,
            status: record.status,
            edi_file_name: file.file_name.clone(),
            edi_content: file.content.clone(),
            acknowledgement_id: record.acknowledgement_id.clone(),
            errors: record.errors.clone(),
            created_at: now,
        };
        store.create_submission(submission.clone())?;
        submissions.push(submission);
    }
    Ok(submissions)
}
