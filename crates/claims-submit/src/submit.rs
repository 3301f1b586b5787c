//! Single-claim submission: validate, encode, record, transition.

use chrono::{DateTime, Utc};
use claims_assemble::assemble_single;
use claims_edi::{EdiFile, EncodeOptions, FileScope, encode_with_options, file_name};
use claims_model::{ClaimStatus, ClaimSubmission, DispatchStatus};
use claims_validate::validate;

use crate::dispatch::{ClearinghouseDispatch, DispatchOutcome, dispatcher_for};
use crate::error::{Result, SubmitError};
use crate::store::ClaimStore;
use crate::types::{SubmitRequest, SubmitResponse};

/// Statuses from which a single-claim submission may start.
const SUBMITTABLE: [ClaimStatus; 4] = [
    ClaimStatus::Draft,
    ClaimStatus::Ready,
    ClaimStatus::Rejected,
    ClaimStatus::Denied,
];

/// Submit one claim through the clearinghouse resolved from the request.
pub fn submit<S: ClaimStore>(
    store: &mut S,
    request: &SubmitRequest,
    now: DateTime<Utc>,
) -> Result<SubmitResponse> {
    let dispatcher = dispatcher_for(request.clearinghouse);
    submit_with_dispatch(store, dispatcher.as_ref(), request, now)
}

/// Submit one claim through an explicit dispatch implementation.
///
/// Ordering is load-bearing: every precondition and validation gate runs
/// before anything is recorded, so a failed attempt leaves no trace and
/// no partial state.
pub fn submit_with_dispatch<S: ClaimStore>(
    store: &mut S,
    dispatcher: &dyn ClearinghouseDispatch,
    request: &SubmitRequest,
    now: DateTime<Utc>,
) -> Result<SubmitResponse> {
    let claim = store.claim(&request.claim_id)?;
    if !claim.status.is_submittable() {
        return Err(SubmitError::NotSubmittable {
            claim_id: claim.id,
            status: claim.status,
        });
    }

    let company = store.company()?;
    let batch = assemble_single(&company, &claim)?;

    let report = validate(&batch, now.date_naive());
    if report.has_errors() {
        tracing::info!(
            claim = %claim.claim_number,
            errors = report.error_count(),
            "submission blocked by validation"
        );
        return Err(SubmitError::ValidationFailed {
            findings: report.errors(),
        });
    }

    let options = EncodeOptions::with_frequency(request.submission_type.frequency_code());
    let content = encode_with_options(&batch, &options)?;
    let file = EdiFile {
        file_name: file_name(&company.name, FileScope::Claim(&claim.claim_number)),
        content,
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

    let submission = ClaimSubmission {
        id: store.next_submission_id(),
        claim_id: claim.id.clone(),
        clearinghouse: dispatcher.clearinghouse(),
        submission_type: request.submission_type,
        status,
        edi_file_name: file.file_name,
        edi_content: file.content,
        acknowledgement_id,
        errors,
        created_at: now,
    };
    store.create_submission(submission.clone())?;

    // The claim advances only when dispatch succeeded; the compare-and-set
    // re-check guards against a concurrent attempt that won the race.
    let claim_status = if matches!(outcome, DispatchOutcome::Transmitted { .. }) {
        store.transition(&claim.id, &SUBMITTABLE, ClaimStatus::Submitted, Some(now))?;
        tracing::info!(
            claim = %claim.claim_number,
            file = %submission.edi_file_name,
            "claim submitted"
        );
        ClaimStatus::Submitted
    } else {
        tracing::warn!(
            claim = %claim.claim_number,
            clearinghouse = %submission.clearinghouse,
            "dispatch did not transmit, claim status unchanged"
        );
        claim.status
    };

    Ok(SubmitResponse {
        submission,
        claim_status,
        warnings: report.warnings(),
    })
}
