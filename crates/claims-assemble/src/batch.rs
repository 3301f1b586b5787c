//! Snapshot-phase assembly: stored claim records to canonical structures.
//!
//! Everything here reads the claim's stored snapshot fields. The live
//! client record is never consulted for an already-created claim, so a
//! claim's EDI content stays reproducible after the client profile
//! changes. Drafting new claims from live records is the separate
//! [`draft`](crate::draft) phase.

use claims_model::{
    AuthorizationSnapshot, CanonicalBatch, CanonicalClaim, CanonicalServiceLine, ClaimRecord,
    CompanyRecord, PatientSnapshot, Receiver,
};

use crate::error::{AssembleError, Result};
use crate::provider::{billing_provider, submitter};

/// Map one stored claim to its canonical form, reading snapshot fields
/// only.
pub fn assemble_from_snapshot(claim: &ClaimRecord) -> CanonicalClaim {
    let service_lines = claim
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| CanonicalServiceLine {
            // Line numbers are normalized to stored order; diagnosis
            // pointers are copied verbatim from the stored line.
            line_number: (index + 1) as u32,
            service_date: line.service_date,
            hcpcs_code: line.hcpcs_code.clone(),
            modifiers: line.modifiers.clone(),
            units: line.units,
            unit_rate: line.unit_rate,
            line_amount: line.line_amount,
            diagnosis_pointers: line.diagnosis_pointers.clone(),
        })
        .collect();

    // An authorization exists only when a number is on file; bare date
    // fields without a number are meaningless to a payer.
    let authorization = claim
        .authorization_number
        .as_ref()
        .filter(|number| !number.trim().is_empty())
        .map(|number| AuthorizationSnapshot {
            number: number.clone(),
            start_date: claim.authorization_start,
            end_date: claim.authorization_end,
        });

    CanonicalClaim {
        claim_number: claim.claim_number.clone(),
        service_start: claim.service_start,
        service_end: claim.service_end,
        patient: PatientSnapshot {
            medicaid_id: claim.patient_medicaid_id.clone(),
            first_name: claim.patient_first_name.clone(),
            last_name: claim.patient_last_name.clone(),
            birth_date: claim.patient_birth_date,
            address: claim.patient_address.clone(),
            city: claim.patient_city.clone(),
            state: claim.patient_state.clone(),
            zip: claim.patient_zip.clone(),
            phone: claim.patient_phone.clone(),
        },
        diagnosis_codes: claim.diagnosis_codes.clone(),
        total_amount: claim.total_amount,
        place_of_service: claim.place_of_service.clone(),
        authorization,
        service_lines,
    }
}

/// Assemble a canonical batch for one or more stored claims.
///
/// The receiver defaults to the first claim's on-file payer unless the
/// caller supplies an override (an operator batching one payer run).
/// Missing payer identity is left empty here; the validator owns that
/// rule and reports it as `receiver.identifier`.
pub fn assemble_batch(
    company: &CompanyRecord,
    claims: &[ClaimRecord],
    receiver_override: Option<Receiver>,
) -> Result<CanonicalBatch> {
    let provider = billing_provider(company)?;

    let Some(first) = claims.first() else {
        return Err(AssembleError::EmptyBatch);
    };

    let receiver = receiver_override.unwrap_or_else(|| Receiver {
        name: first.payer_name.clone().unwrap_or_default(),
        identifier: first.payer_id.clone().unwrap_or_default(),
    });

    tracing::debug!(
        company = %company.id,
        claim_count = claims.len(),
        receiver = %receiver.identifier,
        "assembling canonical batch"
    );

    Ok(CanonicalBatch {
        submitter: submitter(company, &provider),
        receiver,
        provider,
        claims: claims.iter().map(assemble_from_snapshot).collect(),
    })
}

/// Assemble a single-claim batch, the submission-path shape.
pub fn assemble_single(company: &CompanyRecord, claim: &ClaimRecord) -> Result<CanonicalBatch> {
    assemble_batch(company, std::slice::from_ref(claim), None)
}
