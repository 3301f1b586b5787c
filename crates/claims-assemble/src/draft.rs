//! Draft-phase assembly: the only path that reads a live client record.
//!
//! A new claim copies the client's profile into snapshot fields at draft
//! time; from then on the claim is served from its snapshot (see
//! [`batch`](crate::batch)).

use claims_model::{ClaimRecord, ClaimStatus, ClientRecord, ScheduledService, ServiceLineRecord};
use rust_decimal::Decimal;

use crate::error::{AssembleError, Result};

/// Place of service used when the client record does not specify one:
/// the patient's home.
const DEFAULT_PLACE_OF_SERVICE: &str = "12";

/// Identity for a new draft, assigned by the record store.
#[derive(Debug, Clone)]
pub struct DraftIdentity {
    pub claim_id: String,
    pub claim_number: String,
}

/// Draft a new claim from the live client record and their completed
/// scheduled services.
///
/// Requires payer id, at least one diagnosis code, and a billing rate on
/// the client; each missing item is reported so the generation step can
/// record a skip reason and move on.
pub fn draft_from_live(
    client: &ClientRecord,
    services: &[ScheduledService],
    identity: DraftIdentity,
) -> Result<ClaimRecord> {
    let mut missing = Vec::new();
    if client.payer_id.as_deref().is_none_or(|v| v.trim().is_empty()) {
        missing.push("payer_id".to_string());
    }
    if client.diagnosis_codes.is_empty() {
        missing.push("diagnosis_codes".to_string());
    }
    if client.billing_rate.is_none() {
        missing.push("billing_rate".to_string());
    }
    if !missing.is_empty() {
        return Err(AssembleError::IncompleteClientBilling {
            client_id: client.id.clone(),
            missing,
        });
    }
    if services.is_empty() {
        return Err(AssembleError::NoServices {
            client_id: client.id.clone(),
        });
    }

    let rate = client.billing_rate.unwrap_or_default();
    let lines: Vec<ServiceLineRecord> = services
        .iter()
        .map(|service| ServiceLineRecord {
            service_date: service.service_date,
            hcpcs_code: service.hcpcs_code.clone(),
            modifiers: service.modifiers.clone(),
            units: service.units,
            unit_rate: rate,
            line_amount: (service.units * rate).round_dp(2),
            // Drafts point at the client's primary diagnosis; billers
            // adjust pointers during claim review.
            diagnosis_pointers: vec![1],
        })
        .collect();

    let service_start = services
        .iter()
        .map(|s| s.service_date)
        .min()
        .unwrap_or_default();
    let service_end = services
        .iter()
        .map(|s| s.service_date)
        .max()
        .unwrap_or_default();
    let total_amount: Decimal = lines.iter().map(|line| line.line_amount).sum();

    tracing::debug!(
        client = %client.id,
        claim_number = %identity.claim_number,
        lines = lines.len(),
        "drafted claim from live client record"
    );

    Ok(ClaimRecord {
        id: identity.claim_id,
        claim_number: identity.claim_number,
        client_id: client.id.clone(),
        status: ClaimStatus::Draft,
        service_start,
        service_end,
        total_amount,
        place_of_service: client
            .place_of_service
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACE_OF_SERVICE.to_string()),
        diagnosis_codes: client.diagnosis_codes.clone(),
        payer_id: client.payer_id.clone(),
        payer_name: client.payer_name.clone(),
        patient_medicaid_id: client.medicaid_id.clone().unwrap_or_default(),
        patient_first_name: client.first_name.clone(),
        patient_last_name: client.last_name.clone(),
        patient_birth_date: client.birth_date,
        patient_address: client.address.clone().unwrap_or_default(),
        patient_city: client.city.clone().unwrap_or_default(),
        patient_state: client.state.clone().unwrap_or_default(),
        patient_zip: client.zip.clone().unwrap_or_default(),
        patient_phone: client.phone.clone(),
        authorization_number: client.authorization_number.clone(),
        authorization_start: client.authorization_start,
        authorization_end: client.authorization_end,
        submitted_at: None,
        lines,
    })
}
