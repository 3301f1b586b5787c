//! Patient snapshot demographic checks.

use claims_model::CanonicalClaim;

use super::is_state_code;
use crate::finding::{Finding, claim_field};

/// Check patient identifiers and demographics on one claim.
pub fn check(index: usize, claim: &CanonicalClaim) -> Vec<Finding> {
    let mut findings = Vec::new();
    let patient = &claim.patient;
    let number = &claim.claim_number;

    let required = [
        ("patient.medicaid_id", patient.medicaid_id.as_str(), "medicaid/member ID"),
        ("patient.first_name", patient.first_name.as_str(), "first name"),
        ("patient.last_name", patient.last_name.as_str(), "last name"),
        ("patient.address", patient.address.as_str(), "address"),
        ("patient.city", patient.city.as_str(), "city"),
        ("patient.zip", patient.zip.as_str(), "zip"),
    ];
    for (path, value, label) in required {
        if value.trim().is_empty() {
            findings.push(Finding::error(
                claim_field(index, path),
                format!("claim {number}: patient {label} is required"),
            ));
        }
    }

    if patient.birth_date.is_none() {
        findings.push(Finding::error(
            claim_field(index, "patient.birth_date"),
            format!("claim {number}: patient date of birth is required"),
        ));
    }

    if !is_state_code(&patient.state) {
        findings.push(Finding::error(
            claim_field(index, "patient.state"),
            format!(
                "claim {number}: patient state must be a 2-letter code, got {:?}",
                patient.state
            ),
        ));
    }

    findings
}
