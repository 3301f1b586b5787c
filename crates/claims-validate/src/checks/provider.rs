//! Billing provider identity and address checks.

use claims_model::BillingProvider;

use super::{is_digits, is_state_code};
use crate::finding::Finding;

/// Check provider NPI, tax identity, taxonomy, and billing address.
pub fn check(provider: &BillingProvider) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !is_digits(&provider.npi, 10) {
        findings.push(Finding::error(
            "provider.npi",
            format!(
                "provider NPI must be exactly 10 digits, got {:?}",
                provider.npi
            ),
        ));
    }

    // Tax IDs are stored with optional separators (12-3456789); strip them
    // before the digit check.
    let tax_digits: String = provider
        .tax_id
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect();
    if !is_digits(&tax_digits, 9) {
        findings.push(Finding::error(
            "provider.tax_id",
            format!(
                "provider Tax ID must be exactly 9 digits, got {:?}",
                provider.tax_id
            ),
        ));
    }

    if provider.taxonomy_code.trim().is_empty() {
        findings.push(Finding::error(
            "provider.taxonomy_code",
            "provider taxonomy code is required",
        ));
    }

    if provider.address.trim().is_empty() {
        findings.push(Finding::error(
            "provider.address",
            "provider billing address is required",
        ));
    }
    if provider.city.trim().is_empty() {
        findings.push(Finding::error(
            "provider.city",
            "provider billing city is required",
        ));
    }
    if !is_state_code(&provider.state) {
        findings.push(Finding::error(
            "provider.state",
            format!(
                "provider billing state must be a 2-letter code, got {:?}",
                provider.state
            ),
        ));
    }
    if provider.zip.trim().is_empty() {
        findings.push(Finding::error(
            "provider.zip",
            "provider billing zip is required",
        ));
    }

    findings
}
