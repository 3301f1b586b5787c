//! Claim totals reconciliation.
//!
//! The single most important rule in the set: payers reject claims whose
//! stated total diverges from the sum of line amounts.

use claims_model::{CanonicalClaim, within_cent};

use crate::finding::{Finding, claim_field};

pub fn check(index: usize, claim: &CanonicalClaim) -> Vec<Finding> {
    let mut findings = Vec::new();

    let line_sum = claim.line_total();
    if !within_cent(claim.total_amount, line_sum) {
        findings.push(Finding::error(
            claim_field(index, "total_amount"),
            format!(
                "claim {}: total amount {} does not equal the sum of line amounts {}",
                claim.claim_number, claim.total_amount, line_sum
            ),
        ));
    }

    findings
}
