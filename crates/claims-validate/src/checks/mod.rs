//! Payer-submission rule checks, one module per area.
//!
//! Every check accumulates findings and returns; nothing short-circuits,
//! so an operator sees every problem in one pass.

pub mod authorization;
pub mod diagnosis;
pub mod lines;
pub mod patient;
pub mod payer;
pub mod provider;
pub mod totals;

use chrono::NaiveDate;
use claims_model::CanonicalBatch;

use crate::finding::Finding;

/// Run the full rule set over a batch.
pub fn run_all(batch: &CanonicalBatch, as_of: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();

    findings.extend(provider::check(&batch.provider));
    findings.extend(payer::check(&batch.receiver));

    for (index, claim) in batch.claims.iter().enumerate() {
        findings.extend(patient::check(index, claim));
        findings.extend(diagnosis::check(index, claim));
        findings.extend(lines::check(index, claim));
        findings.extend(totals::check(index, claim));
        findings.extend(authorization::check(index, claim, as_of));
    }

    findings
}

/// True when every character is an ASCII digit and the length matches.
pub(crate) fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// True for exactly two ASCII letters (state code shape).
pub(crate) fn is_state_code(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic())
}
