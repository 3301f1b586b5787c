//! Receiver/payer identity check.

use claims_model::Receiver;

use crate::finding::Finding;

pub fn check(receiver: &Receiver) -> Vec<Finding> {
    let mut findings = Vec::new();

    if receiver.identifier.trim().is_empty() {
        findings.push(Finding::error(
            "receiver.identifier",
            "payer identifier is required",
        ));
    }

    findings
}
