//! Service line checks: presence, codes, quantities, pointers, and dates.

use claims_model::{CanonicalClaim, CanonicalServiceLine, within_cent};
use rust_decimal::Decimal;

use crate::finding::{Finding, claim_field, line_field};

/// Check every service line on a claim.
pub fn check(index: usize, claim: &CanonicalClaim) -> Vec<Finding> {
    let mut findings = Vec::new();
    let number = &claim.claim_number;

    if claim.service_lines.is_empty() {
        findings.push(Finding::error(
            claim_field(index, "service_lines"),
            format!("claim {number}: at least one service line is required"),
        ));
        return findings;
    }

    for (line_index, line) in claim.service_lines.iter().enumerate() {
        check_line(index, line_index, claim, line, &mut findings);
    }

    findings
}

fn check_line(
    claim_index: usize,
    line_index: usize,
    claim: &CanonicalClaim,
    line: &CanonicalServiceLine,
    findings: &mut Vec<Finding>,
) {
    let number = &claim.claim_number;
    let line_no = line.line_number;

    if line.hcpcs_code.trim().is_empty() {
        findings.push(Finding::error(
            line_field(claim_index, line_index, "hcpcs_code"),
            format!("claim {number} line {line_no}: HCPCS code is required"),
        ));
    }

    if line.units <= Decimal::ZERO {
        findings.push(Finding::error(
            line_field(claim_index, line_index, "units"),
            format!(
                "claim {number} line {line_no}: units must be greater than zero, got {}",
                line.units
            ),
        ));
    }

    if line.line_amount <= Decimal::ZERO {
        findings.push(Finding::error(
            line_field(claim_index, line_index, "line_amount"),
            format!(
                "claim {number} line {line_no}: line amount must be greater than zero, got {}",
                line.line_amount
            ),
        ));
    }

    if line.diagnosis_pointers.is_empty() {
        findings.push(Finding::error(
            line_field(claim_index, line_index, "diagnosis_pointers"),
            format!("claim {number} line {line_no}: at least one diagnosis pointer is required"),
        ));
    }

    // Pointers are 1-based positions into the claim's diagnosis list.
    let diagnosis_count = claim.diagnosis_codes.len();
    for pointer in &line.diagnosis_pointers {
        let pointer = *pointer as usize;
        if pointer == 0 || pointer > diagnosis_count {
            findings.push(Finding::error(
                line_field(claim_index, line_index, "diagnosis_pointers"),
                format!(
                    "claim {number} line {line_no}: diagnosis pointer {pointer} does not \
                     resolve to one of the {diagnosis_count} diagnosis codes"
                ),
            ));
        }
    }

    // Out-of-window service dates are advisory: backdating occasionally
    // reflects legitimate late documentation.
    if line.service_date < claim.service_start || line.service_date > claim.service_end {
        findings.push(Finding::warning(
            line_field(claim_index, line_index, "service_date"),
            format!(
                "claim {number} line {line_no}: service date {} falls outside the claim \
                 window {} to {}",
                line.service_date, claim.service_start, claim.service_end
            ),
        ));
    }

    // Line-level rate arithmetic is advisory; the claim-level totals
    // reconciliation is the blocking rule.
    let computed = line.units * line.unit_rate;
    if !within_cent(computed, line.line_amount) {
        findings.push(Finding::warning(
            line_field(claim_index, line_index, "line_amount"),
            format!(
                "claim {number} line {line_no}: line amount {} does not match units x rate ({})",
                line.line_amount, computed
            ),
        ));
    }
}
