//! Diagnosis code presence and ICD-10 shape checks.

use std::sync::LazyLock;

use claims_model::CanonicalClaim;
use regex::Regex;

use crate::finding::{Finding, claim_field};

/// Billable ICD-10 code shape: one letter, two digits, a dot, and up to
/// four alphanumerics (e.g. `Z99.89`, `M54.5`). Three-character category
/// codes without the decimal suffix (`Z99`) are flagged.
static ICD10_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][0-9]{2}\.[A-Za-z0-9]{1,4}$").expect("invalid ICD-10 shape regex")
});

/// Returns true when a code matches the ICD-10 shape.
pub fn is_icd10_shaped(code: &str) -> bool {
    ICD10_SHAPE.is_match(code.trim())
}

/// Check diagnosis code presence (error) and shape (warning).
///
/// Malformed codes are warnings, not errors: some payers tolerate legacy
/// code formats, so shape alone must not block submission.
pub fn check(index: usize, claim: &CanonicalClaim) -> Vec<Finding> {
    let mut findings = Vec::new();
    let number = &claim.claim_number;

    if claim.diagnosis_codes.is_empty() {
        findings.push(Finding::error(
            claim_field(index, "diagnosis_codes"),
            format!("claim {number}: at least one diagnosis code is required"),
        ));
        return findings;
    }

    for (code_index, code) in claim.diagnosis_codes.iter().enumerate() {
        if !is_icd10_shaped(code) {
            findings.push(Finding::warning(
                claim_field(index, &format!("diagnosis_codes[{code_index}]")),
                format!("claim {number}: diagnosis code {code:?} does not match the ICD-10 shape"),
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icd10_shapes() {
        assert!(is_icd10_shaped("Z99.89"));
        assert!(is_icd10_shaped("M54.5"));
        assert!(is_icd10_shaped("S72.001A"));
        // Category code without the decimal suffix is flagged.
        assert!(!is_icd10_shaped("Z99"));
        assert!(!is_icd10_shaped("10I"));
        assert!(!is_icd10_shaped("I1"));
        assert!(!is_icd10_shaped("I10."));
        assert!(!is_icd10_shaped("I10.12345"));
        assert!(!is_icd10_shaped(""));
    }
}
