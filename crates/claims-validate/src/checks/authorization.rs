//! Prior-authorization overlap checks. Warning-only: not all payers
//! require prior auth, so these never block submission.

use chrono::NaiveDate;
use claims_model::CanonicalClaim;

use crate::finding::{Finding, claim_field};

/// Cross-check service dates against the on-file authorization window.
pub fn check(index: usize, claim: &CanonicalClaim, as_of: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();
    let number = &claim.claim_number;

    let Some(auth) = &claim.authorization else {
        findings.push(Finding::warning(
            claim_field(index, "authorization"),
            format!("claim {number}: no authorization number on file"),
        ));
        return findings;
    };

    if let Some(start) = auth.start_date
        && claim.service_start < start
    {
        findings.push(Finding::warning(
            claim_field(index, "authorization.start_date"),
            format!(
                "claim {number}: service begins {} before authorization {} starts {}",
                claim.service_start, auth.number, start
            ),
        ));
    }

    if let Some(end) = auth.end_date {
        if claim.service_end > end {
            findings.push(Finding::warning(
                claim_field(index, "authorization.end_date"),
                format!(
                    "claim {number}: service extends {} past authorization {} end {}",
                    claim.service_end, auth.number, end
                ),
            ));
        }
        if end < as_of {
            findings.push(Finding::warning(
                claim_field(index, "authorization.end_date"),
                format!(
                    "claim {number}: authorization {} expired {} (as of {as_of})",
                    auth.number, end
                ),
            ));
        }
    }

    findings
}
