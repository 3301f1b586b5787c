//! Canonical batch structure: the in-memory value object handed from the
//! assembler to the validator and encoder.
//!
//! Everything here is a point-in-time copy. A `CanonicalBatch` carries no
//! references back to live company or client records, so an encoded claim is
//! reproducible even after those profiles change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Root value object for one encoding pass. Never encoded while empty;
/// callers must supply at least one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalBatch {
    pub submitter: Submitter,
    pub receiver: Receiver,
    pub provider: BillingProvider,
    pub claims: Vec<CanonicalClaim>,
}

impl CanonicalBatch {
    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }
}

/// Submitting entity identity for the batch header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submitter {
    pub name: String,
    /// Provider NPI used as the submitter identifier.
    pub identifier: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Receiving payer identity. Defaults to the claim's on-file payer unless
/// overridden for an export run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    pub name: String,
    /// Payer identifier.
    pub identifier: String,
}

/// Billing provider block: rendering NPI, tax identity, and billing address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingProvider {
    /// 10-digit National Provider Identifier.
    pub npi: String,
    /// 9-digit Tax ID (EIN), separators allowed in the stored form.
    pub tax_id: String,
    pub taxonomy_code: String,
    pub name: String,
    pub address: String,
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    pub zip: String,
    pub phone: String,
}

/// One claim within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalClaim {
    /// Unique, immutable once assigned.
    pub claim_number: String,
    pub service_start: NaiveDate,
    pub service_end: NaiveDate,
    pub patient: PatientSnapshot,
    /// Ordered; service lines reference these positionally (1-based).
    pub diagnosis_codes: Vec<String>,
    /// Must equal the sum of line amounts within $0.01.
    pub total_amount: Money,
    /// Propagated to every line.
    pub place_of_service: String,
    /// On-file prior authorization, when the client has one.
    pub authorization: Option<AuthorizationSnapshot>,
    pub service_lines: Vec<CanonicalServiceLine>,
}

impl CanonicalClaim {
    /// Sum of line amounts, for totals reconciliation.
    pub fn line_total(&self) -> Money {
        self.service_lines.iter().map(|line| line.line_amount).sum()
    }
}

/// Patient demographics copied from the claim's stored snapshot fields,
/// not re-fetched from the live client record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSnapshot {
    /// Medicaid / payer member identifier.
    pub medicaid_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: Option<String>,
}

/// Prior-authorization window captured on the claim for the advisory
/// overlap checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationSnapshot {
    pub number: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// One billable line item within a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalServiceLine {
    /// 1-based, contiguous within the claim.
    pub line_number: u32,
    pub service_date: NaiveDate,
    pub hcpcs_code: String,
    /// 0-4 procedure modifiers.
    pub modifiers: Vec<String>,
    /// Units billed; fractional units are legitimate (15-minute increments).
    pub units: Money,
    pub unit_rate: Money,
    /// units x unit_rate, within $0.01.
    pub line_amount: Money,
    /// 1-based positions into the claim's diagnosis list.
    pub diagnosis_pointers: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn line(amount: i64) -> CanonicalServiceLine {
        CanonicalServiceLine {
            line_number: 1,
            service_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            hcpcs_code: "T1019".to_string(),
            modifiers: vec![],
            units: Decimal::ONE,
            unit_rate: Decimal::new(amount, 2),
            line_amount: Decimal::new(amount, 2),
            diagnosis_pointers: vec![1],
        }
    }

    #[test]
    fn line_total_sums_amounts() {
        let claim = CanonicalClaim {
            claim_number: "CLM-1001".to_string(),
            service_start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            service_end: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            patient: PatientSnapshot {
                medicaid_id: "MCD123".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Nguyen".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1952, 7, 4),
                address: "12 Oak St".to_string(),
                city: "Albany".to_string(),
                state: "NY".to_string(),
                zip: "12203".to_string(),
                phone: None,
            },
            diagnosis_codes: vec!["I10".to_string()],
            total_amount: Decimal::new(7500, 2),
            place_of_service: "12".to_string(),
            authorization: None,
            service_lines: vec![line(2500), line(5000)],
        };
        assert_eq!(claim.line_total(), Decimal::new(7500, 2));
    }
}
