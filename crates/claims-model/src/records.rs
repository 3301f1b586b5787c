//! External record shapes supplied by the storage collaborator.
//!
//! These mirror what the agency's record store hands the billing core:
//! company and client profiles, stored claims with their patient snapshot
//! fields, and scheduled-service rows for draft generation. The core never
//! queries storage itself; a calling layer deserializes these and passes
//! them in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::status::ClaimStatus;

/// Provider/company profile. Billing-specific fields fall back to the
/// general field when absent (`billing_phone` -> `phone`, and so on).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub npi: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub taxonomy_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub billing_name: Option<String>,
    #[serde(default)]
    pub billing_address: Option<String>,
    #[serde(default)]
    pub billing_city: Option<String>,
    #[serde(default)]
    pub billing_state: Option<String>,
    #[serde(default)]
    pub billing_zip: Option<String>,
    #[serde(default)]
    pub billing_phone: Option<String>,
    #[serde(default)]
    pub billing_contact_name: Option<String>,
    #[serde(default)]
    pub billing_contact_email: Option<String>,
}

/// Live client-of-record profile, read only when first drafting a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub medicaid_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub payer_id: Option<String>,
    #[serde(default)]
    pub payer_name: Option<String>,
    #[serde(default)]
    pub diagnosis_codes: Vec<String>,
    #[serde(default)]
    pub billing_rate: Option<Money>,
    #[serde(default)]
    pub place_of_service: Option<String>,
    #[serde(default)]
    pub authorization_number: Option<String>,
    #[serde(default)]
    pub authorization_start: Option<NaiveDate>,
    #[serde(default)]
    pub authorization_end: Option<NaiveDate>,
}

/// Stored claim, including the patient snapshot captured at draft time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: String,
    pub claim_number: String,
    pub client_id: String,
    pub status: ClaimStatus,
    pub service_start: NaiveDate,
    pub service_end: NaiveDate,
    pub total_amount: Money,
    pub place_of_service: String,
    pub diagnosis_codes: Vec<String>,
    #[serde(default)]
    pub payer_id: Option<String>,
    #[serde(default)]
    pub payer_name: Option<String>,
    // Patient snapshot fields, copied from the live client at draft time.
    pub patient_medicaid_id: String,
    pub patient_first_name: String,
    pub patient_last_name: String,
    #[serde(default)]
    pub patient_birth_date: Option<NaiveDate>,
    pub patient_address: String,
    pub patient_city: String,
    pub patient_state: String,
    pub patient_zip: String,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(default)]
    pub authorization_number: Option<String>,
    #[serde(default)]
    pub authorization_start: Option<NaiveDate>,
    #[serde(default)]
    pub authorization_end: Option<NaiveDate>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    pub lines: Vec<ServiceLineRecord>,
}

/// Stored service line in claim order. Diagnosis pointers come from the
/// stored line; the assembler never invents them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLineRecord {
    pub service_date: NaiveDate,
    pub hcpcs_code: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub units: Money,
    pub unit_rate: Money,
    pub line_amount: Money,
    #[serde(default)]
    pub diagnosis_pointers: Vec<u8>,
}

/// One scheduled, completed service row from the scheduling system.
/// Input to the draft-generation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledService {
    pub client_id: String,
    pub service_date: NaiveDate,
    pub hcpcs_code: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub units: Money,
}
