pub mod batch;
pub mod error;
pub mod money;
pub mod records;
pub mod status;
pub mod submission;

pub use batch::{
    AuthorizationSnapshot, BillingProvider, CanonicalBatch, CanonicalClaim, CanonicalServiceLine,
    PatientSnapshot, Receiver, Submitter,
};
pub use error::{ModelError, Result};
pub use money::{Money, format_amount, format_units, within_cent};
pub use records::{
    ClaimRecord, ClientRecord, CompanyRecord, ScheduledService, ServiceLineRecord,
};
pub use status::{ClaimStatus, Clearinghouse, DispatchStatus, SubmissionType};
pub use submission::ClaimSubmission;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn claim_record_deserializes_with_defaults() {
        let json = r#"{
            "id": "c-1",
            "claim_number": "CLM-1001",
            "client_id": "cl-1",
            "status": "READY",
            "service_start": "2026-03-01",
            "service_end": "2026-03-31",
            "total_amount": "148.50",
            "place_of_service": "12",
            "diagnosis_codes": ["I10"],
            "patient_medicaid_id": "MCD123",
            "patient_first_name": "Ada",
            "patient_last_name": "Nguyen",
            "patient_address": "12 Oak St",
            "patient_city": "Albany",
            "patient_state": "NY",
            "patient_zip": "12203",
            "lines": []
        }"#;
        let claim: ClaimRecord = serde_json::from_str(json).expect("deserialize claim");
        assert_eq!(claim.status, ClaimStatus::Ready);
        assert_eq!(claim.total_amount, Decimal::new(14850, 2));
        assert_eq!(
            claim.service_start,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert!(claim.payer_id.is_none());
        assert!(claim.submitted_at.is_none());
    }

    #[test]
    fn submission_serializes_round_trip() {
        let submission = ClaimSubmission {
            id: "sub-1".to_string(),
            claim_id: "c-1".to_string(),
            clearinghouse: Clearinghouse::Generic,
            submission_type: SubmissionType::Original,
            status: DispatchStatus::Transmitted,
            edi_file_name: "AGENCY_CLM-1001_837P.edi".to_string(),
            edi_content: "ISA*...".to_string(),
            acknowledgement_id: None,
            errors: None,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&submission).expect("serialize submission");
        let round: ClaimSubmission = serde_json::from_str(&json).expect("deserialize submission");
        assert_eq!(round, submission);
    }
}
