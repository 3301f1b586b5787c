//! Lifecycle tests: status gating, record creation, fail-closed export,
//! and dispatch outcomes.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use claims_edi::EdiFile;
use claims_model::{
    ClaimRecord, ClaimStatus, ClientRecord, Clearinghouse, CompanyRecord, DispatchStatus,
    ScheduledService, ServiceLineRecord, SubmissionType,
};
use claims_submit::{
    ClaimStore, ClearinghouseDispatch, DispatchOutcome, ExportOutcome, ExportRequest, MemoryStore,
    SubmitError, SubmitRequest, export_many, export_many_with_dispatch, generate_from_services,
    submit, submit_with_dispatch, validate_claim,
};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

fn company() -> CompanyRecord {
    CompanyRecord {
        id: "co-1".to_string(),
        name: "Sunrise Home Care".to_string(),
        npi: Some("1234567890".to_string()),
        tax_id: Some("12-3456789".to_string()),
        taxonomy_code: Some("251E00000X".to_string()),
        address: Some("100 Main St".to_string()),
        city: Some("Albany".to_string()),
        state: Some("NY".to_string()),
        zip: Some("12203".to_string()),
        phone: Some("5185551234".to_string()),
        contact_name: Some("R Patel".to_string()),
        contact_email: Some("office@sunrise.example".to_string()),
        billing_name: None,
        billing_address: None,
        billing_city: None,
        billing_state: None,
        billing_zip: None,
        billing_phone: None,
        billing_contact_name: None,
        billing_contact_email: None,
    }
}

fn claim(id: &str, number: &str, status: ClaimStatus) -> ClaimRecord {
    ClaimRecord {
        id: id.to_string(),
        claim_number: number.to_string(),
        client_id: "cl-1".to_string(),
        status,
        service_start: date(2026, 3, 1),
        service_end: date(2026, 3, 31),
        total_amount: Decimal::new(14850, 2),
        place_of_service: "12".to_string(),
        diagnosis_codes: vec!["Z99.89".to_string()],
        payer_id: Some("NYMCD".to_string()),
        payer_name: Some("NY Medicaid".to_string()),
        patient_medicaid_id: "MCD00123".to_string(),
        patient_first_name: "Ada".to_string(),
        patient_last_name: "Nguyen".to_string(),
        patient_birth_date: Some(date(1952, 7, 4)),
        patient_address: "12 Oak St".to_string(),
        patient_city: "Albany".to_string(),
        patient_state: "NY".to_string(),
        patient_zip: "12203".to_string(),
        patient_phone: None,
        authorization_number: Some("AUTH-77".to_string()),
        authorization_start: Some(date(2026, 1, 1)),
        authorization_end: Some(date(2026, 12, 31)),
        submitted_at: None,
        lines: vec![
            ServiceLineRecord {
                service_date: date(2026, 3, 2),
                hcpcs_code: "T1019".to_string(),
                modifiers: vec![],
                units: Decimal::new(3, 0),
                unit_rate: Decimal::new(2475, 2),
                line_amount: Decimal::new(7425, 2),
                diagnosis_pointers: vec![1],
            },
            ServiceLineRecord {
                service_date: date(2026, 3, 9),
                hcpcs_code: "T1019".to_string(),
                modifiers: vec![],
                units: Decimal::new(3, 0),
                unit_rate: Decimal::new(2475, 2),
                line_amount: Decimal::new(7425, 2),
                diagnosis_pointers: vec![1],
            },
        ],
    }
}

fn store_with(claims: Vec<ClaimRecord>) -> MemoryStore {
    MemoryStore::new(company()).with_claims(claims)
}

fn submit_request(claim_id: &str) -> SubmitRequest {
    SubmitRequest {
        claim_id: claim_id.to_string(),
        clearinghouse: Clearinghouse::Generic,
        submission_type: SubmissionType::Original,
    }
}

#[test]
fn successful_submit_records_and_advances() {
    let mut store = store_with(vec![claim("c-1", "CLM-1001", ClaimStatus::Ready)]);

    let response = submit(&mut store, &submit_request("c-1"), now()).expect("submit");

    assert_eq!(response.claim_status, ClaimStatus::Submitted);
    assert_eq!(response.submission.status, DispatchStatus::Transmitted);
    assert_eq!(
        response.submission.edi_file_name,
        "SUNRISE_HOME_CARE_CLM_1001_837P.edi"
    );
    assert!(response.submission.acknowledgement_id.is_some());
    assert!(response.submission.edi_content.starts_with("ISA*"));

    let stored = store.claim("c-1").unwrap();
    assert_eq!(stored.status, ClaimStatus::Submitted);
    assert_eq!(stored.submitted_at, Some(now()));
    assert_eq!(store.submissions_for("c-1").len(), 1);
}

#[test]
fn rejected_and_denied_claims_may_resubmit() {
    for status in [ClaimStatus::Rejected, ClaimStatus::Denied] {
        let mut store = store_with(vec![claim("c-1", "CLM-1001", status)]);
        let response = submit(&mut store, &submit_request("c-1"), now()).expect("submit");
        assert_eq!(response.claim_status, ClaimStatus::Submitted);
    }
}

#[test]
fn submitted_claims_are_gated_without_a_record() {
    let mut store = store_with(vec![claim("c-1", "CLM-1001", ClaimStatus::Submitted)]);

    let error = submit(&mut store, &submit_request("c-1"), now()).unwrap_err();
    assert!(matches!(
        error,
        SubmitError::NotSubmittable {
            status: ClaimStatus::Submitted,
            ..
        }
    ));
    assert!(error.is_precondition());
    assert!(store.submissions.is_empty());
}

#[test]
fn validation_failure_leaves_no_trace() {
    let mut bad = claim("c-1", "CLM-1001", ClaimStatus::Ready);
    bad.total_amount = Decimal::new(15000, 2); // lines total 148.50
    let mut store = store_with(vec![bad]);

    let error = submit(&mut store, &submit_request("c-1"), now()).unwrap_err();
    match error {
        SubmitError::ValidationFailed { findings } => {
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].field, "claims[0].total_amount");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
    assert_eq!(store.claim("c-1").unwrap().status, ClaimStatus::Ready);
    assert!(store.submissions.is_empty());
}

#[test]
fn incomplete_provider_profile_fails_before_any_work() {
    let mut incomplete = company();
    incomplete.npi = None;
    let mut store = MemoryStore::new(incomplete)
        .with_claims(vec![claim("c-1", "CLM-1001", ClaimStatus::Ready)]);

    let error = submit(&mut store, &submit_request("c-1"), now()).unwrap_err();
    assert!(matches!(error, SubmitError::Assemble(_)));
    assert!(error.is_precondition());
    assert!(store.submissions.is_empty());
}

#[test]
fn unknown_claim_is_a_precondition_error() {
    let mut store = store_with(vec![]);
    let error = submit(&mut store, &submit_request("missing"), now()).unwrap_err();
    assert!(matches!(error, SubmitError::Store(_)));
    assert!(error.is_precondition());
}

#[test]
fn unsupported_clearinghouse_leaves_submission_pending() {
    let mut store = store_with(vec![claim("c-1", "CLM-1001", ClaimStatus::Ready)]);
    let request = SubmitRequest {
        claim_id: "c-1".to_string(),
        clearinghouse: Clearinghouse::Availity,
        submission_type: SubmissionType::Original,
    };

    let response = submit(&mut store, &request, now()).expect("submit");
    assert_eq!(response.submission.status, DispatchStatus::Pending);
    assert!(
        response
            .submission
            .errors
            .as_deref()
            .is_some_and(|message| message.contains("not implemented"))
    );
    // The record exists for audit, but the claim did not advance.
    assert_eq!(response.claim_status, ClaimStatus::Ready);
    assert_eq!(store.claim("c-1").unwrap().status, ClaimStatus::Ready);
    assert_eq!(store.submissions_for("c-1").len(), 1);
}

struct FailingDispatch;

impl ClearinghouseDispatch for FailingDispatch {
    fn clearinghouse(&self) -> Clearinghouse {
        Clearinghouse::Generic
    }

    fn dispatch(&self, _file: &EdiFile) -> DispatchOutcome {
        DispatchOutcome::Failed {
            message: "connection refused".to_string(),
        }
    }
}

#[test]
fn transport_failure_records_error_and_preserves_status() {
    let mut store = store_with(vec![claim("c-1", "CLM-1001", ClaimStatus::Ready)]);

    let response =
        submit_with_dispatch(&mut store, &FailingDispatch, &submit_request("c-1"), now())
            .expect("submit");
    assert_eq!(response.submission.status, DispatchStatus::Error);
    assert_eq!(
        response.submission.errors.as_deref(),
        Some("connection refused")
    );
    assert_eq!(store.claim("c-1").unwrap().status, ClaimStatus::Ready);
}

#[test]
fn corrected_submission_carries_the_frequency_code() {
    let mut store = store_with(vec![claim("c-1", "CLM-1001", ClaimStatus::Rejected)]);
    let request = SubmitRequest {
        claim_id: "c-1".to_string(),
        clearinghouse: Clearinghouse::Generic,
        submission_type: SubmissionType::Corrected,
    };

    let response = submit(&mut store, &request, now()).expect("submit");
    assert!(response.submission.edi_content.contains("12:B:7"));
}

fn export_request(ids: &[&str]) -> ExportRequest {
    ExportRequest {
        claim_ids: ids.iter().map(|id| (*id).to_string()).collect(),
        receiver_override: None,
        validate_only: false,
    }
}

#[test]
fn export_produces_one_file_and_advances_all_claims() {
    let mut store = store_with(vec![
        claim("c-1", "CLM-1001", ClaimStatus::Ready),
        claim("c-2", "CLM-1002", ClaimStatus::Draft),
    ]);

    let outcome = export_many(&mut store, &export_request(&["c-1", "c-2"]), now()).expect("export");
    let result = match outcome {
        ExportOutcome::Exported(result) => result,
        other => panic!("expected Exported, got {other:?}"),
    };

    assert_eq!(result.claim_count, 2);
    assert_eq!(
        result.file.file_name,
        "SUNRISE_HOME_CARE_BATCH_2CLAIMS_837P.edi"
    );
    assert!(result.file.content.contains("CLM*CLM-1001*"));
    assert!(result.file.content.contains("CLM*CLM-1002*"));
    assert_eq!(result.submissions.len(), 2);
    assert!(
        result
            .submissions
            .iter()
            .all(|s| s.edi_file_name == result.file.file_name)
    );
    assert!(
        result
            .submissions
            .iter()
            .all(|s| s.status == DispatchStatus::Transmitted
                && s.acknowledgement_id.as_deref()
                    == Some("ACK-SUNRISE_HOME_CARE_BATCH_2CLAIMS_837P.edi"))
    );
    assert_eq!(store.claim("c-1").unwrap().status, ClaimStatus::Submitted);
    assert_eq!(store.claim("c-2").unwrap().status, ClaimStatus::Submitted);
}

#[test]
fn export_transport_failure_records_error_without_advancing() {
    let mut store = store_with(vec![
        claim("c-1", "CLM-1001", ClaimStatus::Ready),
        claim("c-2", "CLM-1002", ClaimStatus::Draft),
    ]);

    let outcome = export_many_with_dispatch(
        &mut store,
        &FailingDispatch,
        &export_request(&["c-1", "c-2"]),
        now(),
    )
    .expect("export");
    let result = match outcome {
        ExportOutcome::Exported(result) => result,
        other => panic!("expected Exported, got {other:?}"),
    };

    // The audit trail carries what the dispatch actually reported.
    assert_eq!(result.submissions.len(), 2);
    for submission in &result.submissions {
        assert_eq!(submission.status, DispatchStatus::Error);
        assert_eq!(submission.errors.as_deref(), Some("connection refused"));
        assert!(submission.acknowledgement_id.is_none());
    }
    assert_eq!(store.claim("c-1").unwrap().status, ClaimStatus::Ready);
    assert_eq!(store.claim("c-2").unwrap().status, ClaimStatus::Draft);
}

#[test]
fn export_is_deterministic_across_identical_stores() {
    let run = || {
        let mut store = store_with(vec![
            claim("c-1", "CLM-1001", ClaimStatus::Ready),
            claim("c-2", "CLM-1002", ClaimStatus::Ready),
        ]);
        match export_many(&mut store, &export_request(&["c-1", "c-2"]), now()).expect("export") {
            ExportOutcome::Exported(result) => result.file,
            other => panic!("expected Exported, got {other:?}"),
        }
    };
    assert_eq!(run(), run());
}

#[test]
fn export_fails_closed_when_any_claim_is_already_submitted() {
    let mut store = store_with(vec![
        claim("c-1", "CLM-1001", ClaimStatus::Ready),
        claim("c-2", "CLM-1002", ClaimStatus::Submitted),
    ]);

    let error = export_many(&mut store, &export_request(&["c-1", "c-2"]), now()).unwrap_err();
    match error {
        SubmitError::IneligibleClaims { claims } => {
            assert_eq!(claims.len(), 1);
            assert_eq!(claims[0].claim_number, "CLM-1002");
            assert_eq!(claims[0].status, ClaimStatus::Submitted);
        }
        other => panic!("expected IneligibleClaims, got {other:?}"),
    }
    // Zero side effects: no records, no advancement.
    assert!(store.submissions.is_empty());
    assert_eq!(store.claim("c-1").unwrap().status, ClaimStatus::Ready);
}

#[test]
fn export_with_a_validation_error_changes_nothing() {
    let mut bad = claim("c-2", "CLM-1002", ClaimStatus::Ready);
    bad.total_amount = Decimal::new(1, 2);
    let mut store = store_with(vec![claim("c-1", "CLM-1001", ClaimStatus::Ready), bad]);

    let error = export_many(&mut store, &export_request(&["c-1", "c-2"]), now()).unwrap_err();
    assert!(matches!(error, SubmitError::ValidationFailed { .. }));
    assert!(store.submissions.is_empty());
    assert_eq!(store.claim("c-1").unwrap().status, ClaimStatus::Ready);
    assert_eq!(store.claim("c-2").unwrap().status, ClaimStatus::Ready);
}

#[test]
fn validate_only_reports_without_side_effects() {
    let mut bad = claim("c-2", "CLM-1002", ClaimStatus::Ready);
    bad.total_amount = Decimal::new(1, 2);
    let mut store = store_with(vec![claim("c-1", "CLM-1001", ClaimStatus::Ready), bad]);
    let request = ExportRequest {
        claim_ids: vec!["c-1".to_string(), "c-2".to_string()],
        receiver_override: None,
        validate_only: true,
    };

    let outcome = export_many(&mut store, &request, now()).expect("validate only");
    match outcome {
        ExportOutcome::Validated(validation) => {
            assert!(!validation.valid);
            assert_eq!(validation.claim_count, 2);
            assert!(
                validation
                    .errors
                    .iter()
                    .any(|f| f.field == "claims[1].total_amount")
            );
        }
        other => panic!("expected Validated, got {other:?}"),
    }
    assert!(store.submissions.is_empty());
    assert_eq!(store.claim("c-2").unwrap().status, ClaimStatus::Ready);
}

#[test]
fn empty_export_is_rejected() {
    let mut store = store_with(vec![]);
    assert!(matches!(
        export_many(&mut store, &export_request(&[]), now()),
        Err(SubmitError::EmptyExport)
    ));
}

#[test]
fn validate_endpoint_reports_without_encoding() {
    let mut bad = claim("c-1", "CLM-1001", ClaimStatus::Ready);
    bad.total_amount = Decimal::new(15000, 2);
    let store = store_with(vec![bad]);

    let response = validate_claim(&store, "c-1", date(2026, 3, 15)).expect("validate");
    assert!(!response.valid);
    assert!(!response.can_submit);
    assert_eq!(response.error_count, 1);
    assert_eq!(response.claim.claim_number, "CLM-1001");
    assert_eq!(response.claim.line_count, 2);
}

fn client(id: &str, rate: Option<Decimal>) -> ClientRecord {
    ClientRecord {
        id: id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Nguyen".to_string(),
        birth_date: Some(date(1952, 7, 4)),
        medicaid_id: Some("MCD00123".to_string()),
        address: Some("12 Oak St".to_string()),
        city: Some("Albany".to_string()),
        state: Some("NY".to_string()),
        zip: Some("12203".to_string()),
        phone: None,
        payer_id: Some("NYMCD".to_string()),
        payer_name: Some("NY Medicaid".to_string()),
        diagnosis_codes: vec!["Z99.89".to_string()],
        billing_rate: rate,
        place_of_service: None,
        authorization_number: Some("AUTH-77".to_string()),
        authorization_start: Some(date(2026, 1, 1)),
        authorization_end: Some(date(2026, 12, 31)),
    }
}

fn service(client_id: &str, day: u32) -> ScheduledService {
    ScheduledService {
        client_id: client_id.to_string(),
        service_date: date(2026, 3, day),
        hcpcs_code: "T1019".to_string(),
        modifiers: vec![],
        units: Decimal::new(3, 0),
    }
}

#[test]
fn generation_is_best_effort_per_client() {
    let mut store = MemoryStore::new(company()).with_clients(vec![
        client("cl-1", Some(Decimal::new(2475, 2))),
        client("cl-2", None), // no billing rate
    ]);
    let services = vec![
        service("cl-1", 2),
        service("cl-1", 9),
        service("cl-2", 4),
        service("cl-3", 5), // unknown client
    ];

    let report = generate_from_services(&mut store, &services).expect("generate");

    assert_eq!(report.created.len(), 1);
    let created = &report.created[0];
    assert_eq!(created.client_id, "cl-1");
    assert_eq!(created.line_count, 2);
    assert_eq!(created.total_amount, Decimal::new(14850, 2));

    assert_eq!(report.skipped.len(), 2);
    assert!(
        report
            .skipped
            .iter()
            .any(|s| s.client_id == "cl-2" && s.reason.contains("billing_rate"))
    );
    assert!(report.skipped.iter().any(|s| s.client_id == "cl-3"));

    // The created draft is persisted and immediately submittable state-wise.
    let stored = store.claim(&created.claim_id).expect("stored draft");
    assert_eq!(stored.status, ClaimStatus::Draft);
}
