//! Book-of-record persistence around a full export run.

use chrono::{NaiveDate, TimeZone, Utc};
use claims_cli::book::BookOfRecord;
use claims_model::{ClaimRecord, ClaimStatus, CompanyRecord, ServiceLineRecord};
use claims_submit::{ExportOutcome, ExportRequest, export_many};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn company() -> CompanyRecord {
    CompanyRecord {
        id: "co-1".to_string(),
        name: "Sunrise Home Care".to_string(),
        npi: Some("1234567890".to_string()),
        tax_id: Some("123456789".to_string()),
        taxonomy_code: Some("251E00000X".to_string()),
        address: Some("100 Main St".to_string()),
        city: Some("Albany".to_string()),
        state: Some("NY".to_string()),
        zip: Some("12203".to_string()),
        ..CompanyRecord::default()
    }
}

fn claim(id: &str, number: &str) -> ClaimRecord {
    ClaimRecord {
        id: id.to_string(),
        claim_number: number.to_string(),
        client_id: "cl-1".to_string(),
        status: ClaimStatus::Ready,
        service_start: date(2026, 3, 1),
        service_end: date(2026, 3, 31),
        total_amount: Decimal::new(7425, 2),
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
        lines: vec![ServiceLineRecord {
            service_date: date(2026, 3, 2),
            hcpcs_code: "T1019".to_string(),
            modifiers: vec![],
            units: Decimal::new(3, 0),
            unit_rate: Decimal::new(2475, 2),
            line_amount: Decimal::new(7425, 2),
            diagnosis_pointers: vec![1],
        }],
    }
}

fn book() -> BookOfRecord {
    BookOfRecord {
        company: company(),
        clients: Vec::new(),
        claims: vec![claim("c-1", "CLM-1001")],
        submissions: Vec::new(),
    }
}

#[test]
fn book_saves_and_reloads_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");

    book().save(&path).unwrap();
    let reloaded = BookOfRecord::load(&path).unwrap();

    assert_eq!(reloaded.company.name, "Sunrise Home Care");
    assert_eq!(reloaded.claims.len(), 1);
    assert_eq!(reloaded.claims[0].status, ClaimStatus::Ready);
    assert!(reloaded.submissions.is_empty());
}

#[test]
fn export_survives_a_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    book().save(&path).unwrap();

    let mut store = BookOfRecord::load(&path).unwrap().into_store();
    let request = ExportRequest {
        claim_ids: vec!["c-1".to_string()],
        receiver_override: None,
        validate_only: false,
    };
    let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
    let outcome = export_many(&mut store, &request, now).unwrap();
    let file = match outcome {
        ExportOutcome::Exported(result) => result.file,
        other => panic!("expected Exported, got {other:?}"),
    };
    BookOfRecord::from_store(store).save(&path).unwrap();

    let reloaded = BookOfRecord::load(&path).unwrap();
    assert_eq!(reloaded.claims[0].status, ClaimStatus::Submitted);
    assert_eq!(reloaded.claims[0].submitted_at, Some(now));
    assert_eq!(reloaded.submissions.len(), 1);
    assert_eq!(reloaded.submissions[0].edi_file_name, file.file_name);
    assert_eq!(reloaded.submissions[0].edi_content, file.content);
}

#[test]
fn missing_book_is_a_readable_error() {
    let error = BookOfRecord::load(std::path::Path::new("/nonexistent/book.json")).unwrap_err();
    assert!(error.to_string().contains("book.json"));
}
