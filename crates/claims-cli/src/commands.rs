//! Command implementations: load the book, run the operation, persist.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use claims_edi::EdiFile;
use claims_model::{Receiver, ScheduledService};
use claims_submit::{
    ClaimStore, ExportOutcome, ExportRequest, SubmitRequest, export_many, generate_from_services,
    submit, validate_claim,
};
use claims_validate::ValidationResponse;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use claims_cli::book::BookOfRecord;
use claims_cli::logging::redact_value;

use crate::cli::{ExportArgs, GenerateArgs, SubmitArgs, ValidateArgs};
use crate::types::{ExportRun, GenerateRun, SubmitRun};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationResponse> {
    let store = BookOfRecord::load(&args.book)?.into_store();
    let as_of = args.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let response = validate_claim(&store, &args.claim_id, as_of)?;
    Ok(response)
}

pub fn run_submit(args: &SubmitArgs) -> Result<SubmitRun> {
    let mut store = BookOfRecord::load(&args.book)?.into_store();

    let claim = store.claim(&args.claim_id)?;
    let patient = format!("{} {}", claim.patient_first_name, claim.patient_last_name);
    debug!(
        claim = %claim.claim_number,
        patient = redact_value(&patient),
        "submitting claim"
    );

    let request = SubmitRequest {
        claim_id: args.claim_id.clone(),
        clearinghouse: args.clearinghouse.into(),
        submission_type: args.submission_type.into(),
    };
    let response = submit(&mut store, &request, Utc::now())?;

    let written_to = write_edi_file(
        args.output_dir.as_deref(),
        &EdiFile {
            file_name: response.submission.edi_file_name.clone(),
            content: response.submission.edi_content.clone(),
        },
    )?;
    BookOfRecord::from_store(store).save(&args.book)?;

    Ok(SubmitRun {
        response,
        written_to,
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportRun> {
    let mut store = BookOfRecord::load(&args.book)?.into_store();
    let request = ExportRequest {
        claim_ids: args.claim_ids.clone(),
        receiver_override: args.receiver.as_ref().map(|payer_id| Receiver {
            name: payer_id.clone(),
            identifier: payer_id.clone(),
        }),
        validate_only: args.validate_only,
    };

    let outcome = export_many(&mut store, &request, Utc::now())?;
    let written_to = match &outcome {
        ExportOutcome::Exported(result) => {
            let path = write_edi_file(args.output_dir.as_deref(), &result.file)?;
            BookOfRecord::from_store(store).save(&args.book)?;
            Some(path)
        }
        ExportOutcome::Validated(_) => None,
    };

    Ok(ExportRun {
        outcome,
        written_to,
    })
}

/// One scheduled-service row of the generation input CSV. Modifiers are a
/// space-separated list in a single column.
#[derive(Debug, Deserialize)]
struct ServiceRow {
    client_id: String,
    service_date: NaiveDate,
    hcpcs_code: String,
    #[serde(default)]
    modifiers: Option<String>,
    units: Decimal,
}

impl ServiceRow {
    fn into_service(self) -> ScheduledService {
        ScheduledService {
            client_id: self.client_id,
            service_date: self.service_date,
            hcpcs_code: self.hcpcs_code,
            modifiers: self
                .modifiers
                .as_deref()
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            units: self.units,
        }
    }
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateRun> {
    let mut store = BookOfRecord::load(&args.book)?.into_store();
    let services = read_services(&args.services)?;
    debug!(rows = services.len(), "loaded scheduled services");

    let report = generate_from_services(&mut store, &services)?;

    let output = args.output.as_deref().unwrap_or(&args.book);
    BookOfRecord::from_store(store).save(output)?;

    Ok(GenerateRun {
        report,
        written_to: output.to_path_buf(),
    })
}

fn read_services(path: &Path) -> Result<Vec<ScheduledService>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open services file {}", path.display()))?;
    let mut services = Vec::new();
    for row in reader.deserialize() {
        let row: ServiceRow =
            row.with_context(|| format!("parse services file {}", path.display()))?;
        services.push(row.into_service());
    }
    Ok(services)
}

fn write_edi_file(output_dir: Option<&Path>, file: &EdiFile) -> Result<PathBuf> {
    let dir = output_dir.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))?;
    let path = dir.join(&file.file_name);
    fs::write(&path, &file.content)
        .with_context(|| format!("write EDI file {}", path.display()))?;
    Ok(path)
}
