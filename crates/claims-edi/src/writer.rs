//! Batch-to-text encoding.
//!
//! `encode` is pure and deterministic: the same canonical batch always
//! renders byte-for-byte identical text. Control numbers are derived from
//! batch content (claim count, claim numbers), never from the clock, and
//! nothing random is embedded in the payload.
//!
//! The encoder performs no business-rule validation; callers gate actual
//! transmission on the validator. Encoding a rule-invalid batch is allowed
//! (useful for debugging), but delimiter collisions are still rejected.

use chrono::NaiveDate;
use claims_model::{
    CanonicalBatch, CanonicalClaim, CanonicalServiceLine, format_amount, format_units,
};

use crate::error::{EdiError, Result};
use crate::options::EncodeOptions;
use crate::segment::{SegmentBuffer, composite, element};

/// Encode a batch with default options (original-claim frequency).
pub fn encode(batch: &CanonicalBatch) -> Result<String> {
    encode_with_options(batch, &EncodeOptions::default())
}

/// Encode a batch into the generic 837P-style segment text.
pub fn encode_with_options(batch: &CanonicalBatch, options: &EncodeOptions) -> Result<String> {
    if batch.claims.is_empty() {
        return Err(EdiError::EmptyBatch);
    }

    let claim_count = batch.claims.len();
    let interchange_control = format!("{claim_count:09}");
    let group_control = claim_count.to_string();
    let transaction_control = format!("{claim_count:04}");
    // Batch reference: the claim number for a single-claim file, a
    // count-derived token for a multi-claim export.
    let batch_reference = if claim_count == 1 {
        element("claims[0].claim_number", &batch.claims[0].claim_number)?
    } else {
        format!("BATCH{claim_count}")
    };

    let submitter_id = element("submitter.identifier", &batch.submitter.identifier)?;
    let receiver_id = element("receiver.identifier", &batch.receiver.identifier)?;

    let mut buffer = SegmentBuffer::new();

    buffer.push(
        "ISA",
        &[
            "00".to_string(),
            "ZZ".to_string(),
            submitter_id.clone(),
            "ZZ".to_string(),
            receiver_id.clone(),
            interchange_control.clone(),
        ],
    );
    buffer.push(
        "GS",
        &[
            "HC".to_string(),
            submitter_id.clone(),
            receiver_id.clone(),
            group_control.clone(),
        ],
    );

    let segments_before_st = buffer.count();
    buffer.push("ST", &["837".to_string(), transaction_control.clone()]);
    buffer.push(
        "BHT",
        &[
            "0019".to_string(),
            "00".to_string(),
            batch_reference,
            "CH".to_string(),
        ],
    );

    write_header_loops(&mut buffer, batch, &submitter_id, &receiver_id)?;

    for (index, claim) in batch.claims.iter().enumerate() {
        write_claim(&mut buffer, index, claim, options)?;
    }

    // SE count covers ST through SE inclusive.
    let transaction_segments = buffer.count() - segments_before_st + 1;
    buffer.push(
        "SE",
        &[transaction_segments.to_string(), transaction_control],
    );
    buffer.push("GE", &["1".to_string(), group_control]);
    buffer.push("IEA", &["1".to_string(), interchange_control]);

    Ok(buffer.into_text())
}

/// Submitter, receiver, and billing-provider identity loops.
fn write_header_loops(
    buffer: &mut SegmentBuffer,
    batch: &CanonicalBatch,
    submitter_id: &str,
    receiver_id: &str,
) -> Result<()> {
    let submitter = &batch.submitter;
    buffer.push(
        "NM1",
        &[
            "41".to_string(),
            "2".to_string(),
            element("submitter.name", &submitter.name)?,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            "46".to_string(),
            submitter_id.to_string(),
        ],
    );
    buffer.push(
        "PER",
        &[
            "IC".to_string(),
            element("submitter.contact_name", &submitter.contact_name)?,
            "TE".to_string(),
            element("submitter.contact_phone", &submitter.contact_phone)?,
            "EM".to_string(),
            element("submitter.contact_email", &submitter.contact_email)?,
        ],
    );
    buffer.push(
        "NM1",
        &[
            "40".to_string(),
            "2".to_string(),
            element("receiver.name", &batch.receiver.name)?,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            "46".to_string(),
            receiver_id.to_string(),
        ],
    );

    let provider = &batch.provider;
    buffer.push(
        "NM1",
        &[
            "85".to_string(),
            "2".to_string(),
            element("provider.name", &provider.name)?,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            "XX".to_string(),
            element("provider.npi", &provider.npi)?,
        ],
    );
    buffer.push("N3", &[element("provider.address", &provider.address)?]);
    buffer.push(
        "N4",
        &[
            element("provider.city", &provider.city)?,
            element("provider.state", &provider.state)?,
            element("provider.zip", &provider.zip)?,
        ],
    );
    // Tax ID is written digits-only regardless of the stored separator form.
    let tax_digits: String = provider
        .tax_id
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect();
    buffer.push(
        "REF",
        &["EI".to_string(), element("provider.tax_id", &tax_digits)?],
    );
    buffer.push(
        "PRV",
        &[
            "BI".to_string(),
            "PXC".to_string(),
            element("provider.taxonomy_code", &provider.taxonomy_code)?,
        ],
    );
    Ok(())
}

/// One claim record block: claim, patient demographics, diagnoses, lines.
fn write_claim(
    buffer: &mut SegmentBuffer,
    index: usize,
    claim: &CanonicalClaim,
    options: &EncodeOptions,
) -> Result<()> {
    let path = |rest: &str| format!("claims[{index}].{rest}");

    let place = element(&path("place_of_service"), &claim.place_of_service)?;
    buffer.push(
        "CLM",
        &[
            element(&path("claim_number"), &claim.claim_number)?,
            format_amount(claim.total_amount),
            String::new(),
            String::new(),
            format!("{place}:B:{}", options.frequency_code),
            "Y".to_string(),
            "A".to_string(),
            "Y".to_string(),
            "Y".to_string(),
        ],
    );
    buffer.push(
        "DTP",
        &[
            "434".to_string(),
            "RD8".to_string(),
            format!("{}-{}", d8(claim.service_start), d8(claim.service_end)),
        ],
    );

    let patient = &claim.patient;
    buffer.push(
        "NM1",
        &[
            "QC".to_string(),
            "1".to_string(),
            element(&path("patient.last_name"), &patient.last_name)?,
            element(&path("patient.first_name"), &patient.first_name)?,
            String::new(),
            String::new(),
            String::new(),
            "MI".to_string(),
            element(&path("patient.medicaid_id"), &patient.medicaid_id)?,
        ],
    );
    buffer.push("N3", &[element(&path("patient.address"), &patient.address)?]);
    buffer.push(
        "N4",
        &[
            element(&path("patient.city"), &patient.city)?,
            element(&path("patient.state"), &patient.state)?,
            element(&path("patient.zip"), &patient.zip)?,
        ],
    );
    if let Some(birth_date) = patient.birth_date {
        buffer.push("DMG", &["D8".to_string(), d8(birth_date)]);
    }
    if let Some(authorization) = &claim.authorization {
        buffer.push(
            "REF",
            &[
                "G1".to_string(),
                element(&path("authorization.number"), &authorization.number)?,
            ],
        );
    }

    if !claim.diagnosis_codes.is_empty() {
        let mut elements = Vec::with_capacity(claim.diagnosis_codes.len());
        for (code_index, code) in claim.diagnosis_codes.iter().enumerate() {
            let qualifier = if code_index == 0 { "ABK" } else { "ABF" };
            elements.push(composite(
                &path(&format!("diagnosis_codes[{code_index}]")),
                &[qualifier, code],
            )?);
        }
        buffer.push("HI", &elements);
    }

    for (line_index, line) in claim.service_lines.iter().enumerate() {
        write_service_line(buffer, index, line_index, &place, line)?;
    }
    Ok(())
}

/// One line item: LX counter, professional service, service date.
fn write_service_line(
    buffer: &mut SegmentBuffer,
    claim_index: usize,
    line_index: usize,
    place: &str,
    line: &CanonicalServiceLine,
) -> Result<()> {
    let path =
        |rest: &str| format!("claims[{claim_index}].service_lines[{line_index}].{rest}");

    buffer.push("LX", &[line.line_number.to_string()]);

    let mut procedure = vec!["HC", line.hcpcs_code.as_str()];
    for modifier in &line.modifiers {
        procedure.push(modifier.as_str());
    }
    let procedure = composite(&path("hcpcs_code"), &procedure)?;

    let pointers = line
        .diagnosis_pointers
        .iter()
        .map(|pointer| pointer.to_string())
        .collect::<Vec<_>>()
        .join(":");

    buffer.push(
        "SV1",
        &[
            procedure,
            format_amount(line.line_amount),
            "UN".to_string(),
            format_units(line.units),
            place.to_string(),
            String::new(),
            pointers,
        ],
    );
    buffer.push(
        "DTP",
        &["472".to_string(), "D8".to_string(), d8(line.service_date)],
    );
    Ok(())
}

/// EDI D8 date format.
fn d8(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
