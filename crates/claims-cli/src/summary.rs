//! Console summaries for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use claims_model::ClaimSubmission;
use claims_submit::{
    ExportResult, ExportValidation, GenerateReport, IneligibleClaim, SubmitError, SubmitResponse,
};
use claims_validate::{Finding, Severity, ValidationResponse};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new(severity.label()).fg(Color::Red),
        Severity::Warning => Cell::new(severity.label()).fg(Color::Yellow),
    }
}

fn findings_table(findings: &[Finding]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for finding in findings {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(&finding.field),
            Cell::new(&finding.message),
        ]);
    }
    table
}

pub fn print_findings(findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    println!("{}", findings_table(findings));
}

fn ineligible_table(claims: &[IneligibleClaim]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Claim"),
        header_cell("Number"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for claim in claims {
        table.add_row(vec![
            Cell::new(&claim.claim_id),
            Cell::new(&claim.claim_number),
            Cell::new(claim.status.to_string()),
        ]);
    }
    table
}

/// Operator-facing text for a failed submit or export.
///
/// Lifecycle errors that carry an itemized detail render it in full;
/// every other error renders as its context chain.
pub fn render_failure(error: &anyhow::Error) -> String {
    match error.downcast_ref::<SubmitError>() {
        Some(SubmitError::ValidationFailed { findings }) => {
            format!("error: {error:#}\n{}", findings_table(findings))
        }
        Some(SubmitError::IneligibleClaims { claims }) => {
            format!("error: {error:#}\n{}", ineligible_table(claims))
        }
        _ => format!("error: {error:#}"),
    }
}

pub fn print_failure(error: &anyhow::Error) {
    eprintln!("{}", render_failure(error));
}

pub fn print_validation(response: &ValidationResponse) {
    println!(
        "Claim {}: {} error(s), {} warning(s)",
        response.claim.claim_number, response.error_count, response.warning_count
    );
    let mut findings = response.errors.clone();
    findings.extend(response.warnings.iter().cloned());
    print_findings(&findings);
    if response.can_submit {
        println!("Result: ready to submit");
    } else {
        println!("Result: blocked");
    }
}

fn print_submission_line(submission: &ClaimSubmission) {
    println!(
        "Submission {}: {} via {} ({})",
        submission.id,
        submission.status,
        submission.clearinghouse,
        submission
            .acknowledgement_id
            .as_deref()
            .unwrap_or("no acknowledgement")
    );
    if let Some(errors) = &submission.errors {
        println!("  note: {errors}");
    }
}

pub fn print_submit(response: &SubmitResponse, written_to: Option<&std::path::Path>) {
    print_submission_line(&response.submission);
    println!("Claim status: {}", response.claim_status);
    if let Some(path) = written_to {
        println!("EDI file: {}", path.display());
    }
    if !response.warnings.is_empty() {
        println!("Warnings (advisory):");
        print_findings(&response.warnings);
    }
}

pub fn print_export(result: &ExportResult, written_to: &std::path::Path) {
    println!(
        "Exported {} claim(s) to {}",
        result.claim_count,
        written_to.display()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Submission"),
        header_cell("Claim"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for submission in &result.submissions {
        table.add_row(vec![
            Cell::new(&submission.id),
            Cell::new(&submission.claim_id),
            Cell::new(submission.status.to_string()),
        ]);
    }
    println!("{table}");
    if !result.warnings.is_empty() {
        println!("Warnings (advisory):");
        print_findings(&result.warnings);
    }
}

pub fn print_export_validation(validation: &ExportValidation) {
    println!(
        "Validated {} claim(s): {}",
        validation.claim_count,
        if validation.valid { "clean" } else { "blocked" }
    );
    print_findings(&validation.errors);
}

pub fn print_generate(report: &GenerateReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Client"),
        header_cell("Claim"),
        header_cell("Lines"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for created in &report.created {
        table.add_row(vec![
            Cell::new(&created.client_id),
            Cell::new(&created.claim_number),
            Cell::new(created.line_count.to_string()),
            Cell::new(claims_model::format_amount(created.total_amount)),
        ]);
    }
    println!("{table}");
    for skipped in &report.skipped {
        println!("skipped {}: {}", skipped.client_id, skipped.reason);
    }
    println!(
        "Created {} draft(s), skipped {} client(s)",
        report.created.len(),
        report.skipped.len()
    );
}
