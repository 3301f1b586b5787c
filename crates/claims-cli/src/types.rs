//! Command result shapes carried from `commands` to the summary printer.

use std::path::PathBuf;

use claims_submit::{ExportOutcome, GenerateReport, SubmitResponse};

pub struct SubmitRun {
    pub response: SubmitResponse,
    pub written_to: PathBuf,
}

pub struct ExportRun {
    pub outcome: ExportOutcome,
    /// Present only when a file was produced (not on `--validate-only`).
    pub written_to: Option<PathBuf>,
}

pub struct GenerateRun {
    pub report: GenerateReport,
    /// Book-of-record path the updated book was written to.
    pub written_to: PathBuf,
}
