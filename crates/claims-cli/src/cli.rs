//! CLI argument definitions for the claims billing tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use claims_model::{Clearinghouse, SubmissionType};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "carebill",
    version,
    about = "Home-care claims billing - validate, submit, and export 837P claims",
    long_about = "Assemble home-care claims into payer-ready 837P files.\n\n\
                  Works against a JSON book of record (company, clients, claims)\n\
                  and produces deterministic EDI output plus an audit trail of\n\
                  submission attempts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient identifiers in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one claim and print the error/warning breakdown.
    Validate(ValidateArgs),

    /// Submit one claim through a clearinghouse and write the EDI file.
    Submit(SubmitArgs),

    /// Export a set of claims as one shared batch file.
    Export(ExportArgs),

    /// Create draft claims from a scheduled-services CSV.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the JSON book of record.
    #[arg(value_name = "BOOK")]
    pub book: PathBuf,

    /// Claim identifier to validate.
    #[arg(long = "claim", value_name = "ID")]
    pub claim_id: String,

    /// Reference date for authorization-expiry checks (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Path to the JSON book of record.
    #[arg(value_name = "BOOK")]
    pub book: PathBuf,

    /// Claim identifier to submit.
    #[arg(long = "claim", value_name = "ID")]
    pub claim_id: String,

    /// Clearinghouse to submit through.
    #[arg(long = "clearinghouse", value_enum, default_value = "generic")]
    pub clearinghouse: ClearinghouseArg,

    /// Submission type (sets the claim frequency code).
    #[arg(long = "submission-type", value_enum, default_value = "original")]
    pub submission_type: SubmissionTypeArg,

    /// Directory the EDI file is written to (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the JSON book of record.
    #[arg(value_name = "BOOK")]
    pub book: PathBuf,

    /// Claim identifiers to export, comma separated.
    #[arg(
        long = "claims",
        value_name = "ID,...",
        value_delimiter = ',',
        required = true
    )]
    pub claim_ids: Vec<String>,

    /// Override the receiver payer identifier for the whole batch.
    #[arg(long = "receiver", value_name = "PAYER_ID")]
    pub receiver: Option<String>,

    /// Validate the batch and report without writing or advancing anything.
    #[arg(long = "validate-only")]
    pub validate_only: bool,

    /// Directory the EDI file is written to (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the JSON book of record.
    #[arg(value_name = "BOOK")]
    pub book: PathBuf,

    /// CSV of completed scheduled services
    /// (client_id, service_date, hcpcs_code, modifiers, units).
    #[arg(long = "services", value_name = "CSV")]
    pub services: PathBuf,

    /// Write the updated book here instead of back to the input path.
    #[arg(long = "output", value_name = "BOOK")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ClearinghouseArg {
    Generic,
    Availity,
    OfficeAlly,
}

impl From<ClearinghouseArg> for Clearinghouse {
    fn from(arg: ClearinghouseArg) -> Self {
        match arg {
            ClearinghouseArg::Generic => Clearinghouse::Generic,
            ClearinghouseArg::Availity => Clearinghouse::Availity,
            ClearinghouseArg::OfficeAlly => Clearinghouse::OfficeAlly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SubmissionTypeArg {
    Original,
    Corrected,
    Void,
}

impl From<SubmissionTypeArg> for SubmissionType {
    fn from(arg: SubmissionTypeArg) -> Self {
        match arg {
            SubmissionTypeArg::Original => SubmissionType::Original,
            SubmissionTypeArg::Corrected => SubmissionType::Corrected,
            SubmissionTypeArg::Void => SubmissionType::Void,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
