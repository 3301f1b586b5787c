//! Submission lifecycle management.
//!
//! Orchestrates validate -> encode -> record-create -> status-transition
//! for one claim or a multi-claim export, enforces which claim statuses
//! may be (re)submitted, and records the submission audit trail.
//!
//! - **Submit** ([`submit`]): single claim, allowed from
//!   {DRAFT, READY, REJECTED, DENIED}; exactly one [`ClaimSubmission`]
//!   record per attempt; the claim advances to SUBMITTED only when the
//!   dispatch path did not report an error.
//! - **Export** ([`export_many`]): multi-claim and fail-closed; every
//!   claim must be in {DRAFT, READY} or the whole run aborts with an
//!   itemized list and zero side effects.
//! - **Validate** ([`validate_claim`]): full error/warning breakdown,
//!   never encodes, never mutates.
//! - **Generate** ([`generate_from_services`]): best-effort draft
//!   creation from scheduled services, skipping unready clients with a
//!   recorded reason.
//!
//! All failures cross this boundary as a typed [`SubmitError`].
//!
//! [`ClaimSubmission`]: claims_model::ClaimSubmission

mod dispatch;
mod error;
mod export;
mod generate;
mod store;
mod submit;
mod types;
mod validate_op;

pub use dispatch::{
    ClearinghouseDispatch, DispatchOutcome, GenericFileDispatch, UnsupportedDispatch,
    dispatcher_for,
};
pub use error::{IneligibleClaim, Result, SubmitError};
pub use export::{export_many, export_many_with_dispatch};
pub use generate::generate_from_services;
pub use store::{ClaimStore, MemoryStore, StoreError, StoreResult};
pub use submit::{submit, submit_with_dispatch};
pub use types::{
    CreatedClaim, ExportOutcome, ExportRequest, ExportResult, ExportValidation, GenerateReport,
    SkippedClient, SubmitRequest, SubmitResponse,
};
pub use validate_op::validate_claim;
