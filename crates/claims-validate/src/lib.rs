//! Payer-submission rule validation.
//!
//! Pure functions over a [`CanonicalBatch`]: no I/O, no short-circuiting.
//! Every rule runs and every finding is returned, so an operator sees all
//! problems in one pass.
//!
//! - **Errors** block submission (provider identity, patient demographics,
//!   payer identity, service line integrity, totals reconciliation).
//! - **Warnings** are advisory and never block (diagnosis code shape,
//!   out-of-window service dates, authorization overlaps).

pub mod checks;
mod finding;
mod report;
mod response;

use chrono::NaiveDate;
use claims_model::CanonicalBatch;

pub use finding::{Finding, Severity};
pub use report::ValidationReport;
pub use response::{ClaimEcho, ValidationResponse};

/// Validate a batch against the full payer-submission rule set.
///
/// `as_of` anchors the authorization-expiry check; pass today's date in
/// production and a fixed date in tests.
pub fn validate(batch: &CanonicalBatch, as_of: NaiveDate) -> ValidationReport {
    ValidationReport::new(checks::run_all(batch, as_of))
}
