//! The dedicated validate operation: full error/warning breakdown with
//! no encoding and no side effects.

use chrono::NaiveDate;
use claims_assemble::assemble_single;
use claims_validate::{ClaimEcho, ValidationResponse, validate};

use crate::error::Result;
use crate::store::ClaimStore;

/// Validate one claim and return the full breakdown plus a compact claim
/// echo for UI correlation. Works in any claim status.
pub fn validate_claim<S: ClaimStore>(
    store: &S,
    claim_id: &str,
    as_of: NaiveDate,
) -> Result<ValidationResponse> {
    let claim = store.claim(claim_id)?;
    let company = store.company()?;
    let batch = assemble_single(&company, &claim)?;
    let report = validate(&batch, as_of);
    Ok(ValidationResponse::new(
        &report,
        ClaimEcho::from_record(&claim),
    ))
}
