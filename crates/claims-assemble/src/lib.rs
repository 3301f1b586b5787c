//! Claim batch assembly.
//!
//! Maps a stored claim (with its ordered lines) plus the owning company
//! and client-of-record into the canonical in-memory batch structure the
//! validator and encoder operate on.
//!
//! Two-phase API:
//! - [`draft_from_live`] reads the live client record exactly once, when a
//!   claim is first drafted, and copies the profile into snapshot fields.
//! - [`assemble_from_snapshot`] / [`assemble_batch`] serve already-created
//!   claims from their stored snapshots, never re-joining live records, so
//!   historical claims are immune to later profile edits.

mod batch;
mod draft;
mod error;
mod provider;

pub use batch::{assemble_batch, assemble_from_snapshot, assemble_single};
pub use draft::{DraftIdentity, draft_from_live};
pub use error::{AssembleError, Result};
pub use provider::{billing_provider, submitter};
