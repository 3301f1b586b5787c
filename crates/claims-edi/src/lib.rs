//! Deterministic EDI encoding for canonical claim batches.
//!
//! Renders a [`CanonicalBatch`](claims_model::CanonicalBatch) into the
//! flat, segment-structured text a clearinghouse expects, and derives the
//! output file name. Both operations are pure: identical input produces
//! byte-identical text and an identical name, so repeated exports diff
//! clean and correlate with audit entries.
//!
//! Validation is not performed here; see `claims-validate`.

mod error;
mod filename;
mod options;
mod segment;
mod writer;

use serde::{Deserialize, Serialize};

pub use error::{EdiError, Result};
pub use filename::{FileScope, file_name};
pub use options::EncodeOptions;
pub use segment::{COMPONENT_SEP, ELEMENT_SEP, SEGMENT_TERM};
pub use writer::{encode, encode_with_options};

/// An encoded file ready to hand to a dispatch path or download response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdiFile {
    pub file_name: String,
    pub content: String,
}
