use thiserror::Error;

/// Encoding failures. These are fatal for the single encode call only;
/// the in-memory batch is never mutated by the encoder.
#[derive(Debug, Error)]
pub enum EdiError {
    /// A batch is never encoded while empty.
    #[error("cannot encode an empty batch")]
    EmptyBatch,

    /// Field data collides with a format delimiter. The offending value
    /// is rejected, never stripped or substituted.
    #[error("field {field} contains a reserved EDI delimiter: {value:?}")]
    InvalidCharacter {
        /// Dotted path of the offending field.
        field: String,
        /// The offending value, verbatim.
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, EdiError>;
