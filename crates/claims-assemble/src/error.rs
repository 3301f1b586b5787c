use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssembleError {
    /// Hard precondition: the company profile lacks identifiers a payer
    /// file cannot be built without. Checked before assembly proceeds.
    #[error("incomplete provider profile, missing: {}", missing.join(", "))]
    IncompleteProviderProfile { missing: Vec<String> },

    /// A batch must carry at least one claim.
    #[error("cannot assemble a batch with no claims")]
    EmptyBatch,

    /// Draft generation requires billing identifiers on the client.
    #[error("client {client_id} is missing billing setup: {}", missing.join(", "))]
    IncompleteClientBilling {
        client_id: String,
        missing: Vec<String>,
    },

    /// Draft generation requires at least one completed service.
    #[error("client {client_id} has no services in the requested window")]
    NoServices { client_id: String },
}

pub type Result<T> = std::result::Result<T, AssembleError>;
