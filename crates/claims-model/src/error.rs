use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown claim status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
