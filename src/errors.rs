use thiserror::Error;

/// Error type that captures snapshot aggregation failures.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Snapshot source error: {0}")]
    Source(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
