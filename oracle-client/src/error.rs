use thiserror::Error;

use crate::query::FieldError;

/// Errors surfaced by the client.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The query was rejected before any network activity.
    #[error("invalid query: {0:?}")]
    InvalidQuery(Vec<FieldError>),

    /// Any transport-level failure, carrying the original diagnostic message.
    #[error("network error: {0}")]
    Network(String),

    /// Reserved: the service may reject malformed input, but no parsing rule
    /// recognizes that response yet.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reserved: the service may reject the API key, but no parsing rule
    /// recognizes that response yet.
    #[error("invalid API key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, OracleError>;
