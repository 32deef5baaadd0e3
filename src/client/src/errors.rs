//! Error types for the client crate.

use thiserror::Error;

/// Errors that can occur while talking to the ledger API.
///
/// Every variant ends up as the same connectivity notification in the UI; the
/// distinction only matters for diagnostics.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error when the base URL cannot be turned into an endpoint URL.
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),

    /// Error when the request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error when the response body is not the JSON the endpoint promises.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Error when the backend answers with a status the operation does not expect.
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),
}
