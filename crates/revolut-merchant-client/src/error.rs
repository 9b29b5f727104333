//! Client error types.

use revolut_merchant_core::CoreError;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Revolut Merchant client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("failed to decode JSON response")]
    Decode,

    /// The API answered with a status code of 400 or above.
    #[error("Revolut API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, or `"Unknown"`.
        message: String,
    },

    /// A successful response did not have the expected shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Domain error, e.g. an amount that overflows minor units.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
