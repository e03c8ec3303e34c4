//! Error types for Packagist API operations.

use thiserror::Error;

/// Errors surfaced by the Packagist client.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed caller input, rejected before any request is issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-success HTTP response from the API.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Request URL.
        url: String,
        /// Response status code.
        status: u16,
        /// Response body, when one could be read.
        body: Option<String>,
    },

    /// Transport-level failure (DNS, connect, timeout).
    #[error("network error fetching {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Underlying transport error.
        message: String,
    },

    /// Response body did not decode as the expected JSON shape.
    #[error("failed to parse response from {url}: {message}")]
    Parse {
        /// Request URL.
        url: String,
        /// Decoder error.
        message: String,
    },

    /// Client construction or endpoint configuration failure.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code of the failing response, if this is an HTTP error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for Packagist API operations.
pub type Result<T> = std::result::Result<T, Error>;
