//! Error type for the catalog HTTP client.

use thiserror::Error;

/// Failures observed while talking to the catalog API.
///
/// These never cross the [`DataSource`](super::DataSource) boundary; the client
/// logs them and returns empty results instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// What: Whether this error is an HTTP 404, which a lookup treats as "not found".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
