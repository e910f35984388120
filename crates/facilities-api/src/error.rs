use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `facilities-api` crate.
///
/// Covers every way a fetch of the buildings document can fail:
/// transport, HTTP status, body decoding, and local file access.
/// `facilities-core` maps these into user-facing messages.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Server ──────────────────────────────────────────────────────
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Server { status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// The body was not valid JSON, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Parse { message: String, body: String },

    // ── Local files ─────────────────────────────────────────────────
    /// A local buildings document could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Server { status } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status code, if the server responded with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
