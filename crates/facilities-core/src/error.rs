// ── Core error types ──
//
// User-facing errors from facilities-core. Consumers never see reqwest
// errors or serde_json internals directly: the `From<facilities_api::Error>`
// impl turns transport failures into the messages the dashboard shows.

use thiserror::Error;

/// Fallback shown when a failure carries no message of its own.
pub const GENERIC_LOAD_FAILURE: &str = "Failed to load buildings data. Please try again.";

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Loading errors ───────────────────────────────────────────────
    #[error(
        "Network error: Unable to connect to the server. Please check your internet connection."
    )]
    Network { reason: String },

    #[error("Server error: HTTP error! status: {status}. Please try again later.")]
    Server { status: u16 },

    #[error("{message}")]
    InvalidDocument { message: String },

    #[error("Cannot read buildings document {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Building not found: {identifier}")]
    BuildingNotFound { identifier: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Parse failure with the generic fallback for an empty message.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::InvalidDocument {
            message: if message.is_empty() {
                GENERIC_LOAD_FAILURE.to_owned()
            } else {
                message
            },
        }
    }

    /// Whether a later attempt might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Server { status } => *status >= 500,
            _ => false,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<facilities_api::Error> for CoreError {
    fn from(err: facilities_api::Error) -> Self {
        match err {
            facilities_api::Error::Network(e) => match e.status() {
                Some(status) => CoreError::Server {
                    status: status.as_u16(),
                },
                None => CoreError::Network {
                    reason: e.to_string(),
                },
            },
            facilities_api::Error::Server { status } => CoreError::Server { status },
            facilities_api::Error::Parse { message, body: _ } => {
                CoreError::invalid_document(message)
            }
            facilities_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            facilities_api::Error::Io { path, source } => CoreError::SourceUnavailable {
                path: path.display().to_string(),
                reason: source.to_string(),
            },
        }
    }
}
