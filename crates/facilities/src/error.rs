//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use facilities_config::ConfigError;
use facilities_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const SERVER: i32 = 9;
    pub const DATA: i32 = 10;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Loading ──────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(facilities::network),
        help(
            "Could not reach {origin}.\n\
             Check the URL with --url, or load a local document with --file."
        )
    )]
    Network { message: String, origin: String },

    #[error("{message}")]
    #[diagnostic(
        code(facilities::server),
        help("The server at {origin} answered with status {status}.")
    )]
    Server {
        message: String,
        origin: String,
        status: u16,
    },

    #[error("Invalid buildings document: {message}")]
    #[diagnostic(
        code(facilities::invalid_document),
        help("Check that {origin} serves a JSON array of buildings, or an object containing one.")
    )]
    InvalidDocument { message: String, origin: String },

    #[error("Cannot read buildings document {path}")]
    #[diagnostic(code(facilities::source_unavailable), help("{reason}"))]
    SourceUnavailable { path: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(facilities::not_found),
        help("Run: facilities {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(facilities::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(facilities::config_exists),
        help("Use --force to overwrite it, or edit it directly.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(facilities::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    #[diagnostic(code(facilities::serialize))]
    Serialize(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Network { .. } => exit_code::CONNECTION,
            Self::Server { .. } => exit_code::SERVER,
            Self::InvalidDocument { .. } => exit_code::DATA,
            Self::SourceUnavailable { .. } | Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ConfigExists { .. } => exit_code::USAGE,
            Self::Config(_) | Self::Io(_) | Self::Serialize(_) => exit_code::GENERAL,
        }
    }

    /// Wrap a load failure with the source it came from.
    pub fn loading(err: CoreError, origin: &str) -> Self {
        let message = err.to_string();
        match err {
            CoreError::Network { .. } => Self::Network {
                message,
                origin: origin.into(),
            },
            CoreError::Server { status } => Self::Server {
                message,
                origin: origin.into(),
                status,
            },
            CoreError::InvalidDocument { message } => Self::InvalidDocument {
                message,
                origin: origin.into(),
            },
            other => other.into(),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::Network { .. } => CliError::Network {
                message,
                origin: "the configured source".into(),
            },
            CoreError::Server { status } => CliError::Server {
                message,
                origin: "the configured source".into(),
                status,
            },
            CoreError::InvalidDocument { message } => CliError::InvalidDocument {
                message,
                origin: "the configured source".into(),
            },
            CoreError::SourceUnavailable { path, reason } => {
                CliError::SourceUnavailable { path, reason }
            }
            CoreError::BuildingNotFound { identifier } => CliError::NotFound {
                resource_type: "building".into(),
                identifier,
                list_command: "buildings list".into(),
            },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_keeps_user_facing_message() {
        let err = CliError::loading(CoreError::Server { status: 500 }, "https://example.test");
        assert_eq!(
            err.to_string(),
            "Server error: HTTP error! status: 500. Please try again later."
        );
        assert_eq!(err.exit_code(), exit_code::SERVER);
    }

    #[test]
    fn network_failure_exit_code() {
        let err = CliError::loading(
            CoreError::Network {
                reason: "refused".into(),
            },
            "https://example.test",
        );
        assert!(err.to_string().starts_with("Network error:"));
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn missing_building_is_not_found() {
        let err: CliError = CoreError::BuildingNotFound {
            identifier: "b9".into(),
        }
        .into();
        assert_eq!(err.to_string(), "building 'b9' not found");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn config_validation_is_usage_error() {
        let err: CliError = ConfigError::Validation {
            field: "source.url".into(),
            reason: "invalid URL: nope".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
