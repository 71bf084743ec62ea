//! Error types for dialogflow-gateway.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dialogflow-gateway.
#[derive(Debug, Error)]
pub enum Error {
    // ── Credentials ──────────────────────────────────────────────────────────
    /// Service-account key file is unreadable or malformed.
    #[error("Credential error at {path}: {message}")]
    Credential {
        /// Path of the credential file.
        path: PathBuf,
        /// Error description.
        message: String,
    },

    /// Missing required credential field.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    // ── Token exchange ───────────────────────────────────────────────────────
    /// The token endpoint rejected the signed assertion or returned an
    /// unparseable body. Every request queued behind the failed refresh
    /// receives this error.
    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    // ── API ──────────────────────────────────────────────────────────────────
    /// The remote API returned a non-2xx, non-401 response.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    // ── Infrastructure ───────────────────────────────────────────────────────
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a credential-load error.
    #[must_use]
    pub fn credential(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Credential {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error came out of the token-refresh protocol
    /// rather than the request itself.
    #[must_use]
    pub fn is_token_exchange(&self) -> bool {
        matches!(self, Error::TokenExchange(_) | Error::MissingCredential(_))
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_token_exchange() {
        assert!(Error::TokenExchange("bad assertion".into()).is_token_exchange());
        assert!(Error::MissingCredential("private_key".into()).is_token_exchange());

        assert!(!Error::Api { status: 500, message: "Server error".into() }.is_token_exchange());
        assert!(!Error::Config("bad base url".into()).is_token_exchange());
    }

    #[test]
    fn test_error_display() {
        let err = Error::credential("/tmp/key.json", "missing field `private_key`");
        assert!(err.to_string().contains("/tmp/key.json"));
        assert!(err.to_string().contains("private_key"));

        let err = Error::Api { status: 500, message: "Internal error".into() };
        assert_eq!(err.to_string(), "API error 500: Internal error");
    }
}
