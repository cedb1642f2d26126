//! Error types for the Tenable API clients.
//!
//! Every failure is returned to the caller as an [`Error`]; nothing in this
//! crate prints to stdout or terminates the process.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Tenable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Tenable API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request could not be completed (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API answered with a non-2xx status
    #[error("API error: status={status} {reason}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
        /// Message extracted from the response body, or the reason phrase
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// No usable credentials or connection settings could be resolved
    #[error("Configuration error: {0}")]
    Config(String),

    /// A login exchange returned something other than what was expected
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration file could not be parsed
    #[error("Config file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the HTTP status code if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Returns `true` if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (bad credentials, bad request, missing configuration).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) | Error::ConfigFile(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a failed response.
    ///
    /// Tenable.io reports `{"error": "..."}`, Tenable.sc reports
    /// `{"error_msg": "..."}`; anything else falls back to the reason phrase.
    pub(crate) fn from_api_response(status: u16, reason: &str, body: Value) -> Self {
        let message = ["error", "error_msg", "message"]
            .iter()
            .find_map(|key| body.get(*key).and_then(|m| m.as_str()))
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| reason.to_string());

        Error::Api {
            status,
            reason: reason.to_string(),
            message,
            body,
        }
    }
}
