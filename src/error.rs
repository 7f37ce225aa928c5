//! Error types for the Ticketdesk application.

use thiserror::Error;

/// The main error type for Ticketdesk.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors (connect, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an envelope that does not signal success.
    #[error("API error (code {code}): {}", msg.as_deref().unwrap_or("no message"))]
    Api {
        /// Envelope `code` field.
        code: i64,
        /// Envelope `msg` field, if the server sent one.
        msg: Option<String>,
    },

    /// Non-success HTTP status without a readable envelope.
    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// Malformed base URL or endpoint path.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an API envelope error.
    pub fn api(code: i64, msg: Option<String>) -> Self {
        Self::Api { code, msg }
    }

    /// The human-readable message the server attached to a failure, if any.
    ///
    /// Empty messages count as absent so callers fall back to their own text.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { msg: Some(msg), .. } if !msg.trim().is_empty() => Some(msg),
            _ => None,
        }
    }
}
