//! Error types for the dashboard client.

use std::time::Duration;
use thiserror::Error;

/// The main error type for the dashboard client.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (config files, token storage, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Non-2xx HTTP status returned by the backend.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered with a non-success envelope code.
    #[error("{message} (code {code})")]
    Business { code: i32, message: String },

    /// Network connectivity errors
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within its timeout.
    #[error("timeout of {}ms exceeded", .0.as_millis())]
    Timeout(Duration),

    /// Token storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic application error
    #[error("{0}")]
    Application(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new HTTP status error.
    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: msg.into(),
        }
    }

    /// Create a new business (envelope) error.
    pub fn business(code: i32, msg: impl Into<String>) -> Self {
        Self::Business {
            code,
            message: msg.into(),
        }
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new application error.
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// The message shown to the user for this error.
    ///
    /// Backend and status messages are returned verbatim, without the
    /// diagnostic prefix used by `Display`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } | Self::Business { message, .. } => message.clone(),
            Self::Network(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is an authentication failure (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Check if this error is recoverable (user can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::Channel(_)
        ) || matches!(self.status(), Some(s) if s >= 500)
    }
}
