//! Error types for image-dl
//!
//! Two layers of errors exist:
//! - [`Error`] covers the fallible crate surface (configuration loading, HTTP
//!   client construction, unknown item ids).
//! - [`FetchError`] describes why a single fetch attempt produced no image.
//!   Fetch errors never escape an item as `Err` values; they are logged and
//!   offered to [`Presenter::on_error`](crate::Presenter::on_error).

use thiserror::Error;

use crate::types::ItemId;

/// Result type alias for image-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for image-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "http.user_agent")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Item id does not address an item of the coordinator
    #[error("unknown item {id} (coordinator holds {len} items)")]
    UnknownItem {
        /// The id that was requested
        id: ItemId,
        /// Number of items the coordinator holds
        len: usize,
    },
}

/// Coarse classification of a failed fetch attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Locator does not parse as a URL
    LocatorInvalid,
    /// Network-level error or non-success HTTP status
    TransportFailure,
    /// Body absent or not a decodable image
    DecodeFailure,
}

/// Reason a single fetch attempt produced no image
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Locator failed to parse; no request was issued
    #[error("invalid locator '{locator}': {reason}")]
    LocatorInvalid {
        /// The locator as configured
        locator: String,
        /// Parser message
        reason: String,
    },

    /// Request could not be completed
    #[error("transport failure: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP status {status}")]
    Status {
        /// Status code returned by the server
        status: u16,
    },

    /// Response carried no body
    #[error("response body is empty")]
    EmptyBody,

    /// Body is not a decodable image
    #[error("decode failure: {0}")]
    Decode(String),
}

impl FetchError {
    /// Classify this error into one of the three failure kinds
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::LocatorInvalid { .. } => FetchErrorKind::LocatorInvalid,
            FetchError::Transport(_) | FetchError::Status { .. } => {
                FetchErrorKind::TransportFailure
            }
            FetchError::EmptyBody | FetchError::Decode(_) => FetchErrorKind::DecodeFailure,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Transport(format!("request timed out: {}", e))
        } else if e.is_connect() {
            FetchError::Transport(format!("connection failed: {}", e))
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

impl From<image::ImageError> for FetchError {
    fn from(e: image::ImageError) -> Self {
        FetchError::Decode(e.to_string())
    }
}
