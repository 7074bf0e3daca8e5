//! Error types for every entitlement and conversion operation

use thiserror::Error;

/// Fixed upgrade prompt shown for any paywall rejection.
pub const PAYWALL_MESSAGE: &str = "Pro required for this conversion. Please upgrade to continue.";

/// Failure writing to a `PersistedStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store lock poisoned: {0}")]
    Poisoned(String),

    #[error("could not determine a location for the entitlement store")]
    NoLocation,
}

/// A request that failed in transport or with a non-success status.
///
/// Carries the best message available: the server's text when it sent one,
/// otherwise a generic description of the failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RequestError::new("Request timed out")
        } else {
            RequestError::new(e.to_string())
        }
    }
}

/// Outcome of a failed conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The server answered 402. The body is never surfaced.
    #[error("{}", PAYWALL_MESSAGE)]
    Paywall,

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Failure redeeming a license key. Always shown to the user.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Non-success status; holds the server's text or a generic fallback.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Verification failed: unexpected response ({0})")]
    Malformed(String),

    #[error("License verified but could not be saved: {0}")]
    Store(#[from] StoreError),
}

/// Failure renewing a token. Absorbed by the controller, never surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("could not persist refreshed entitlement: {0}")]
    Store(String),
}
