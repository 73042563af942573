//! The single error kind produced by the data fetcher.

use thiserror::Error;

use crate::traits::HttpError;

/// A failed fetch.
///
/// Transport failures, non-2xx statuses and undecodable bodies all collapse
/// into this one kind. Only the message tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FetchError {
    reason: String,
}

impl FetchError {
    /// Create an error with a free-form reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The server answered with a status outside the 2xx range.
    pub fn http_status(status: u16) -> Self {
        Self::new(format!("HTTP error! status: {}", status))
    }

    /// The body could not be decoded into the expected shape.
    pub fn invalid_json(err: &serde_json::Error) -> Self {
        Self::new(format!("Invalid JSON response: {}", err))
    }

    /// Human-readable description of the failure.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        Self::new(err.to_string())
    }
}
