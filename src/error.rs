//! Error types shared by the service adapter and the views.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single call to the shortening service.
///
/// The adapter logs each of these once and hands it back unchanged; callers
/// decide what the user sees.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Timeout, refused connection, DNS failure and friends.
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{path} answered {status}")]
    Status {
        path: String,
        status: StatusCode,
        payload: Option<Value>,
    },

    #[error("unexpected response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid service url: {0}")]
    InvalidBaseUrl(String),

    #[error("cannot build http client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } | ApiError::Decode { source, .. } => {
                source.status()
            }
            ApiError::InvalidBaseUrl(_) | ApiError::Client(_) => None,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Status { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Why a view operation did not complete.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("input url is empty")]
    EmptyInput,

    #[error("a request is already in flight")]
    Busy,

    #[error("superseded by a newer request")]
    Superseded,

    #[error("{0} could not be resolved")]
    Unresolved(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write rejected: {0}")]
    Write(String),
}
