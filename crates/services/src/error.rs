//! Shared error types for the services crate.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors emitted by `QuizApi`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Structured failure reported by the backend error envelope.
    #[error("{message}")]
    Backend { code: String, message: String },
    /// Non-success response with no parseable envelope.
    #[error("quiz service returned status {0}")]
    Status(StatusCode),
    /// Network-level failure (no response), including the client timeout.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// The single human-readable message shown at the point of the failed
    /// operation. Nothing is retried automatically.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Backend { .. } => "An error occurred".to_string(),
            ApiError::Status(status) => format!("The quiz service returned status {status}"),
            ApiError::Http(err) if err.is_timeout() => {
                "The request timed out. Please try again.".to_string()
            }
            ApiError::Http(err) => err.to_string(),
        }
    }
}

/// Wire shape of backend failures:
/// `{ "error": { code, message, details?, timestamp, path } }`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: BackendError,
}

#[derive(Debug, Deserialize)]
struct BackendError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Option<serde_json::Value>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

/// Normalize a non-success response body into an `ApiError`. Bodies that
/// don't carry the envelope fall back to the bare status code.
pub(crate) fn parse_error_body(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let BackendError {
                code,
                message,
                details,
                timestamp,
                path,
            } = envelope.error;
            debug!(%code, ?details, ?timestamp, ?path, "backend error envelope");
            ApiError::Backend { code, message }
        }
        Err(_) => ApiError::Status(status),
    }
}
