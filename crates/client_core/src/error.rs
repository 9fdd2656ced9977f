use reqwest::StatusCode;
use shared::error::{ApiError, ErrorCode};
use thiserror::Error;

/// Failure of a persistence call, tagged by cause. `Display` is the message
/// verbatim so it can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Server(String),
}

impl StoreError {
    pub fn message(&self) -> &str {
        match self {
            StoreError::Network(message)
            | StoreError::Validation(message)
            | StoreError::Server(message) => message,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Network(_) => "network",
            StoreError::Validation(_) => "validation",
            StoreError::Server(_) => "server",
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        StoreError::Network(err.to_string())
    }

    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let api_error = serde_json::from_str::<ApiError>(body).ok();
        let reported = match &api_error {
            Some(api_error) => api_error.message.trim(),
            None => body.trim(),
        };
        let message = if reported.is_empty() {
            format!("contact service responded with {status}")
        } else {
            reported.to_string()
        };

        let is_validation = matches!(
            api_error.as_ref().map(|e| e.code),
            Some(ErrorCode::Validation)
        ) || status == StatusCode::BAD_REQUEST
            || status == StatusCode::UNPROCESSABLE_ENTITY;

        if is_validation {
            StoreError::Validation(message)
        } else {
            StoreError::Server(message)
        }
    }
}
