//! Error handling module
//!
//! Defines error types used by the client

use thiserror::Error;

/// Client error types
///
/// Transport failures (`Http`, `Json`) are propagated unmodified from the
/// underlying layers and are never translated into `Api`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failure reported by the API's status structure
    #[error("Keybase API error: {message}")]
    Api {
        /// Server-supplied description of the failure
        message: String,
    },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body decoding error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl ApiError {
    /// Whether this is an API-level error reported by the server
    pub fn is_api(&self) -> bool {
        matches!(self, ApiError::Api { .. })
    }

    /// Whether this is a transport-layer failure
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Http(_) | ApiError::Json(_))
    }

    /// The server-supplied message, for API-level errors
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
