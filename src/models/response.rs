//! API response model
//!
//! Generic JSON response tree with typed access to the status sub-structure

use crate::utils::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder message for failed responses that carry no description
const UNKNOWN_ERROR: &str = "unknown API error";

/// A decoded Keybase API response
///
/// Wraps the raw JSON body. Every response carries a `status` sub-structure
/// with typed accessors; endpoint-specific fields are reached generically
/// via [`ApiResponse::get`] and [`ApiResponse::pointer`] without any schema
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Value);

impl ApiResponse {
    /// Wrap an already-decoded JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// API-level status code; `0` signifies success
    pub fn status_code(&self) -> Option<i64> {
        self.0.pointer("/status/code").and_then(Value::as_i64)
    }

    /// Human-readable status description, present on failure
    pub fn status_desc(&self) -> Option<&str> {
        self.0.pointer("/status/desc").and_then(Value::as_str)
    }

    /// Symbolic status name (e.g. "OK")
    pub fn status_name(&self) -> Option<&str> {
        self.0.pointer("/status/name").and_then(Value::as_str)
    }

    /// Whether the response reports success
    pub fn is_ok(&self) -> bool {
        self.status_code() == Some(0)
    }

    /// Look up a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a nested field by JSON pointer (e.g. `/them/0/basics/username`)
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    /// Borrow the raw JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the wrapper and return the raw JSON value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Check the status sub-structure and pass the response through
    ///
    /// Returns the response unchanged when `status.code` is `0`. Otherwise
    /// converts the server's description into an [`ApiError::Api`]. A body
    /// with no integer `status.code` counts as a failed response; the
    /// message falls back to `status.name` when `desc` is absent.
    pub fn ensure_ok(self) -> ApiResult<ApiResponse> {
        match self.status_code() {
            Some(0) => Ok(self),
            _ => Err(ApiError::Api {
                message: self
                    .status_desc()
                    .or_else(|| self.status_name())
                    .unwrap_or(UNKNOWN_ERROR)
                    .to_string(),
            }),
        }
    }
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
