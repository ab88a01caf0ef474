//! Keybase API Client Library
//!
//! Provides a client binding for the unauthenticated read endpoints of the
//! Keybase identity-verification REST API
//!
//! See https://keybase.io/docs/api/1.0 for the API documentation

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{ApiResponse, Query, QueryValue};
pub use services::KeybaseClient;
pub use utils::error::{ApiError, ApiResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
