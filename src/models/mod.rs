//! Data models module
//!
//! Defines the query-parameter and response structures for the Keybase API

pub mod query;
pub mod response;

pub use query::{Query, QueryValue};
pub use response::ApiResponse;
