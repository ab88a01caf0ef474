//! Service layer module
//!
//! Contains the HTTP client for the Keybase REST API

pub mod client;

pub use client::KeybaseClient;
