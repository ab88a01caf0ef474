//! HTTP client service
//!
//! Encapsulates HTTP communication with the Keybase REST API

use crate::config::Settings;
use crate::models::{ApiResponse, Query};
use crate::utils::error::{ApiError, ApiResult};
use anyhow::Context;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};

/// Keybase API client
///
/// Holds only the fixed settings and the underlying HTTP client; every
/// endpoint method blocks the calling thread for one HTTP round trip and
/// no state is shared between calls.
#[derive(Debug, Clone)]
pub struct KeybaseClient {
    client: Client,
    settings: Settings,
}

impl KeybaseClient {
    /// Create a new client instance
    pub fn new(settings: Settings) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .user_agent(settings.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    /// Create a client pointed at the production Keybase API
    pub fn default_client() -> ApiResult<Self> {
        Self::new(Settings::default())
    }

    /// Borrow the client settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Make a GET request to the given endpoint with the given parameters
    pub fn get(&self, endpoint: &str, query: &Query) -> ApiResult<ApiResponse> {
        let url = format!("{}{}", self.settings.base_url, endpoint);
        debug!("Sending Keybase API request: GET {}", url);

        let response = self.client.get(&url).query(&query.to_pairs()).send()?;

        self.handle_response(response)
    }

    /// Handle HTTP response
    fn handle_response(&self, response: Response) -> ApiResult<ApiResponse> {
        let body = response.text()?;
        let api_response: ApiResponse = serde_json::from_str(&body)?;

        match api_response.ensure_ok() {
            Ok(unwrapped) => {
                debug!("Keybase API request completed successfully");
                Ok(unwrapped)
            }
            Err(e) => {
                error!("Keybase API error: {}", e);
                Err(e)
            }
        }
    }

    /// Look up a user, users, or an external identity
    ///
    /// Any identity type supported by Keybase works as a parameter name
    /// (e.g. `username`, `usernames`, `github`, `domain`, `reddit`). A
    /// `usernames` parameter is coerced into list form before being sent,
    /// since the API expects a uniform list shape for it.
    pub fn lookup(&self, mut query: Query) -> ApiResult<ApiResponse> {
        query.listify("usernames");

        self.get("/user/lookup.json", &query)
    }

    /// Test whether the given user exists on Keybase
    ///
    /// Only works on Keybase usernames, not external identities. A lookup
    /// rejected by the API maps to `Ok(false)`; transport failures are not
    /// existence information and propagate unchanged.
    pub fn user_exists(&self, username: &str) -> ApiResult<bool> {
        match self.lookup(Query::new().with("username", username)) {
            Ok(_) => Ok(true),
            Err(ApiError::Api { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Search Keybase for identity components
    pub fn autocomplete(&self, query: &str) -> ApiResult<ApiResponse> {
        self.get("/user/autocomplete.json", &Query::new().with("q", query))
    }

    /// Discover Keybase users from external identities
    ///
    /// Supports the `flatten` and `usernames_only` flags alongside one or
    /// more identity-type parameters, all passed through unmodified.
    pub fn discover(&self, query: Query) -> ApiResult<ApiResponse> {
        self.get("/user/discover.json", &query)
    }

    /// Retrieve the current site-wide Merkle root
    ///
    /// Accepts optional `seqno` and `ctime` (UTC) parameters selecting a
    /// historical root; an empty query returns the latest one.
    pub fn merkle_root(&self, query: Query) -> ApiResult<ApiResponse> {
        self.get("/merkle/root.json", &query)
    }

    /// Retrieve the Merkle node corresponding to a given hash
    pub fn merkle_block(&self, query: Query) -> ApiResult<ApiResponse> {
        self.get("/merkle/block.json", &query)
    }
}
