//! HTTP fetcher for the upstream starship API.
//!
//! Issues `GET {base_url}/{id}/` and decodes the JSON body into an
//! `EntityRecord`. Blocking; one request per call.

use std::time::Duration;

use reqwest::StatusCode;

use super::RecordFetcher;
use crate::core::RecordId;
use crate::error::FetchError;
use crate::records::EntityRecord;

/// Default upstream collection URL.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/starships";

const USER_AGENT: &str = concat!("starship-duel/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking JSON client for the upstream catalog.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Client for the default upstream.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a custom collection URL (trailing slashes are ignored).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Self::client_builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap a preconfigured client, e.g. one with custom proxy or TLS settings.
    #[must_use]
    pub fn with_client(client: reqwest::blocking::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Builder with the user agent and timeout this fetcher uses by default.
    #[must_use]
    pub fn client_builder() -> reqwest::blocking::ClientBuilder {
        reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// URL requested for `id`.
    #[must_use]
    pub fn url_for(&self, id: RecordId) -> String {
        format!("{}/{}/", self.base_url, id.raw())
    }
}

impl RecordFetcher for HttpFetcher {
    fn fetch(&mut self, id: RecordId) -> Result<EntityRecord, FetchError> {
        let url = self.url_for(id);
        tracing::debug!(id = %id, url = %url, "Requesting record");

        let response = self.client.get(&url).send().map_err(|e| FetchError::Transport {
            id,
            message: e.to_string(),
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id));
        }
        if !status.is_success() {
            return Err(FetchError::Transport {
                id,
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = response.text().map_err(|e| FetchError::Transport {
            id,
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            id,
            message: e.to_string(),
        })
    }
}
