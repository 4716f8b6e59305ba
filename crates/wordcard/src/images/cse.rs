//! Google Custom Search image client.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, WordcardError};

use super::{ImageCandidate, ImageSearch};

/// Custom Search JSON API endpoint.
const API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Results requested per search (API maximum).
const RESULTS_PER_SEARCH: u32 = 10;

/// Environment variable holding the developer API key.
pub const API_KEY_VAR: &str = "WORDCARD_CSE_KEY";

/// Environment variable holding the search engine id (`cx`).
pub const ENGINE_ID_VAR: &str = "WORDCARD_CSE_CX";

/// Image search through a Google Custom Search engine.
#[derive(Debug, Clone)]
pub struct CseClient {
    api_key: String,
    cx: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct SearchResponse {
    // Absent when the search has no results
    #[serde(default)]
    items: Vec<ImageCandidate>,
}

impl CseClient {
    /// Create a client for the engine `cx`.
    pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            cx: cx.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create from the `WORDCARD_CSE_KEY` and `WORDCARD_CSE_CX` environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            WordcardError::Config(format!("{} environment variable not set", API_KEY_VAR))
        })?;
        let cx = std::env::var(ENGINE_ID_VAR).map_err(|_| {
            WordcardError::Config(format!("{} environment variable not set", ENGINE_ID_VAR))
        })?;
        Ok(Self::new(api_key, cx))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The blocking HTTP client is built per search and dropped before
    /// returning, so `search` may run on a `spawn_blocking` thread.
    fn client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| WordcardError::Config(format!("Failed to create HTTP client: {}", e)))
    }
}

impl ImageSearch for CseClient {
    fn name(&self) -> &str {
        "google-cse"
    }

    fn search(&self, term: &str) -> Result<Vec<ImageCandidate>> {
        let num = RESULTS_PER_SEARCH.to_string();
        let response = self
            .client()?
            .get(API_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", term),
                ("searchType", "image"),
                ("fileType", "jpg"),
                ("num", num.as_str()),
            ])
            .send()
            .map_err(|e| WordcardError::ImageSearch(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(WordcardError::ImageSearch(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let results: SearchResponse = response.json().map_err(|e| {
            WordcardError::ImageSearch(format!("Failed to parse API response: {}", e))
        })?;

        debug!(term, results = results.items.len(), "image search");
        Ok(results.items)
    }
}
