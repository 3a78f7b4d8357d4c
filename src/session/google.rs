//! Google Custom Search JSON API provider.

use log::{debug, info};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::document::{Document, SearchResult};
use crate::error::{RequeryError, Result};
use crate::session::ResultProvider;

/// Custom Search JSON API endpoint.
pub const CUSTOM_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Response body of the Custom Search API. Only `items` is used.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

/// Fetches the top results of a query from a Programmable Search Engine.
///
/// ```no_run
/// use requery::session::{GoogleCustomSearchProvider, ResultProvider};
///
/// # fn example() -> requery::error::Result<()> {
/// let mut provider = GoogleCustomSearchProvider::new("api-key", "engine-id")?;
/// let documents = provider.search("per se")?;
/// println!("{} results", documents.len());
/// # Ok(())
/// # }
/// ```
pub struct GoogleCustomSearchProvider {
    client: Client,
    api_key: String,
    engine_id: String,
    endpoint: String,
}

impl GoogleCustomSearchProvider {
    /// Create a provider for the given API key and search engine id.
    pub fn new<K: Into<String>, E: Into<String>>(api_key: K, engine_id: E) -> Result<Self> {
        Self::with_endpoint(api_key, engine_id, CUSTOM_SEARCH_ENDPOINT)
    }

    /// Create a provider that talks to a custom endpoint.
    pub fn with_endpoint<K, E, U>(api_key: K, engine_id: E, endpoint: U) -> Result<Self>
    where
        K: Into<String>,
        E: Into<String>,
        U: Into<String>,
    {
        let api_key = api_key.into();
        let engine_id = engine_id.into();
        if api_key.is_empty() || engine_id.is_empty() {
            return Err(RequeryError::invalid_argument(
                "API key and search engine id must not be empty",
            ));
        }

        Ok(GoogleCustomSearchProvider {
            client: Client::builder().build()?,
            api_key,
            engine_id,
            endpoint: endpoint.into(),
        })
    }

    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }
}

impl std::fmt::Debug for GoogleCustomSearchProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCustomSearchProvider")
            .field("engine_id", &self.engine_id)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ResultProvider for GoogleCustomSearchProvider {
    fn search(&mut self, query: &str) -> Result<Vec<Document>> {
        info!("Querying Custom Search for '{query}'");

        // The request URL carries the API key; keep it out of error messages.
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .map_err(|e| e.without_url())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RequeryError::provider(format!(
                "Custom Search returned {status}: {body}"
            )));
        }

        let body: SearchResponse = response.json().map_err(|e| e.without_url())?;
        debug!("Custom Search returned {} items", body.items.len());

        Ok(Document::from_search_results(body.items))
    }

    fn name(&self) -> &str {
        "google-custom-search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_credentials() {
        assert!(GoogleCustomSearchProvider::new("", "cx").is_err());
        assert!(GoogleCustomSearchProvider::new("key", "").is_err());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let provider = GoogleCustomSearchProvider::new("secret-key", "engine").unwrap();
        let debug = format!("{provider:?}");

        assert!(debug.contains("engine"));
        assert!(!debug.contains("secret-key"));
        assert_eq!(provider.name(), "google-custom-search");
    }

    #[test]
    fn test_transport_error_hides_api_key() {
        let mut provider =
            GoogleCustomSearchProvider::with_endpoint("secret-key", "engine", "http://127.0.0.1:9/")
                .unwrap();
        let error = provider.search("friends").unwrap_err();

        assert!(matches!(error, RequeryError::Http(_)));
        assert!(!error.to_string().contains("secret-key"));
    }

    #[test]
    fn test_response_without_items() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"kind": "customsearch#search"}"#).unwrap();
        assert!(response.items.is_empty());
    }
}
