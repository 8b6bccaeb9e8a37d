//! HTTP client for the TVMaze catalog API
//!
//! Thin wrapper over `reqwest` that issues single GET requests and
//! decodes JSON bodies. There is no retry and no rate limiting: a failed
//! request is reported to the caller as-is.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{Result, ShowSearchError};
use crate::url::{DEFAULT_BASE_URL, join_url};

const USER_AGENT: &str = concat!("showsearch/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog base URL (default: https://api.tvmaze.com)
    pub base_url: String,
    /// Request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper for catalog requests
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ShowSearchError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a catalog path and decode its JSON body
    ///
    /// # Arguments
    /// * `path` - Path relative to the base URL (e.g., "/shows/1/episodes")
    ///
    /// # Errors
    /// - `NotFound` - Server returned 404
    /// - `HttpError` - Network errors or any other non-success status
    /// - `ParseError` - Body is not the expected JSON shape
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(%url, "catalog request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "catalog response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ShowSearchError::NotFound(path.to_string()));
        }

        let body = response.error_for_status()?.text().await?;

        serde_json::from_str(&body).map_err(|e| ShowSearchError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> CatalogClient {
        CatalogClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("showsearch/"));
    }

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.tvmaze.com");
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://localhost:9999".to_string(),
            timeout_secs: Some(5),
            user_agent: "test/0.0.0".to_string(),
        };
        let client = CatalogClient::with_config(config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/1/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let value: Vec<u32> = client.get_json("/shows/1/episodes").await.unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Value> = client.get_json("/shows/0/episodes").await;
        match result {
            Err(ShowSearchError::NotFound(p)) => assert_eq!(p, "/shows/0/episodes"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Value> = client.get_json("/search/shows?q=x").await;
        match result {
            Err(ShowSearchError::HttpError(e)) => {
                assert_eq!(e.status().map(|s| s.as_u16()), Some(500));
            }
            other => panic!("Expected HttpError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Vec<Value>> = client.get_json("/search/shows?q=x").await;
        assert!(matches!(result, Err(ShowSearchError::ParseError(_))));
    }
}
