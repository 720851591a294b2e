//! HTTP client for the catalog site
//!
//! This module provides the page fetcher: a single GET per call, no retries,
//! no rate limiting. Every visit is recorded as a tracing event.

use std::env;

use crate::error::Result;

/// Default catalog site
pub const DEFAULT_BASE_URL: &str = "https://anitaku.pe";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the catalog client
///
/// Built once (usually from the environment) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Site root without trailing slash (default: `https://anitaku.pe`)
    pub base_url: String,
    /// Page listing the latest releases (default: `<base_url>/home.html`)
    pub home_page_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given site root.
    ///
    /// The home page defaults to `<base_url>/home.html`.
    ///
    /// # Example
    /// ```
    /// use spectra_core::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://127.0.0.1:8080/");
    /// assert_eq!(config.base_url, "http://127.0.0.1:8080");
    /// assert_eq!(config.home_page_url, "http://127.0.0.1:8080/home.html");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let home_page_url = format!("{}/home.html", base_url);
        Self {
            base_url,
            home_page_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the home page URL.
    pub fn with_home_page_url(mut self, home_page_url: impl Into<String>) -> Self {
        self.home_page_url = home_page_url.into();
        self
    }

    /// Read `BASE_URL` and `HOME_PAGE_URL` from the process environment.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = non_empty("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let config = Self::new(base_url);
        match non_empty("HOME_PAGE_URL") {
            Some(home) => config.with_home_page_url(home),
            None => config,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the catalog site
///
/// Cheap to share: the inner `reqwest::Client` is reference counted and
/// no per-request state is kept between calls.
#[derive(Debug, Clone)]
pub struct SpectraClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Site configuration
    config: ClientConfig,
}

impl SpectraClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Site configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the HTML of a fully-formed URL.
    ///
    /// Performs exactly one attempt.
    ///
    /// # Errors
    /// - `SpectraError::Transport` - Network failure or non-success status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::info!(url = %url, "Visiting");

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://anitaku.pe");
        assert_eq!(config.home_page_url, "https://anitaku.pe/home.html");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_client_config_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_client_config_home_page_follows_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[("BASE_URL", "https://gogoanime3.co")]));
        assert_eq!(config.base_url, "https://gogoanime3.co");
        assert_eq!(config.home_page_url, "https://gogoanime3.co/home.html");
    }

    #[test]
    fn test_client_config_explicit_home_page() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BASE_URL", "https://anitaku.pe/"),
            ("HOME_PAGE_URL", "https://anitaku.pe/index.html"),
        ]));
        assert_eq!(config.base_url, "https://anitaku.pe");
        assert_eq!(config.home_page_url, "https://anitaku.pe/index.html");
    }

    #[test]
    fn test_client_config_empty_values_use_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("BASE_URL", "  "), ("HOME_PAGE_URL", "")]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_client_creation() {
        let client = SpectraClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/popular.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpectraClient::with_config(ClientConfig::new(server.uri())).unwrap();
        let body = client
            .fetch(&format!("{}/popular.html", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_transport_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpectraClient::with_config(ClientConfig::new(server.uri())).unwrap();
        let err = client
            .fetch(&format!("{}/home.html", server.uri()))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
