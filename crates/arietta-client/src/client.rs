//! HTTP client and endpoint configuration.
//!
//! Every API operation funnels through the helpers here: one configured
//! `reqwest::Client`, one status check, one JSON decode path.

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Base URL for the packagist.org website API (list, search, details, stats).
pub const PACKAGIST_URL: &str = "https://packagist.org/";

/// Base URL for the repo.packagist.org metadata mirror.
pub const PACKAGIST_REPO_URL: &str = "https://repo.packagist.org/";

/// Endpoint and transport configuration.
///
/// The defaults target packagist.org. Both bases can be pointed elsewhere,
/// which serves private mirrors as well as stub servers in tests.
#[derive(Debug, Clone)]
pub struct PackagistConfig {
    /// Base URL for website endpoints (`search.json`, `packages/...`).
    pub web_url: Url,
    /// Base URL for Composer metadata endpoints (`p/{vendor}/{package}.json`).
    pub repo_url: Url,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Total per-request timeout.
    pub request_timeout: Duration,
}

impl Default for PackagistConfig {
    fn default() -> Self {
        Self {
            web_url: Url::parse(PACKAGIST_URL).expect("packagist URL is valid"),
            repo_url: Url::parse(PACKAGIST_REPO_URL).expect("packagist repo URL is valid"),
            user_agent: format!("arietta/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl PackagistConfig {
    /// Point both endpoint families at a single custom base URL.
    #[must_use]
    pub fn with_base(base: Url) -> Self {
        Self {
            web_url: base.clone(),
            repo_url: base,
            ..Self::default()
        }
    }
}

/// Client for the Packagist web API.
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// holds no mutable state and performs no caching or retries.
#[derive(Clone)]
pub struct PackagistClient {
    http: Client,
    config: Arc<PackagistConfig>,
}

impl std::fmt::Debug for PackagistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackagistClient")
            .field("http", &"reqwest::Client")
            .field("config", &self.config)
            .finish()
    }
}

impl PackagistClient {
    /// Create a client for packagist.org with default settings.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(PackagistConfig::default())
    }

    /// Create a client with the given configuration.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn with_config(config: PackagistConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &PackagistConfig {
        &self.config
    }

    /// Base URL for website endpoints.
    #[must_use]
    pub fn web_url(&self) -> &Url {
        &self.config.web_url
    }

    /// Base URL for metadata endpoints.
    #[must_use]
    pub fn repo_url(&self) -> &Url {
        &self.config.repo_url
    }

    pub(crate) fn web_endpoint(&self, path: &str) -> Result<Url> {
        self.config
            .web_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint '{path}': {e}")))
    }

    pub(crate) fn repo_endpoint(&self, path: &str) -> Result<Url> {
        self.config
            .repo_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint '{path}': {e}")))
    }

    /// Issue a GET request, mapping transport failures only.
    ///
    /// The status code is left to the caller; the metadata endpoint needs to
    /// see 304 before any error translation happens.
    pub(crate) async fn send(&self, url: Url, headers: HeaderMap) -> Result<Response> {
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(url.as_str())
            .headers(headers)
            .send()
            .await
            .map_err(|e| Error::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        debug!(url = %url, status = %response.status(), "response received");
        Ok(response)
    }

    /// Reject non-success responses, capturing the body when readable.
    pub(crate) async fn check_success(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.ok().filter(|b| !b.is_empty());
        Err(Error::Http {
            url,
            status: status.as_u16(),
            body,
        })
    }

    /// Read and decode a JSON response body.
    pub(crate) async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let url = response.url().to_string();
        let text = response.text().await.map_err(|e| Error::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        sonic_rs::from_str(&text).map_err(|e| Error::Parse {
            url,
            message: e.to_string(),
        })
    }

    /// GET a URL and decode the JSON body, the path every unconditional
    /// request takes.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send(url, HeaderMap::new()).await?;
        let response = self.check_success(response).await?;
        self.read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_packagist() {
        let config = PackagistConfig::default();
        assert_eq!(config.web_url.host_str(), Some("packagist.org"));
        assert_eq!(config.repo_url.host_str(), Some("repo.packagist.org"));
    }

    #[test]
    fn with_base_overrides_both_families() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        let config = PackagistConfig::with_base(base.clone());
        assert_eq!(config.web_url, base);
        assert_eq!(config.repo_url, base);
    }

    #[test]
    fn client_creation() {
        let client = PackagistClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn client_debug() {
        let client = PackagistClient::new().unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("PackagistClient"));
    }

    #[test]
    fn endpoint_join() {
        let client = PackagistClient::new().unwrap();
        let url = client.web_endpoint("packages/list.json").unwrap();
        assert_eq!(url.as_str(), "https://packagist.org/packages/list.json");

        let url = client.repo_endpoint("p/monolog/monolog.json").unwrap();
        assert_eq!(url.as_str(), "https://repo.packagist.org/p/monolog/monolog.json");
    }
}
