// src/client.rs
// =============================================================================
// The one HTTP client used for the whole run.
//
// Every network-issuing component (fetcher, prober, security and performance
// checks, robots/sitemap lookups) borrows an HttpClient instead of building
// its own. The client owns the ClientConfig, so headers and timeouts are set
// in exactly one place.
//
// reqwest::Client is internally reference counted, so cloning HttpClient is
// cheap and clones share the same connection pool.
// =============================================================================

use std::time::Duration;

use reqwest::{redirect, Client, Response};

use crate::config::ClientConfig;
use crate::error::NetworkError;

#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Builds the underlying reqwest client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, NetworkError> {
        let inner = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        Ok(Self { inner, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// HEAD request, redirects followed. Any status code is returned as Ok;
    /// only transport failures are errors.
    pub async fn head(&self, url: &str, timeout: Duration) -> Result<Response, NetworkError> {
        let response = self.inner.head(url).timeout(timeout).send().await?;
        Ok(response)
    }

    /// GET request, redirects followed. Like `head`, the status is left for
    /// the caller to judge.
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<Response, NetworkError> {
        let response = self.inner.get(url).timeout(timeout).send().await?;
        Ok(response)
    }
}
