// src/fetch/page.rs
// =============================================================================
// Fetches the page under analysis.
//
// This is the only network call whose failure is fatal: without the HTML
// there is nothing to analyze, so the error goes back to main.rs which
// reports "could not fetch" and exits.
// =============================================================================

use log::{debug, info};
use url::Url;

use crate::client::HttpClient;
use crate::error::NetworkError;

/// The fetched HTML together with the URL it was requested from.
///
/// Analyzers only ever borrow this; nothing keeps a reference after it
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub url: String,
    pub html: String,
}

impl PageContent {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

// Fetches a web page and returns its HTML content
//
// Returns an error for an unparseable URL, a transport failure, or any
// non-2xx final status (redirects have already been followed by then).
pub async fn fetch_page(client: &HttpClient, url: &str) -> Result<PageContent, NetworkError> {
    Url::parse(url).map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", url, e)))?;

    info!("fetching {}", url);
    let response = client.get(url, client.config().fetch_timeout).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status(status.as_u16()));
    }

    let html = response
        .text()
        .await
        .map_err(|e| NetworkError::Body(e.to_string()))?;
    debug!("fetched {} bytes from {}", html.len(), url);

    Ok(PageContent::new(url, html))
}
