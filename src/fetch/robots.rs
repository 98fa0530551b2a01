// src/fetch/robots.rs
// =============================================================================
// robots.txt and sitemap discovery.
//
// These are reported as information about the site. Nothing here decides
// whether a page may be fetched.
//
// Strategy for sitemaps:
// 1. GET /sitemap.xml and accept it if it looks like a <urlset>
// 2. Otherwise read robots.txt and take the first "Sitemap:" line
// =============================================================================

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::HttpClient;
use crate::error::NetworkError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsReport {
    pub found: bool,
    pub url: Option<String>,
    pub status_code: Option<u16>,
    pub content: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SitemapSource {
    #[serde(rename = "sitemap.xml")]
    SitemapXml,
    #[serde(rename = "robots.txt")]
    RobotsTxt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapReport {
    pub found: bool,
    pub url: Option<String>,
    pub source: Option<SitemapSource>,
}

impl SitemapReport {
    fn not_found() -> Self {
        Self {
            found: false,
            url: None,
            source: None,
        }
    }
}

// Resolves a root-relative path ("/robots.txt") against the site of `base_url`
fn site_url(base_url: &str, path: &str) -> Result<String, NetworkError> {
    let base = Url::parse(base_url)
        .map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    let joined = base
        .join(path)
        .map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", path, e)))?;
    Ok(joined.to_string())
}

// GETs `url` and returns (status, body)
async fn get_text(client: &HttpClient, url: &str) -> Result<(u16, String), NetworkError> {
    let response = client.get(url, client.config().aux_timeout).await?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| NetworkError::Body(e.to_string()))?;
    Ok((status, body))
}

/// Fetches `<site>/robots.txt`.
pub async fn check_robots(client: &HttpClient, base_url: &str) -> RobotsReport {
    let robots_url = match site_url(base_url, "/robots.txt") {
        Ok(url) => url,
        Err(e) => {
            return RobotsReport {
                found: false,
                url: None,
                status_code: None,
                content: None,
                error: Some(e.to_string()),
            }
        }
    };

    match get_text(client, &robots_url).await {
        Ok((200, body)) => RobotsReport {
            found: true,
            url: Some(robots_url),
            status_code: Some(200),
            content: Some(body),
            error: None,
        },
        Ok((status, _)) => RobotsReport {
            found: false,
            url: Some(robots_url),
            status_code: Some(status),
            content: None,
            error: None,
        },
        Err(e) => {
            debug!("robots.txt lookup failed for {}: {}", robots_url, e);
            RobotsReport {
                found: false,
                url: Some(robots_url),
                status_code: None,
                content: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Looks for a sitemap at /sitemap.xml, then in robots.txt.
pub async fn find_sitemap(client: &HttpClient, base_url: &str) -> SitemapReport {
    if let Ok(sitemap_url) = site_url(base_url, "/sitemap.xml") {
        match get_text(client, &sitemap_url).await {
            Ok((200, body)) if body.contains("<urlset") => {
                return SitemapReport {
                    found: true,
                    url: Some(sitemap_url),
                    source: Some(SitemapSource::SitemapXml),
                };
            }
            Ok(_) => {}
            Err(e) => debug!("sitemap.xml lookup failed for {}: {}", sitemap_url, e),
        }
    }

    if let Ok(robots_url) = site_url(base_url, "/robots.txt") {
        if let Ok((200, body)) = get_text(client, &robots_url).await {
            if let Some(url) = sitemap_from_robots(&body) {
                return SitemapReport {
                    found: true,
                    url: Some(url),
                    source: Some(SitemapSource::RobotsTxt),
                };
            }
        }
    }

    SitemapReport::not_found()
}

// Returns the URL on the first "Sitemap:" line (directive name is
// case-insensitive)
fn sitemap_from_robots(robots: &str) -> Option<String> {
    robots
        .lines()
        .map(str::trim)
        .find(|line| line.to_lowercase().starts_with("sitemap:"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, url)| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
