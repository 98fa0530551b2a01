// src/analyzer/security.rs
// =============================================================================
// Transport security check.
//
// Re-requests the target URL on its own (it does not reuse the fetched page)
// and records whether it is served over HTTPS, the status code and the
// response headers. Failures land in `error`; nothing is propagated.
// =============================================================================

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::HttpClient;
use crate::error::NetworkError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub https: bool,
    pub status_code: Option<u16>,
    /// Response headers, sorted by name
    pub headers: BTreeMap<String, String>,
    pub error: Option<String>,
}

pub async fn analyze_security(client: &HttpClient, url: &str) -> SecurityReport {
    match fetch_headers(client, url).await {
        Ok((status_code, headers)) => SecurityReport {
            https: is_https(url),
            status_code: Some(status_code),
            headers,
            error: None,
        },
        Err(e) => {
            warn!("security check of {} failed: {}", url, e);
            SecurityReport {
                error: Some(e.to_string()),
                ..SecurityReport::default()
            }
        }
    }
}

async fn fetch_headers(
    client: &HttpClient,
    url: &str,
) -> Result<(u16, BTreeMap<String, String>), NetworkError> {
    let response = client.get(url, client.config().security_timeout).await?;

    // Repeated headers (e.g. set-cookie) are joined the way HTTP allows
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in response.headers() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    Ok((response.status().as_u16(), headers))
}

fn is_https(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.scheme() == "https")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_is_https() {
        assert!(is_https("https://example.com"));
        assert!(!is_https("http://example.com"));
        assert!(!is_https("garbage"));
    }

    #[tokio::test]
    async fn test_collects_status_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("strict-transport-security", "max-age=63072000")
            .with_header("x-frame-options", "DENY")
            .create_async()
            .await;

        let client = HttpClient::new(ClientConfig::default()).unwrap();
        let report = analyze_security(&client, &format!("{}/", server.url())).await;

        assert!(!report.https); // mockito serves plain http
        assert_eq!(report.status_code, Some(200));
        assert_eq!(
            report.headers.get("strict-transport-security").map(String::as_str),
            Some("max-age=63072000")
        );
        assert_eq!(report.headers.get("x-frame-options").map(String::as_str), Some("DENY"));
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn test_error_is_captured() {
        let client = HttpClient::new(ClientConfig::default()).unwrap();
        let report = analyze_security(&client, "http://127.0.0.1:1/").await;
        assert!(!report.https);
        assert_eq!(report.status_code, None);
        assert!(report.error.is_some());
    }
}
