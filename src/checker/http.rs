// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Follows redirects; a final status below 400 means "live"
// - Any transport failure (timeout, DNS, TLS, refused connection) means
//   "broken" with no status code. Probing never returns an error.
// - Batches are capped and run with a bounded number of requests in flight
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Result<T, E>: the client hands back Result<Response, NetworkError> and
//   we match on it here
// - Streams: For processing many items concurrently
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffered()
use log::debug;
use serde::{Deserialize, Serialize};

use crate::client::HttpClient;
use crate::error::NetworkError;

// Result of probing a single URL
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    /// The URL that was probed
    pub url: String,
    /// True only when a response arrived with a status below 400
    pub is_live: bool,
    /// Final status code, or None when no response was received
    pub status_code: Option<u16>,
}

impl ProbeOutcome {
    // Turns the raw request result into an outcome
    //
    // HTTP status codes:
    // - 200-399: live (3xx only shows up if the redirect limit stopped us)
    // - 400-599: broken, status code kept
    // - no response at all: broken, no status code
    fn from_result(url: String, result: Result<u16, NetworkError>) -> Self {
        match result {
            Ok(code) => ProbeOutcome {
                url,
                is_live: code < 400,
                status_code: Some(code),
            },
            Err(error) => {
                debug!("probe of {} failed: {}", url, error);
                ProbeOutcome {
                    url,
                    is_live: false,
                    status_code: error.status_code(),
                }
            }
        }
    }
}

// Probes a single link
//
// Uses the client's probe timeout. Never fails: errors become a broken
// outcome.
pub async fn probe(client: &HttpClient, url: &str) -> ProbeOutcome {
    let result = client
        .head(url, client.config().probe_timeout)
        .await
        .map(|response| response.status().as_u16());

    ProbeOutcome::from_result(url.to_string(), result)
}

// Probes the first `limit` URLs
//
// URLs past the limit are not touched. Up to `concurrency` probes run at
// once, but the returned Vec is in input order, not completion order
// (.buffered() rather than .buffer_unordered()).
pub async fn probe_all<I, S>(
    client: &HttpClient,
    urls: I,
    limit: usize,
    concurrency: usize,
) -> Vec<ProbeOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let urls: Vec<String> = urls
        .into_iter()
        .take(limit)
        .map(|url| url.as_ref().to_string())
        .collect();

    debug!("probing {} link(s), {} at a time", urls.len(), concurrency.max(1));

    let futures = urls.into_iter().map(|url| async move { probe(client, &url).await });

    stream::iter(futures)
        .buffered(concurrency.max(1))
        .collect()
        .await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at the same time
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the order the futures were created
//
// 2. Why does probe() borrow the client?
//    - The futures live only as long as probe_all() is awaited
//    - So they can borrow &HttpClient instead of cloning it per task
//
// 3. IntoIterator<Item = S> where S: AsRef<str>
//    - Lets callers pass a Vec<String>, an &IndexSet<String>, or a &[&str]
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn client() -> HttpClient {
        HttpClient::new(ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_outcome_from_status() {
        let ok = ProbeOutcome::from_result("u".to_string(), Ok(200));
        assert!(ok.is_live);
        assert_eq!(ok.status_code, Some(200));

        let not_found = ProbeOutcome::from_result("u".to_string(), Ok(404));
        assert!(!not_found.is_live);
        assert_eq!(not_found.status_code, Some(404));

        let edge = ProbeOutcome::from_result("u".to_string(), Ok(399));
        assert!(edge.is_live);
    }

    #[test]
    fn test_outcome_from_transport_error() {
        let outcome = ProbeOutcome::from_result("u".to_string(), Err(NetworkError::Timeout));
        assert!(!outcome.is_live);
        assert_eq!(outcome.status_code, None);
    }

    #[tokio::test]
    async fn test_probe_live_and_broken() {
        let mut server = mockito::Server::new_async().await;
        let _ok = server.mock("HEAD", "/ok").with_status(200).create_async().await;
        let _missing = server
            .mock("HEAD", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = client();
        let ok = probe(&client, &format!("{}/ok", server.url())).await;
        assert!(ok.is_live);

        let missing = probe(&client, &format!("{}/missing", server.url())).await;
        assert!(!missing.is_live);
        assert_eq!(missing.status_code, Some(404));
    }

    #[tokio::test]
    async fn test_probe_follows_redirects() {
        let mut server = mockito::Server::new_async().await;
        let target = format!("{}/new", server.url());
        let _old = server
            .mock("HEAD", "/old")
            .with_status(301)
            .with_header("location", target.as_str())
            .create_async()
            .await;
        let _new = server.mock("HEAD", "/new").with_status(200).create_async().await;

        let outcome = probe(&client(), &format!("{}/old", server.url())).await;
        assert!(outcome.is_live);
        assert_eq!(outcome.status_code, Some(200));
    }

    #[tokio::test]
    async fn test_probe_unreachable_host_is_broken_without_status() {
        let outcome = probe(&client(), "http://127.0.0.1:1/").await;
        assert_eq!(
            outcome,
            ProbeOutcome {
                url: "http://127.0.0.1:1/".to_string(),
                is_live: false,
                status_code: None,
            }
        );
    }

    #[tokio::test]
    async fn test_probe_all_respects_limit_and_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("HEAD", mockito::Matcher::Regex(r"^/p\d+$".to_string()))
            .with_status(200)
            .expect(3)
            .create_async()
            .await;

        let urls: Vec<String> = (0..8).map(|i| format!("{}/p{}", server.url(), i)).collect();
        let outcomes = probe_all(&client(), &urls, 3, 2).await;

        mock.assert_async().await;
        assert_eq!(outcomes.len(), 3);
        let probed: Vec<&str> = outcomes.iter().map(|o| o.url.as_str()).collect();
        assert_eq!(probed, vec![urls[0].as_str(), urls[1].as_str(), urls[2].as_str()]);
    }

    #[tokio::test]
    async fn test_probe_all_under_limit_probes_everything() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("HEAD", mockito::Matcher::Any)
            .with_status(204)
            .create_async()
            .await;

        let urls = vec![format!("{}/a", server.url()), format!("{}/b", server.url())];
        let outcomes = probe_all(&client(), &urls, 50, 10).await;
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.is_live));
    }

    #[tokio::test]
    async fn test_probe_all_zero_concurrency_still_runs() {
        let outcomes = probe_all(&client(), ["http://127.0.0.1:1/"], 5, 0).await;
        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].is_live);
    }
}
