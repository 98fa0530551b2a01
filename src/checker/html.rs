// src/checker/html.rs
// =============================================================================
// This module extracts links from an HTML page and checks them.
//
// Steps:
// 1. Find every <a> with a non-empty href (all of them count towards
//    totalLinksOnPage, even the ones we end up ignoring)
// 2. Classify each href (see classify.rs) into the internal or external set
// 3. Probe the first N links of each set and keep the broken ones
//
// The sets are IndexSets: duplicates collapse, and iteration follows the
// order the links first appear in the document. "The first N links" is
// therefore the first N distinct links in document order.
//
// Rust concepts:
// - Iterators and closures
// - async: probing happens over the network
// =============================================================================

use indexmap::IndexSet;
use log::info;
use scraper::Html;
use serde::{Deserialize, Serialize};

use super::classify::{classify, LinkKind};
use super::http::{probe_all, ProbeOutcome};
use crate::client::HttpClient;
use crate::dom;

/// A link that failed its liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    pub url: String,
    /// Status code of the final response, or None if nothing came back
    pub status: Option<u16>,
}

impl From<ProbeOutcome> for BrokenLink {
    fn from(outcome: ProbeOutcome) -> Self {
        BrokenLink {
            url: outcome.url,
            status: outcome.status_code,
        }
    }
}

/// Links found on a page, split by destination, plus the broken ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSet {
    pub total_links_on_page: usize,
    pub internal_links: IndexSet<String>,
    pub external_links: IndexSet<String>,
    pub broken_internal: Vec<BrokenLink>,
    pub broken_external: Vec<BrokenLink>,
}

// Extracts and classifies all links from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the URL of the page (for resolving relative links)
//
// Returns: a LinkSet with nothing probed yet (broken lists empty)
//
// Example:
//   html = "<a href='#top'>x</a><a href='/p'>y</a><a href='https://ext.com'>z</a>"
//   base_url = "https://site.com"
//   total = 3, internal = {"https://site.com/p"}, external = {"https://ext.com"}
pub fn extract_links(html: &str, base_url: &str) -> LinkSet {
    let document = Html::parse_document(html);
    let selector = dom::selector("a[href]");

    let mut links = LinkSet::default();

    let hrefs = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty());

    for href in hrefs {
        links.total_links_on_page += 1;
        match classify(base_url, href) {
            LinkKind::Internal(url) => {
                links.internal_links.insert(url);
            }
            LinkKind::External(url) => {
                links.external_links.insert(url);
            }
            LinkKind::Ignored => {}
        }
    }

    links
}

// Extracts links and probes the first `max_check_links` of each kind
//
// Issues at most 2 * max_check_links requests. A failed probe is final for
// this run; there are no retries.
pub async fn analyze_links(
    client: &HttpClient,
    html: &str,
    base_url: &str,
    max_check_links: usize,
    concurrency: usize,
) -> LinkSet {
    let mut links = extract_links(html, base_url);

    info!(
        "found {} link(s) on {}: {} internal, {} external",
        links.total_links_on_page,
        base_url,
        links.internal_links.len(),
        links.external_links.len()
    );

    links.broken_internal =
        broken_only(probe_all(client, &links.internal_links, max_check_links, concurrency).await);
    links.broken_external =
        broken_only(probe_all(client, &links.external_links, max_check_links, concurrency).await);

    links
}

fn broken_only(outcomes: Vec<ProbeOutcome>) -> Vec<BrokenLink> {
    outcomes
        .into_iter()
        .filter(|outcome| !outcome.is_live)
        .map(BrokenLink::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_extract_mixed_links() {
        let html = r##"<html><a href="#top">x</a><a href="/p">y</a><a href="https://ext.com">z</a></html>"##;
        let links = extract_links(html, "https://site.com");
        assert_eq!(links.total_links_on_page, 3);
        assert_eq!(
            links.internal_links.iter().collect::<Vec<_>>(),
            vec!["https://site.com/p"]
        );
        assert_eq!(
            links.external_links.iter().collect::<Vec<_>>(),
            vec!["https://ext.com"]
        );
    }

    #[test]
    fn test_ignored_links_count_toward_total_only() {
        let html = r##"
            <a href="mailto:a@b.c">mail</a>
            <a href="javascript:void(0)">js</a>
            <a href="#">top</a>
            <a href="/about">about</a>
        "##;
        let links = extract_links(html, "https://example.org/");
        assert_eq!(links.total_links_on_page, 4);
        assert_eq!(links.internal_links.len(), 1);
        assert!(links.external_links.is_empty());
        assert!(links.total_links_on_page >= links.internal_links.len() + links.external_links.len());
    }

    #[test]
    fn test_empty_and_missing_hrefs_are_not_counted() {
        let html = r#"<a>no href</a><a href="">empty</a><a href="/x">x</a>"#;
        let links = extract_links(html, "https://example.org/");
        assert_eq!(links.total_links_on_page, 1);
    }

    #[test]
    fn test_duplicates_collapse_in_document_order() {
        let html = r#"
            <a href="/b">b</a>
            <a href="/a">a</a>
            <a href="https://example.org/b">b again</a>
        "#;
        let links = extract_links(html, "https://example.org/");
        assert_eq!(links.total_links_on_page, 3);
        assert_eq!(
            links.internal_links.iter().collect::<Vec<_>>(),
            vec!["https://example.org/b", "https://example.org/a"]
        );
    }

    #[tokio::test]
    async fn test_analyze_links_reports_broken_links() {
        let mut server = mockito::Server::new_async().await;
        let _ok = server.mock("HEAD", "/ok").with_status(200).create_async().await;
        let _gone = server
            .mock("HEAD", "/gone")
            .with_status(404)
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let html = r#"
            <a href="/ok">ok</a>
            <a href="/gone">gone</a>
            <a href="http://127.0.0.1:1/down">down</a>
        "#;

        let client = HttpClient::new(ClientConfig::default()).unwrap();
        let links = analyze_links(&client, html, &base, 50, 4).await;

        assert_eq!(
            links.broken_internal,
            vec![BrokenLink {
                url: format!("{}gone", base),
                status: Some(404),
            }]
        );
        assert_eq!(
            links.broken_external,
            vec![BrokenLink {
                url: "http://127.0.0.1:1/down".to_string(),
                status: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_analyze_links_only_probes_prefix() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("HEAD", mockito::Matcher::Any)
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let html = r#"<a href="/1">1</a><a href="/2">2</a><a href="/3">3</a><a href="/4">4</a>"#;

        let client = HttpClient::new(ClientConfig::default()).unwrap();
        let links = analyze_links(&client, html, &base, 2, 10).await;

        mock.assert_async().await;
        assert_eq!(links.internal_links.len(), 4);
        let broken: Vec<&str> = links.broken_internal.iter().map(|b| b.url.as_str()).collect();
        assert_eq!(broken, vec![format!("{}1", base), format!("{}2", base)]);
    }
}
