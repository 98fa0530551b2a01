// src/checker/classify.rs
// =============================================================================
// Decides what kind of link an href is.
//
// Rules, applied to the trimmed href:
// - "mailto:", "javascript:" or "#..." -> Ignored
// - starts with "http://" or "https://" -> Internal if its network location
//   (host and port) equals the page's, External otherwise. The href is kept
//   as written; no scheme or "www." normalization happens.
// - anything else is relative (including "//host/x" and "/path"): it is
//   resolved against the page URL and always counts as Internal, even when
//   resolution lands on another host.
//
// Malformed hrefs never produce an error. When resolution fails the raw
// string is used as-is.
// =============================================================================

use url::Url;

/// Where a link points, relative to the page it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    Internal(String),
    External(String),
    Ignored,
}

const IGNORED_PREFIXES: [&str; 3] = ["mailto:", "javascript:", "#"];

/// Classifies `raw_href` as found on the page at `base_url`.
pub fn classify(base_url: &str, raw_href: &str) -> LinkKind {
    let href = raw_href.trim();

    if IGNORED_PREFIXES.iter().any(|prefix| href.starts_with(prefix)) {
        return LinkKind::Ignored;
    }

    if is_absolute_http(href) {
        return if network_location(href) == network_location(base_url) {
            LinkKind::Internal(href.to_string())
        } else {
            LinkKind::External(href.to_string())
        };
    }

    LinkKind::Internal(resolve(base_url, href))
}

fn is_absolute_http(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

// Resolves a relative reference against the base URL
//
// Examples:
//   base = "https://example.com/a/page"
//   href = "/docs"        -> "https://example.com/docs"
//   href = "./x.html"     -> "https://example.com/a/x.html"
//   href = "//cdn.io/lib" -> "https://cdn.io/lib"
fn resolve(base_url: &str, href: &str) -> String {
    Url::parse(base_url)
        .and_then(|base| base.join(href))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Userinfo, host and explicit port, e.g. "example.com", "localhost:8080"
/// or "user@example.com". Hosts are lowercased and default ports dropped.
///
/// Falls back to the raw authority text when the URL does not parse, so two
/// equally broken URLs with the same authority still compare equal.
fn network_location(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return raw_authority(url),
    };
    let host = parsed.host_str()?;

    let mut location = String::new();
    if !parsed.username().is_empty() || parsed.password().is_some() {
        location.push_str(parsed.username());
        if let Some(password) = parsed.password() {
            location.push(':');
            location.push_str(password);
        }
        location.push('@');
    }
    location.push_str(host);
    if let Some(port) = parsed.port() {
        location.push_str(&format!(":{}", port));
    }
    Some(location)
}

fn raw_authority(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    (!authority.is_empty()).then(|| authority.to_string())
}
