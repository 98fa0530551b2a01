// src/error.rs
// =============================================================================
// Error types shared across the analyzer.
//
// - NetworkError: returned by every operation that touches the network
//   (page fetch, liveness probes, security/performance checks, robots.txt).
//   Callers match on it and turn it into data instead of aborting the run.
// - ExportError: returned by the report export step only.
//
// Both use `thiserror` so they implement std::error::Error and convert into
// anyhow::Error automatically in main.rs.
// =============================================================================

use thiserror::Error;

/// Why a network operation did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("request timed out")]
    Timeout,

    #[error("could not resolve hostname")]
    Dns,

    #[error("TLS/SSL error: {0}")]
    Tls(String),

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered, but not with a success status.
    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl NetworkError {
    /// Status code carried by the error, if the server responded at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

// Categorizes reqwest errors into our variants.
//
// reqwest does not expose DNS or TLS failures as separate kinds, so those two
// are recognized from the messages of the underlying causes. Only the source
// chain is searched: the outer message carries the request URL.
impl From<reqwest::Error> for NetworkError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        let cause = source_chain(&error).to_lowercase();

        if error.is_timeout() {
            NetworkError::Timeout
        } else if error.is_redirect() {
            NetworkError::TooManyRedirects
        } else if error.is_builder() {
            NetworkError::InvalidUrl(message)
        } else if error.is_connect() {
            if cause.contains("dns") || cause.contains("failed to lookup address") {
                NetworkError::Dns
            } else if mentions_tls(&cause) {
                NetworkError::Tls(message)
            } else {
                NetworkError::Connect(message)
            }
        } else if mentions_tls(&cause) {
            NetworkError::Tls(message)
        } else if error.is_body() || error.is_decode() {
            NetworkError::Body(message)
        } else if let Some(status) = error.status() {
            NetworkError::Status(status.as_u16())
        } else {
            NetworkError::Request(message)
        }
    }
}

fn mentions_tls(cause: &str) -> bool {
    cause.contains("certificate") || cause.contains("ssl") || cause.contains("tls")
}

// Messages of everything below `error` (hyper, rustls, getaddrinfo), joined.
fn source_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = String::new();
    let mut source = error.source();
    while let Some(inner) = source {
        if !rendered.is_empty() {
            rendered.push_str(": ");
        }
        rendered.push_str(&inner.to_string());
        source = inner.source();
    }
    rendered
}

/// Failure while writing a report to its destination.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported report format '{0}' (expected one of: console, json, html, pdf)")]
    UnsupportedFormat(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF conversion with '{tool}' failed: {reason}")]
    PdfTool { tool: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_only_for_status_variant() {
        assert_eq!(NetworkError::Status(404).status_code(), Some(404));
        assert_eq!(NetworkError::Timeout.status_code(), None);
        assert_eq!(NetworkError::Dns.status_code(), None);
    }

    #[test]
    fn test_unsupported_format_message_names_the_format() {
        let err = ExportError::UnsupportedFormat("docx".to_string());
        assert!(err.to_string().contains("docx"));
    }

    // Nothing listens on port 1, so each request is refused
    async fn refused(path: &str) -> NetworkError {
        let url = format!("http://127.0.0.1:1{}", path);
        let error = reqwest::Client::new().get(&url).send().await.unwrap_err();
        NetworkError::from(error)
    }

    #[tokio::test]
    async fn test_refused_connection_is_connect_whatever_the_url_says() {
        for path in ["/about", "/dns-guide", "/tls-setup", "/ssl/certificate"] {
            let err = refused(path).await;
            assert!(
                matches!(err, NetworkError::Connect(_)),
                "{} was categorized as {:?}",
                path,
                err
            );
        }
    }

    #[test]
    fn test_source_chain_skips_outer_message() {
        #[derive(Debug, Error)]
        #[error("error sending request for url (http://x/dns-tls)")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::new(std::io::ErrorKind::Other, "tcp connect error"));
        assert_eq!(source_chain(&err), "tcp connect error");
    }
}
