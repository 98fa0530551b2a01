// src/config.rs
// =============================================================================
// Immutable configuration values for one analysis run.
//
// - ClientConfig: user agent, timeouts and redirect limit used by every
//   network request. Built once in main.rs and moved into HttpClient.
// - AnalysisOptions: the independent caps each analyzer applies.
//
// There are no config files; both values come from command-line flags and
// fall back to the defaults below.
// =============================================================================

use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SEO-Analyzer/1.0)";

/// Settings shared by every HTTP request the analyzer makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub user_agent: String,
    /// Initial page fetch.
    pub fetch_timeout: Duration,
    /// Each link liveness probe.
    pub probe_timeout: Duration,
    pub security_timeout: Duration,
    pub performance_timeout: Duration,
    /// robots.txt and sitemap lookups.
    pub aux_timeout: Duration,
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout: Duration::from_secs(12),
            probe_timeout: Duration::from_secs(6),
            security_timeout: Duration::from_secs(8),
            performance_timeout: Duration::from_secs(12),
            aux_timeout: Duration::from_secs(8),
            max_redirects: 10,
        }
    }
}

impl ClientConfig {
    /// Overrides the page fetch and performance timeouts, which are the two
    /// requests that download a full page.
    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self.performance_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Limits applied by the individual analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How many internal and how many external links get probed.
    pub max_check_links: usize,
    /// Probes in flight at once.
    pub probe_concurrency: usize,
    pub max_missing_alt_examples: usize,
    pub max_image_examples: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_check_links: 50,
            probe_concurrency: 10,
            max_missing_alt_examples: 10,
            max_image_examples: 10,
        }
    }
}
