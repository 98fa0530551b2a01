// src/analyzer/mod.rs
// =============================================================================
// This module runs the selected checks against one fetched page and merges
// their outputs into a single AnalysisResult.
//
// Submodules:
// - checks: the check names and selection parsing
// - basic, wordcount, images: read the already-fetched HTML
// - security, performance: make their own request to the page URL
// - result: the merged document
//
// The link check lives in crate::checker; robots/sitemap in crate::fetch.
//
// Checks run one after another in canonical order. Each one either returns
// its data or records its own failure in an `error` field, so once the page
// has been fetched the run always produces a complete result.
// =============================================================================

mod basic;
mod checks;
mod images;
mod performance;
mod result;
mod security;
mod wordcount;

pub use basic::{analyze_basic, BasicInfo};
pub use checks::{select_checks, Check, UnknownCheck};
pub use images::{analyze_images, ImageAudit, ImageExample};
pub use performance::{analyze_performance, PerformanceReport};
pub use result::AnalysisResult;
pub use security::{analyze_security, SecurityReport};
pub use wordcount::analyze_word_count;

use chrono::Utc;
use log::info;

use crate::checker::analyze_links;
use crate::client::HttpClient;
use crate::config::AnalysisOptions;
use crate::fetch::{check_robots, find_sitemap, PageContent};

// Runs the checks named in `checks` against `page`
//
// Parameters:
//   client: shared HTTP client (used by links, security, performance,
//           robots and sitemap)
//   page: the fetched HTML and the URL it came from; page.url is the base
//         for resolving links and images
//   checks: raw check names, possibly comma-separated; empty = defaults
//   options: per-analyzer limits
pub async fn run_full_analysis<S: AsRef<str>>(
    client: &HttpClient,
    page: &PageContent,
    checks: &[S],
    options: &AnalysisOptions,
) -> AnalysisResult {
    let selected = select_checks(checks);
    let base_url = page.url.as_str();

    let mut result = AnalysisResult::new(base_url, Utc::now().timestamp(), selected.clone());

    for check in selected {
        info!("running check: {}", check);
        match check {
            Check::Basic => result.basic = Some(analyze_basic(&page.html)),
            Check::WordCount => result.word_count = Some(analyze_word_count(&page.html)),
            Check::Links => {
                result.links = Some(
                    analyze_links(
                        client,
                        &page.html,
                        base_url,
                        options.max_check_links,
                        options.probe_concurrency,
                    )
                    .await,
                )
            }
            Check::Images => {
                result.images = Some(analyze_images(
                    &page.html,
                    Some(base_url),
                    options.max_missing_alt_examples,
                    options.max_image_examples,
                ))
            }
            Check::Security => result.security = Some(analyze_security(client, base_url).await),
            Check::Performance => {
                result.performance = Some(analyze_performance(client, base_url).await)
            }
            Check::Robots => result.robots = Some(check_robots(client, base_url).await),
            Check::Sitemap => result.sitemap = Some(find_sitemap(client, base_url).await),
        }
    }

    result
}
