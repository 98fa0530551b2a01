// src/lib.rs
// =============================================================================
// Library root for the seo-analyzer binary.
//
// Data flow for one run:
//   fetch::fetch_page -> analyzer::run_full_analysis -> report::*
//
// Modules:
// - cli: command-line parsing (clap)
// - config: client settings and analyzer limits
// - client: the shared HTTP client
// - error: NetworkError / ExportError
// - fetch: page download, robots.txt and sitemap discovery
// - checker: link classification, liveness probes, link analysis
// - analyzer: the other checks and the aggregator
// - report: console, JSON, HTML and PDF output
// =============================================================================

pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod report;
