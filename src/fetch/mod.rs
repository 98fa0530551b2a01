// src/fetch/mod.rs
// =============================================================================
// This module handles downloading things the analysis starts from.
//
// Submodules:
// - page: fetches the target page itself (a failure here ends the run)
// - robots: robots.txt and sitemap discovery, reported as auxiliary data only
// =============================================================================

mod page;
mod robots;

pub use page::{fetch_page, PageContent};
pub use robots::{check_robots, find_sitemap, RobotsReport, SitemapReport, SitemapSource};
