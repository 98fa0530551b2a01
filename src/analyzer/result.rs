// src/analyzer/result.rs
// =============================================================================
// The document one analysis run produces.
//
// A field is present exactly when its check is listed in `checksRun`; absent
// checks are left out of the JSON entirely. Inside each sub-result a missing
// value is written as null.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::basic::BasicInfo;
use super::checks::Check;
use super::images::ImageAudit;
use super::performance::PerformanceReport;
use super::security::SecurityReport;
use crate::checker::LinkSet;
use crate::fetch::{RobotsReport, SitemapReport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    /// Unix time (seconds) when the run started
    pub timestamp: i64,
    pub checks_run: Vec<Check>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageAudit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<RobotsReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<SitemapReport>,
}

impl AnalysisResult {
    pub fn new(url: impl Into<String>, timestamp: i64, checks_run: Vec<Check>) -> Self {
        Self {
            url: url.into(),
            timestamp,
            checks_run,
            basic: None,
            word_count: None,
            links: None,
            images: None,
            security: None,
            performance: None,
            robots: None,
            sitemap: None,
        }
    }

    /// Number of broken links found, internal and external together.
    pub fn broken_link_count(&self) -> usize {
        self.links
            .as_ref()
            .map_or(0, |links| links.broken_internal.len() + links.broken_external.len())
    }
}
