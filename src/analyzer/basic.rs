// src/analyzer/basic.rs
// =============================================================================
// Basic on-page metadata: title, meta description and h1/h2 headings.
// =============================================================================

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::dom;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub title: String,
    pub title_length: usize,
    pub meta_description: String,
    pub meta_description_length: usize,
    pub h1: Vec<String>,
    pub h2: Vec<String>,
}

/// Extracts title, meta description and headings from `html`.
///
/// Missing elements yield empty strings and lists; lengths are counted in
/// characters, not bytes.
pub fn analyze_basic(html: &str) -> BasicInfo {
    let document = Html::parse_document(html);

    let title = document
        .select(&dom::selector("title"))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    // <meta name="description">, name compared without regard to case
    let meta_description = document
        .select(&dom::selector("meta[name]"))
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
        })
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    let headings = |css: &'static str| -> Vec<String> {
        document
            .select(&dom::selector(css))
            .map(dom::compact_text)
            .collect()
    };

    BasicInfo {
        title_length: title.chars().count(),
        meta_description_length: meta_description.chars().count(),
        h1: headings("h1"),
        h2: headings("h2"),
        title,
        meta_description,
    }
}
