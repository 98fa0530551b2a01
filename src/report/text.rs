// src/report/text.rs
// =============================================================================
// Plain-text report, used for the console and as a readable summary.
//
// One labeled section per check that ran, in the order the checks ran.
// =============================================================================

use crate::analyzer::AnalysisResult;
use crate::checker::BrokenLink;

pub fn format_text(result: &AnalysisResult) -> String {
    let mut lines = vec![format!("SEO Analysis Report for: {}", result.url), String::new()];

    if let Some(basic) = &result.basic {
        lines.push("=== Basic Info ===".to_string());
        lines.push(format!("Title: {} (length: {})", basic.title, basic.title_length));
        lines.push(format!(
            "Meta Description: {} (length: {})",
            basic.meta_description, basic.meta_description_length
        ));
        lines.push(format!("H1 tags: {}", join_or_none(&basic.h1)));
        lines.push(format!("H2 tags: {}", join_or_none(&basic.h2)));
        lines.push(String::new());
    }

    if let Some(word_count) = result.word_count {
        lines.push(format!("Word count: {}", word_count));
        lines.push(String::new());
    }

    if let Some(links) = &result.links {
        lines.push("=== Links ===".to_string());
        lines.push(format!("Total links on page: {}", links.total_links_on_page));
        lines.push(format!(
            "Internal links: {}, Broken: {}",
            links.internal_links.len(),
            links.broken_internal.len()
        ));
        push_broken(&mut lines, &links.broken_internal);
        lines.push(format!(
            "External links: {}, Broken: {}",
            links.external_links.len(),
            links.broken_external.len()
        ));
        push_broken(&mut lines, &links.broken_external);
        lines.push(String::new());
    }

    if let Some(images) = &result.images {
        lines.push("=== Images ===".to_string());
        lines.push(format!("Total images: {}", images.total_images));
        lines.push(format!("Images missing alt: {}", images.missing_alt_count));
        if !images.missing_alt_examples.is_empty() {
            lines.push("Examples of missing alt:".to_string());
            for src in &images.missing_alt_examples {
                lines.push(format!(" - {}", src));
            }
        }
        lines.push(String::new());
    }

    if let Some(security) = &result.security {
        lines.push("=== Security ===".to_string());
        lines.push(format!("HTTPS: {}", security.https));
        lines.push(format!("Status code: {}", or_none(security.status_code)));
        if let Some(error) = &security.error {
            lines.push(format!("Error: {}", error));
        }
        lines.push(String::new());
    }

    if let Some(performance) = &result.performance {
        lines.push("=== Performance ===".to_string());
        lines.push(format!(
            "Time to first byte: {} sec",
            or_none(performance.time_to_first_byte)
        ));
        lines.push(format!(
            "Total download time: {} sec",
            or_none(performance.total_download)
        ));
        if let Some(error) = &performance.error {
            lines.push(format!("Error: {}", error));
        }
        lines.push(String::new());
    }

    if let Some(robots) = &result.robots {
        lines.push("=== robots.txt ===".to_string());
        lines.push(format!("Found: {}", robots.found));
        if let Some(url) = &robots.url {
            lines.push(format!("URL: {}", url));
        }
        if let Some(error) = &robots.error {
            lines.push(format!("Error: {}", error));
        }
        lines.push(String::new());
    }

    if let Some(sitemap) = &result.sitemap {
        lines.push("=== Sitemap ===".to_string());
        lines.push(format!("Found: {}", sitemap.found));
        if let Some(url) = &sitemap.url {
            lines.push(format!("URL: {}", url));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn or_none<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

fn push_broken(lines: &mut Vec<String>, broken: &[BrokenLink]) {
    for link in broken {
        lines.push(format!("  - {} ({})", link.url, or_none(link.status)));
    }
}
