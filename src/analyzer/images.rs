// src/analyzer/images.rs
// =============================================================================
// Image accessibility audit: how many <img> elements lack alt text.
//
// Relative srcs are resolved against the page URL so the report points at
// real resources. Both example lists are capped independently.
// =============================================================================

use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageExample {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAudit {
    pub total_images: usize,
    pub missing_alt_count: usize,
    /// srcs of images without alt text, capped
    pub missing_alt_examples: Vec<String>,
    /// first images on the page with their alt text, capped
    pub examples: Vec<ImageExample>,
}

pub fn analyze_images(
    html: &str,
    base_url: Option<&str>,
    max_missing_alt_examples: usize,
    max_examples: usize,
) -> ImageAudit {
    let document = Html::parse_document(html);
    let base = base_url.and_then(|url| Url::parse(url).ok());

    let mut audit = ImageAudit::default();

    for img in document.select(&dom::selector("img")) {
        audit.total_images += 1;

        let alt = img.value().attr("alt").unwrap_or("").trim().to_string();
        let src = resolve_src(img.value().attr("src").unwrap_or(""), base.as_ref());

        if alt.is_empty() {
            audit.missing_alt_count += 1;
            if audit.missing_alt_examples.len() < max_missing_alt_examples {
                audit.missing_alt_examples.push(src.clone());
            }
        }
        if audit.examples.len() < max_examples {
            audit.examples.push(ImageExample { src, alt });
        }
    }

    audit
}

// Leaves empty and "http..." srcs alone; anything else is joined onto the
// page URL when we have one
fn resolve_src(src: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) if !src.is_empty() && !src.starts_with("http") => base
            .join(src)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| src.to_string()),
        _ => src.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_missing_alt() {
        let html = r#"
            <img src="/logo.png" alt="Logo">
            <img src="photo.jpg">
            <img src="https://cdn.example.com/x.png" alt="   ">
        "#;
        let audit = analyze_images(html, Some("https://example.com/blog/"), 10, 10);
        assert_eq!(audit.total_images, 3);
        assert_eq!(audit.missing_alt_count, 2);
        assert_eq!(
            audit.missing_alt_examples,
            vec![
                "https://example.com/blog/photo.jpg".to_string(),
                "https://cdn.example.com/x.png".to_string(),
            ]
        );
        assert_eq!(
            audit.examples[0],
            ImageExample {
                src: "https://example.com/logo.png".to_string(),
                alt: "Logo".to_string(),
            }
        );
    }

    #[test]
    fn test_caps_are_independent() {
        let html = "<img src=a.png><img src=b.png><img src=c.png>";
        let audit = analyze_images(html, None, 1, 2);
        assert_eq!(audit.missing_alt_count, 3);
        assert_eq!(audit.missing_alt_examples, vec!["a.png".to_string()]);
        assert_eq!(audit.examples.len(), 2);
    }

    #[test]
    fn test_no_images() {
        let audit = analyze_images("<p>none</p>", Some("https://example.com"), 10, 10);
        assert_eq!(audit, ImageAudit::default());
    }
}
