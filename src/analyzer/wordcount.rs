// src/analyzer/wordcount.rs
// =============================================================================
// Rough count of visible words on the page.
//
// Text inside <script>, <style> and <noscript> is dropped; everything else
// is split into runs of word characters (Unicode-aware \w).
// =============================================================================

use std::sync::OnceLock;

use regex::Regex;
use scraper::Html;

use crate::dom;

const HIDDEN_TAGS: [&str; 3] = ["script", "style", "noscript"];

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").unwrap_or_else(|e| panic!("invalid word regex: {e}")))
}

pub fn analyze_word_count(html: &str) -> usize {
    let document = Html::parse_document(html);
    dom::text_nodes_excluding(document.root_element(), &HIDDEN_TAGS)
        .into_iter()
        .map(|text| word_pattern().find_iter(text).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_visible_words() {
        let html = r#"
            <html><head><title>Two words</title>
            <style>body { color: red; }</style></head>
            <body>
              <p>Hello, world! It's 2024.</p>
              <script>var hidden = "not counted";</script>
              <noscript>enable javascript</noscript>
            </body></html>
        "#;
        // Two, words, Hello, world, It, s, 2024
        assert_eq!(analyze_word_count(html), 7);
    }

    #[test]
    fn test_adjacent_elements_do_not_merge_words() {
        assert_eq!(analyze_word_count("<p>one</p><p>two</p>"), 2);
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(analyze_word_count(""), 0);
    }
}
