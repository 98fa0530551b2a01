// src/dom.rs
// =============================================================================
// Small helpers on top of the `scraper` crate, shared by the analyzers.
//
// scraper parses with html5ever, which follows the browser parsing algorithm
// and recovers from any malformed input, so parsing itself never fails.
// =============================================================================

use scraper::{ElementRef, Node, Selector};

// Builds a selector from a CSS string that is a constant in our code.
//
// Selector::parse only fails on invalid CSS, and every caller passes a
// literal, so a failure here is a programmer error.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e:?}"))
}

/// Text of an element with each text node trimmed and glued together,
/// e.g. `<h1> Hello <b>World</b></h1>` -> "HelloWorld".
pub fn compact_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Trimmed text nodes of `root`, skipping anything inside the given tags.
pub fn text_nodes_excluding<'a>(root: ElementRef<'a>, skip: &'a [&'a str]) -> Vec<&'a str> {
    root.descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some((node, text)),
            _ => None,
        })
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| skip.contains(&el.name()))
            })
        })
        .map(|(_, text)| text.trim())
        .filter(|text| !text.is_empty())
        .collect()
}
