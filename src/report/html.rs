// src/report/html.rs
// =============================================================================
// Standalone HTML report. Also the input for PDF conversion.
//
// Every value that came from the analyzed page is escaped before it is
// written into the document.
// =============================================================================

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::analyzer::AnalysisResult;
use crate::checker::BrokenLink;

pub fn render_html(result: &AnalysisResult) -> String {
    let mut s: Vec<String> = Vec::new();

    s.push("<!DOCTYPE html>".to_string());
    s.push("<html><head><meta charset=\"utf-8\"><title>SEO Report</title>".to_string());
    s.push(
        "<style>body{font-family:sans-serif;max-width:60em;margin:2em auto}\
         td,th{padding:.2em .6em;text-align:left}.broken{color:#b00}</style>"
            .to_string(),
    );
    s.push("</head><body>".to_string());
    s.push(format!("<h1>SEO Analyzer Report for {}</h1>", text(&result.url)));

    let checks: Vec<&str> = result.checks_run.iter().map(|c| c.name()).collect();
    s.push(format!("<p>Checks run: {}</p>", text(&checks.join(", "))));

    if let Some(basic) = &result.basic {
        s.push("<h2>Meta &amp; Headings</h2><ul>".to_string());
        s.push(format!("<li><strong>Title:</strong> {}</li>", text(&basic.title)));
        s.push(format!("<li><strong>Title length:</strong> {}</li>", basic.title_length));
        s.push(format!(
            "<li><strong>Meta description:</strong> {}</li>",
            text(&basic.meta_description)
        ));
        s.push(format!(
            "<li><strong>Meta description length:</strong> {}</li>",
            basic.meta_description_length
        ));
        s.push(format!("<li><strong>H1 count:</strong> {}</li>", basic.h1.len()));
        s.push(format!("<li><strong>H2 count:</strong> {}</li>", basic.h2.len()));
        s.push("</ul>".to_string());
    }

    if let Some(word_count) = result.word_count {
        s.push(format!("<h2>Word Count</h2><p>{}</p>", word_count));
    }

    if let Some(links) = &result.links {
        s.push("<h2>Links</h2>".to_string());
        s.push(format!("<p>Total on page: {}</p>", links.total_links_on_page));
        s.push(format!(
            "<p>Internal: {} &middot; External: {}</p>",
            links.internal_links.len(),
            links.external_links.len()
        ));
        s.push("<h3>Broken Internal</h3>".to_string());
        push_broken(&mut s, &links.broken_internal);
        s.push("<h3>Broken External</h3>".to_string());
        push_broken(&mut s, &links.broken_external);
    }

    if let Some(images) = &result.images {
        s.push("<h2>Images</h2>".to_string());
        s.push(format!(
            "<p>Total images: {} &middot; Missing alt: {}</p>",
            images.total_images, images.missing_alt_count
        ));
        if !images.missing_alt_examples.is_empty() {
            s.push("<ul>".to_string());
            for src in &images.missing_alt_examples {
                s.push(format!("<li>{}</li>", text(src)));
            }
            s.push("</ul>".to_string());
        }
    }

    if let Some(security) = &result.security {
        s.push("<h2>Security</h2>".to_string());
        s.push(format!(
            "<p>HTTPS: {}, Status: {}</p>",
            security.https,
            or_none(security.status_code)
        ));
        if let Some(error) = &security.error {
            s.push(format!("<p class=\"broken\">Error: {}</p>", text(error)));
        }
        if !security.headers.is_empty() {
            s.push("<table><tr><th>Header</th><th>Value</th></tr>".to_string());
            for (name, value) in &security.headers {
                s.push(format!("<tr><td>{}</td><td>{}</td></tr>", text(name), text(value)));
            }
            s.push("</table>".to_string());
        }
    }

    if let Some(performance) = &result.performance {
        s.push("<h2>Performance</h2>".to_string());
        s.push(format!(
            "<p>TTFB: {}s &middot; Total download: {}s</p>",
            or_none(performance.time_to_first_byte),
            or_none(performance.total_download)
        ));
        if let Some(error) = &performance.error {
            s.push(format!("<p class=\"broken\">Error: {}</p>", text(error)));
        }
    }

    if let Some(robots) = &result.robots {
        s.push("<h2>robots.txt</h2>".to_string());
        s.push(format!("<p>Found: {}</p>", robots.found));
        if let Some(content) = &robots.content {
            s.push(format!("<pre>{}</pre>", text(content)));
        }
    }

    if let Some(sitemap) = &result.sitemap {
        s.push("<h2>Sitemap</h2>".to_string());
        match &sitemap.url {
            Some(url) => s.push(format!(
                "<p>Found: <a href=\"{}\">{}</a></p>",
                attr(url),
                text(url)
            )),
            None => s.push("<p>Found: false</p>".to_string()),
        }
    }

    s.push("</body></html>".to_string());
    s.join("\n")
}

// Broken links are shown as {url, status}
fn push_broken(s: &mut Vec<String>, broken: &[BrokenLink]) {
    if broken.is_empty() {
        s.push("<p>None</p>".to_string());
        return;
    }
    s.push("<ul class=\"broken\">".to_string());
    for link in broken {
        s.push(format!(
            "<li>{{url: {}, status: {}}}</li>",
            text(&link.url),
            or_none(link.status)
        ));
    }
    s.push("</ul>".to_string());
}

fn or_none<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}
