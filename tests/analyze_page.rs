// End-to-end: fetch a page from a local server, analyze it, render reports.

use seo_analyzer::analyzer::{run_full_analysis, AnalysisResult, Check};
use seo_analyzer::client::HttpClient;
use seo_analyzer::config::{AnalysisOptions, ClientConfig};
use seo_analyzer::error::NetworkError;
use seo_analyzer::fetch::fetch_page;
use seo_analyzer::report::{export, format_text, render_html, to_json, ReportFormat};

const PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Example Shop</title>
  <meta name="description" content="Everything you need">
</head>
<body>
  <h1>Welcome</h1>
  <h2>Products</h2>
  <p>We sell useful things at fair prices.</p>
  <a href="#top">top</a>
  <a href="mailto:shop@example.com">mail</a>
  <a href="/products">products</a>
  <a href="/old-page">old</a>
  <a href="/products">products again</a>
  <a href="http://127.0.0.1:1/partner">partner</a>
  <img src="/logo.png" alt="Shop logo">
  <img src="/banner.jpg">
</body>
</html>"##;

// Mocks stay registered only while their handles are alive
async fn serve_page() -> (mockito::ServerGuard, Vec<mockito::Mock>) {
    let mut server = mockito::Server::new_async().await;
    let page = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(PAGE)
        .create_async()
        .await;
    let products = server
        .mock("HEAD", "/products")
        .with_status(200)
        .create_async()
        .await;
    let old_page = server
        .mock("HEAD", "/old-page")
        .with_status(404)
        .create_async()
        .await;
    (server, vec![page, products, old_page])
}

#[tokio::test]
async fn full_run_over_local_server() {
    let (server, _mocks) = serve_page().await;
    let base = format!("{}/", server.url());

    let client = HttpClient::new(ClientConfig::default()).unwrap();
    let page = fetch_page(&client, &base).await.unwrap();

    let none: [&str; 0] = [];
    let result = run_full_analysis(&client, &page, &none, &AnalysisOptions::default()).await;

    assert_eq!(result.checks_run, Check::DEFAULT.to_vec());

    let basic = result.basic.as_ref().unwrap();
    assert_eq!(basic.title, "Example Shop");
    assert_eq!(basic.meta_description, "Everything you need");

    let links = result.links.as_ref().unwrap();
    assert_eq!(links.total_links_on_page, 6);
    assert_eq!(links.internal_links.len(), 2);
    assert_eq!(links.external_links.len(), 1);
    assert_eq!(links.broken_internal.len(), 1);
    assert_eq!(links.broken_internal[0].url, format!("{}old-page", base));
    assert_eq!(links.broken_internal[0].status, Some(404));
    assert_eq!(links.broken_external.len(), 1);
    assert_eq!(links.broken_external[0].status, None);

    let images = result.images.as_ref().unwrap();
    assert_eq!(images.total_images, 2);
    assert_eq!(images.missing_alt_examples, vec![format!("{}banner.jpg", base)]);

    assert_eq!(result.security.as_ref().unwrap().status_code, Some(200));
    assert!(result.performance.as_ref().unwrap().total_download.is_some());

    // every renderer accepts the result
    let json = to_json(&result, true).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
    assert!(format_text(&result).contains("Internal links: 2, Broken: 1"));
    assert!(render_html(&result).contains("status: 404"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    export(&result, ReportFormat::Html, &path, "wkhtmltopdf").unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn fetch_failure_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(503)
        .create_async()
        .await;

    let client = HttpClient::new(ClientConfig::default()).unwrap();
    let err = fetch_page(&client, &format!("{}/", server.url()))
        .await
        .unwrap_err();
    assert_eq!(err, NetworkError::Status(503));
}

#[tokio::test]
async fn unsupported_format_after_analysis() {
    let (server, _mocks) = serve_page().await;
    let client = HttpClient::new(ClientConfig::default()).unwrap();
    let page = fetch_page(&client, &server.url()).await.unwrap();

    let result = run_full_analysis(&client, &page, &["basic"], &AnalysisOptions::default()).await;
    assert!(result.basic.is_some());

    assert!("xml".parse::<ReportFormat>().is_err());
}
