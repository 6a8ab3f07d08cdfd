//! Integration tests for the harvesting pipeline
//!
//! These tests use wiremock to create mock storefronts and run the full
//! fetch/extract/write cycle end-to-end over plain HTTP.

use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use storefront_harvester::config::Config;
use storefront_harvester::crawler::{collect_domain, harvest, run_batch, HttpFetcher};
use storefront_harvester::state::{CollectionStage, Product};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration that talks plain HTTP with no throttle
fn create_test_config() -> Config {
    let mut config = Config::default();
    config.crawler.scheme = "http".to_string();
    config.crawler.throttle_delay = 0.0;
    config
}

/// "127.0.0.1:12345" from "http://127.0.0.1:12345"
fn domain_of(server: &MockServer) -> String {
    let url = url::Url::parse(&server.uri()).expect("Failed to parse base URL");
    format!(
        "{}:{}",
        url.host_str().expect("Failed to extract host"),
        url.port().expect("Mock server has a port")
    )
}

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Storefront with two emails on its contact pages and three product links,
/// one of which has an empty payload
async fn start_storefront() -> MockServer {
    let server = MockServer::start().await;

    mount_html(
        &server,
        "/",
        r#"<html><body>Some contact jozo.hossa@sufio.com
            <a href="https://www.facebook.com/Sufio">Facebook</a>
            <img src="/assets/logo@2x.png"></body></html>"#,
    )
    .await;
    mount_html(
        &server,
        "/pages/contact",
        r#"<html><body>Some contact Marian.Gaborik@Sufio.com
            <a href="https://twitter.com/sufio">Twitter</a>
            Also jozo.hossa@sufio.com</body></html>"#,
    )
    .await;
    mount_html(
        &server,
        "/collections/all",
        r#"<html><body><div class="product-list">
            <div class="product-item"><a href="/products/mug"></a></div>
            <div class="product-item"><a href="/products/cap/"></a></div>
            <div class="product-item"><a href="/products/ghost"></a></div>
        </div></body></html>"#,
    )
    .await;
    mount_json(
        &server,
        "/products/mug.json",
        json!({"product": {"title": "Mug", "images": [{"src": "https://cdn.sufio.com/mug.png"}]}}),
    )
    .await;
    mount_json(
        &server,
        "/products/cap.json",
        json!({"product": {"title": "Cap", "images": []}}),
    )
    .await;
    mount_json(&server, "/products/ghost.json", json!({"product": {}})).await;

    server
}

#[tokio::test]
async fn test_collect_single_storefront() {
    let server = start_storefront().await;
    let domain = domain_of(&server);
    let config = create_test_config();
    let fetcher = HttpFetcher::from_config(&config.user_agent).unwrap();

    let result = collect_domain(&domain, &config, &fetcher)
        .await
        .expect("Collection failed");

    assert_eq!(result.domain, domain);
    assert_eq!(
        result.emails.iter().collect::<Vec<_>>(),
        vec!["jozo.hossa@sufio.com", "marian.gaborik@sufio.com"]
    );
    assert_eq!(
        result.facebook_links.iter().collect::<Vec<_>>(),
        vec!["https://www.facebook.com/sufio"]
    );
    assert_eq!(
        result.twitter_links.iter().collect::<Vec<_>>(),
        vec!["https://twitter.com/sufio"]
    );
    assert_eq!(
        result.products,
        vec![
            Product::new("Mug", "https://cdn.sufio.com/mug.png"),
            Product::new("Cap", ""),
        ]
    );
    assert_eq!(result.stage(), CollectionStage::Done);
}

#[tokio::test]
async fn test_storefront_without_product_list() {
    let server = MockServer::start().await;
    mount_html(&server, "/pages/about", "Reach us at hello@shop.example.com").await;

    let domain = domain_of(&server);
    let config = create_test_config();
    let fetcher = HttpFetcher::from_config(&config.user_agent).unwrap();

    let result = collect_domain(&domain, &config, &fetcher).await.unwrap();

    assert_eq!(result.emails.len(), 1);
    assert!(result.products.is_empty());
    assert_eq!(result.stage(), CollectionStage::Failed);
}

#[tokio::test]
async fn test_batch_over_several_storefronts() {
    let first = start_storefront().await;
    let second = start_storefront().await;
    let config = create_test_config();
    let fetcher = Arc::new(HttpFetcher::from_config(&config.user_agent).unwrap());

    let results = run_batch(
        vec![domain_of(&first), domain_of(&second)],
        Arc::new(config),
        fetcher,
    )
    .await;

    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.emails.len(), 2);
        assert_eq!(result.products.len(), 2);
    }
}

#[tokio::test]
async fn test_full_harvest_writes_table() {
    let server = start_storefront().await;
    let domain = domain_of(&server);

    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "name,url").unwrap();
    writeln!(input, "Sufio,{}", domain).unwrap();
    writeln!(input, "Broken,bad domain").unwrap();
    input.flush().unwrap();
    let output = NamedTempFile::new().unwrap();

    let mut config = create_test_config();
    config.crawler.product_count = 2;

    let stats = harvest(
        config,
        input.path().to_path_buf(),
        output.path().to_path_buf(),
    )
    .await
    .expect("Harvest failed");

    assert_eq!(stats.domains_read, 2);
    assert_eq!(stats.domains_collected, 2);
    assert_eq!(stats.total_products, 2);

    let mut reader = csv::Reader::from_path(output.path()).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        headers,
        vec![
            "domain", "emails", "facebook", "twitter", "title 1", "image 1", "title 2",
            "image 2"
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);

    let row = rows
        .iter()
        .find(|row| row.get(0) == Some(domain.as_str()))
        .expect("Row for mock storefront");
    assert_eq!(
        row.get(1),
        Some("jozo.hossa@sufio.com, marian.gaborik@sufio.com")
    );
    assert_eq!(row.get(4), Some("Mug"));
    assert_eq!(row.get(5), Some("https://cdn.sufio.com/mug.png"));
    assert_eq!(row.get(6), Some("Cap"));
}
