//! Integration tests for the harvester
//!
//! These tests use wiremock to serve a paginated listing and run the full
//! harvest cycle end-to-end, down to the written catalog file.

use chrono::NaiveDate;
use listing_harvester::config::Config;
use listing_harvester::crawler::harvest;
use listing_harvester::output::JsonFileWriter;
use listing_harvester::{run_harvest, HarvestError, Harvester, ProductRecord};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PATH: &str = "/developer-challenge/smartphones";

/// Creates a test configuration pointing at the mock server
fn create_test_config(server: &MockServer, output_path: &Path) -> Config {
    let mut config = Config::default();
    config.site.base_url = format!("{}{}", server.uri(), LISTING_PATH);
    config.output.path = output_path.display().to_string();
    config.user_agent.crawler_name = "TestHarvester".to_string();
    config
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
}

fn root_page(pages: &[&str]) -> String {
    let links: String = pages
        .iter()
        .map(|p| format!(r#"<a class="px-6 py-4" href="?page={0}">{0}</a>"#, p))
        .collect();
    format!(
        r#"<html><head><title>Smartphones</title></head><body>
        <div id="products"></div>
        <div id="pages" class="flex justify-center">{}</div>
        </body></html>"#,
        links
    )
}

fn product_card(name: &str, capacity: &str, colours: &[&str], availability: &str, shipping: Option<&str>) -> String {
    let markers: String = colours
        .iter()
        .map(|c| {
            format!(
                r#"<div class="px-2"><span class="border border-black rounded-full block" data-colour="{}"></span></div>"#,
                c
            )
        })
        .collect();
    let shipping = shipping
        .map(|s| format!(r#"<div class="my-4 text-sm block text-center">{}</div>"#, s))
        .unwrap_or_default();

    format!(
        r#"<div class="product px-4 w-full lg:w-1/4">
            <div class="bg-white p-4 rounded-md">
                <h3 class="font-semibold text-center"><span class="product-name">{name}</span> <span class="product-capacity">{capacity}</span></h3>
                <img src="../images/{image}.png" alt="{name}" class="mx-auto h-48">
                <div><div class="flex -mx-2">{markers}</div></div>
                <div class="my-8 block text-center text-lg">£699.99</div>
                <div class="my-4 text-sm block text-center">{availability}</div>
                {shipping}
            </div>
        </div>"#,
        name = name,
        capacity = capacity,
        image = name.to_lowercase().replace(' ', "-"),
        markers = markers,
        availability = availability,
        shipping = shipping,
    )
}

fn listing_page(cards: &[String]) -> String {
    format!(
        r#"<html><body><div id="products" class="-mx-4 flex flex-wrap">{}</div>
        <div id="pages"></div></body></html>"#,
        cards.concat()
    )
}

async fn mount_page(server: &MockServer, page: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("{}/", LISTING_PATH)))
        .and(query_param("page", page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_root(server: &MockServer, pages: &[&str]) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(root_page(pages))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn read_catalog(path: &Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&content).expect("Output is not a JSON array")
}

#[tokio::test]
async fn test_full_harvest_writes_catalog() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.json");

    mount_root(&mock_server, &["1", "2"]).await;
    mount_page(
        &mock_server,
        "1",
        listing_page(&[product_card(
            "iPhone 12",
            "256GB",
            &["Blue", "Red"],
            "Availability: In Stock",
            Some("Available tomorrow"),
        )]),
    )
    .await;
    mount_page(
        &mock_server,
        "2",
        listing_page(&[
            product_card(
                "iPhone 12",
                "256GB",
                &["Blue"],
                "Availability: Out of Stock",
                None,
            ),
            product_card(
                "Nokia 3310",
                "16 MB",
                &["Navy"],
                "Availability: Out of Stock",
                Some("Delivery by Wednesday 25th Dec 2024"),
            ),
        ]),
    )
    .await;

    let config = create_test_config(&mock_server, &output);
    let stats = harvest(config, reference_date())
        .await
        .expect("Harvest failed");

    assert_eq!(stats.pages_discovered, 2);
    assert_eq!(stats.pages_crawled, 2);
    assert_eq!(stats.fragments_seen, 3);
    assert_eq!(stats.candidates_produced, 4);
    assert_eq!(stats.records_inserted, 3);
    assert_eq!(stats.duplicates_rejected, 1);
    assert_eq!(stats.extraction_failures, 0);

    let catalog = read_catalog(&output);
    assert_eq!(catalog.len(), 3);

    // Two colours of the first card, all other fields shared
    for (record, colour) in catalog[..2].iter().zip(["Blue", "Red"]) {
        assert_eq!(record["title"], "iPhone 12");
        assert_eq!(record["colour"], colour);
        assert_eq!(record["capacityMB"], 256_000);
        assert_eq!(record["price"], 699.99);
        assert_eq!(record["availabilityText"], "In Stock");
        assert_eq!(record["isAvailable"], true);
        assert_eq!(record["shippingText"], "Available tomorrow");
        assert_eq!(record["shippingDate"], "2024-12-21");
        assert_eq!(
            record["imageUrl"],
            format!("{}/developer-challenge/images/iphone-12.png", mock_server.uri())
        );
    }

    // The duplicate from page 2 did not replace the first-seen values
    assert_eq!(catalog[0]["isAvailable"], true);

    let nokia = &catalog[2];
    assert_eq!(nokia["title"], "Nokia 3310");
    assert_eq!(nokia["capacityMB"], 16);
    assert_eq!(nokia["isAvailable"], false);
    assert_eq!(nokia["shippingDate"], "2024-12-25");
}

#[tokio::test]
async fn test_fetch_failure_writes_nothing() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.json");

    mount_root(&mock_server, &["1", "2"]).await;
    mount_page(
        &mock_server,
        "1",
        listing_page(&[product_card(
            "Pixel 5",
            "128GB",
            &["Black"],
            "Availability: In Stock",
            None,
        )]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/", LISTING_PATH)))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server, &output);
    let result = harvest(config, reference_date()).await;

    match result {
        Err(HarvestError::HttpStatus { url, status }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/?page=2"), "unexpected url {}", url);
        }
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
    assert!(!output.exists(), "No output may be written on failure");
}

#[tokio::test]
async fn test_unreachable_root_reports_url() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.json");

    let mut config = Config::default();
    config.site.base_url = "http://127.0.0.1:1/listing".to_string();
    config.output.path = output.display().to_string();

    let result = harvest(config, reference_date()).await;

    match result {
        Err(HarvestError::Http { url, .. }) => assert_eq!(url, "http://127.0.0.1:1/listing"),
        Err(HarvestError::Timeout { url }) => assert_eq!(url, "http://127.0.0.1:1/listing"),
        other => panic!("Expected transport error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_no_pagination_writes_empty_catalog() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.json");

    mount_root(&mock_server, &[]).await;

    let config = create_test_config(&mock_server, &output);
    let stats = harvest(config, reference_date())
        .await
        .expect("Harvest failed");

    assert_eq!(stats.pages_discovered, 0);
    assert_eq!(stats.pages_crawled, 0);
    assert!(read_catalog(&output).is_empty());
}

#[tokio::test]
async fn test_broken_card_is_skipped() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.json");

    let broken = product_card(
        "Galaxy S10",
        "128GB",
        &["White"],
        "Availability: In Stock",
        None,
    )
    .replace("£699.99", "Price on request");

    mount_root(&mock_server, &["1"]).await;
    mount_page(
        &mock_server,
        "1",
        listing_page(&[
            broken,
            product_card(
                "Galaxy S20",
                "1GB",
                &["Grey"],
                "Availability: In Stock Online",
                Some("Order today, delivered 2024-12-27"),
            ),
        ]),
    )
    .await;

    let config = create_test_config(&mock_server, &output);
    let harvester = Harvester::new(config, reference_date()).expect("Failed to build harvester");
    let writer = JsonFileWriter::new(&output);
    let stats = run_harvest(&harvester, &writer)
        .await
        .expect("Harvest failed");

    assert_eq!(stats.extraction_failures, 1);
    assert_eq!(stats.records_inserted, 1);

    let content = std::fs::read_to_string(&output).unwrap();
    let records: Vec<ProductRecord> = serde_json::from_str(&content).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Galaxy S20");
    assert_eq!(records[0].capacity_mb, 1000);
    assert!(records[0].is_available);
    assert_eq!(records[0].shipping_date, NaiveDate::from_ymd_opt(2024, 12, 27));
}
