//! Integration tests for `OverpassClient` against a `wiremock` server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smkt_core::Coordinates;
use smkt_scraper::{OverpassClient, ScraperError};

fn test_client(server: &MockServer, max_retries: u32) -> OverpassClient {
    OverpassClient::new(
        &format!("{}/api/interpreter", server.uri()),
        5,
        "smkt-test/0.1",
        max_retries,
        0,
    )
    .expect("failed to build test OverpassClient")
}

fn dam() -> Coordinates {
    Coordinates::new(52.3731, 4.8932)
}

#[tokio::test]
async fn find_supermarkets_returns_recognised_branches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .and(query_param_contains("data", "around:3000,52.3731,4.8932"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": 0.6,
            "elements": [
                {
                    "type": "node",
                    "id": 101,
                    "lat": 52.3745,
                    "lon": 4.8910,
                    "tags": {"shop": "supermarket", "brand": "Albert Heijn", "name": "Albert Heijn Nieuwmarkt"}
                },
                {
                    "type": "way",
                    "id": 202,
                    "center": {"lat": 52.3702, "lon": 4.8990},
                    "tags": {"shop": "supermarket", "name": "Dirk"}
                },
                {
                    "type": "node",
                    "id": 303,
                    "lat": 52.3800,
                    "lon": 4.9000,
                    "tags": {"shop": "supermarket", "brand": "Lidl"}
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let found = test_client(&server, 0)
        .find_supermarkets(dam(), 3.0)
        .await
        .expect("discovery should succeed");

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].osm_id, "node/101");
    assert_eq!(found[0].brand, "Albert Heijn");
    assert_eq!(found[1].osm_id, "way/202");
    assert_eq!(found[1].name, "Dirk");
}

#[tokio::test]
async fn empty_element_list_yields_no_supermarkets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
        .mount(&server)
        .await;

    let found = test_client(&server, 0)
        .find_supermarkets(dam(), 1.0)
        .await
        .expect("discovery should succeed");
    assert!(found.is_empty());
}

#[tokio::test]
async fn rate_limiting_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server, 2).find_supermarkets(dam(), 1.0).await;
    assert!(result.is_ok(), "expected Ok after retry, got: {result:?}");
}

#[tokio::test]
async fn rate_limiting_surfaces_retry_after_when_retries_run_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server, 0)
        .find_supermarkets(dam(), 1.0)
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            ScraperError::RateLimited {
                retry_after_secs: 30,
                ..
            }
        ),
        "expected RateLimited, got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(504))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server, 3)
        .find_supermarkets(dam(), 1.0)
        .await
        .unwrap_err();
    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 504, .. }),
        "expected UnexpectedStatus(504), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<osm>not json</osm>"))
        .mount(&server)
        .await;

    let err = test_client(&server, 0)
        .find_supermarkets(dam(), 1.0)
        .await
        .unwrap_err();
    assert!(matches!(err, ScraperError::Deserialize { .. }), "{err:?}");
}

#[test]
fn invalid_endpoint_is_rejected() {
    let err = OverpassClient::new("::not a url::", 5, "ua", 0, 0).unwrap_err();
    assert!(matches!(err, ScraperError::InvalidBaseUrl { .. }));
}
