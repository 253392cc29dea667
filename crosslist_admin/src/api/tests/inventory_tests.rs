//! Tests for inventory endpoints (list_inventory, delete_item).

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{api_with_mock, TEST_TOKEN};
use crate::error::DashboardError;

// ── list_inventory ───────────────────────────────────────────────────

#[tokio::test]
async fn lists_inventory_with_bearer_token() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/inventory"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "sku": "LAMP-01", "title": "Desk lamp", "quantity": 3, "price": 12.5},
            {"id": 2, "sku": "CHAIR-02", "title": "Chair", "quantity": -1, "price": 40.0,
             "location": "B2", "updated_at": "2026-02-01T08:30:00Z"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = api.list_inventory().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sku, "LAMP-01");
    assert_eq!(items[0].location, None);
    assert!(items[1].is_oversold());
    assert_eq!(items[1].location.as_deref(), Some("B2"));
}

#[tokio::test]
async fn unauthorized_maps_to_dedicated_error() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/inventory"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;

    let result = api.list_inventory().await;
    assert!(matches!(result, Err(DashboardError::Unauthorized)));
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/inventory"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&mock_server)
        .await;

    match api.list_inventory().await {
        Err(DashboardError::HttpStatus { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    assert!(matches!(
        api.list_inventory().await,
        Err(DashboardError::Parse(_))
    ));
}

// ── delete_item ──────────────────────────────────────────────────────

#[tokio::test]
async fn deletes_item_by_id() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("DELETE"))
        .and(path("/inventory/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    api.delete_item(42).await.unwrap();
}

#[tokio::test]
async fn delete_of_missing_item_fails() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("DELETE"))
        .and(path("/inventory/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let error = api.delete_item(7).await.unwrap_err();
    assert_eq!(error.to_string(), "HTTP error 404 Not Found: not found");
}
