//! Tests for client construction and request building.

use crate::api::AdminApi;
use crate::config::Settings;

#[test]
fn trims_trailing_slash() {
    let api = AdminApi::new("http://localhost:8000/api/", None);
    assert_eq!(api.base_url(), "http://localhost:8000/api");
}

#[test]
fn from_settings_copies_url_and_token() {
    let settings = Settings {
        api_url: "https://admin.example/api".to_string(),
        api_token: Some("abc".to_string()),
        ..Default::default()
    };
    let api = AdminApi::from_settings(&settings);
    assert_eq!(api.base_url(), "https://admin.example/api");
    assert_eq!(api.token.as_deref(), Some("abc"));
}

#[test]
fn request_without_token_has_no_auth_header() {
    let api = AdminApi::new("http://localhost:8000/api", None);
    let request = api
        .request(reqwest::Method::GET, "/inventory")
        .build()
        .unwrap();
    assert_eq!(request.url().as_str(), "http://localhost:8000/api/inventory");
    assert!(request.headers().get("Authorization").is_none());
}

#[test]
fn request_with_token_sends_bearer_auth() {
    let api = AdminApi::new("http://localhost:8000/api", Some("abc".to_string()));
    let request = api
        .request(reqwest::Method::DELETE, "/inventory/3")
        .build()
        .unwrap();
    assert_eq!(request.method(), &reqwest::Method::DELETE);
    assert_eq!(
        request.headers().get("Authorization").unwrap(),
        "Bearer abc"
    );
}

#[test]
fn unreachable_backend_is_a_network_error() {
    // Nothing listens on the discard port.
    let api = AdminApi::new("http://127.0.0.1:9/api", None);
    let result = tokio_test::block_on(api.list_inventory());
    assert!(matches!(result, Err(crate::error::DashboardError::Network(_))));
}
