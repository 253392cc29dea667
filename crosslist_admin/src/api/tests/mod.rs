//! Unit tests for the admin API client.

mod construction_tests;
mod inventory_tests;

use super::AdminApi;

pub(crate) const TEST_TOKEN: &str = "test_token";

pub(crate) fn api_with_mock(mock_uri: &str) -> AdminApi {
    AdminApi::new(mock_uri, Some(TEST_TOKEN.to_string()))
}
