//! REST client for the cross-listing backend.
//!
//! Every request carries `Authorization: Bearer <token>` when a token is
//! configured. A 401 maps to `DashboardError::Unauthorized`, any other
//! non-success status to `DashboardError::HttpStatus`.

mod ebay;
mod inventory;
mod listings;
mod shipments;

#[cfg(test)]
mod tests;

use crate::config::Settings;
use crate::error::{DashboardError, DashboardResult};
use log::{debug, error, info, warn};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Async client for the admin backend. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct AdminApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl AdminApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Creating admin API client for {base_url}");
        debug!("API token configured: {}", token.is_some());
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.api_url.clone(), settings.api_token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn error statuses into errors.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> DashboardResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {status}");

        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend rejected the API token");
            return Err(DashboardError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {status}: {body}");
            return Err(DashboardError::HttpStatus { status, body });
        }
        Ok(response)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> DashboardResult<T> {
        let response = self.send(builder).await?;
        let text = response.text().await?;
        debug!("Response body: {} bytes", text.len());
        Ok(serde_json::from_str(&text)?)
    }
}
