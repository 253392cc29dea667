//! Background requests for the UI thread.
//!
//! Requests run on a tokio runtime owned by the loader; results come back
//! through an unbounded channel that the app drains once per frame.

use crate::api::AdminApi;
use crate::error::DashboardResult;
use crate::models::{CrossPostRequest, EbayAuthStatus, InventoryItem, Listing, Shipment};
use eframe::egui;
use log::{debug, warn};
use std::future::Future;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Ids that could not be processed, with the error text.
pub type Failures = Vec<(i64, String)>;

#[derive(Debug)]
pub enum LoadResult {
    Inventory(DashboardResult<Vec<InventoryItem>>),
    Listings(DashboardResult<Vec<Listing>>),
    Shipments(DashboardResult<Vec<Shipment>>),
    EbayStatus(DashboardResult<EbayAuthStatus>),
    Deleted { deleted: Vec<i64>, failed: Failures },
    CrossPosted(DashboardResult<Vec<Listing>>),
    Published { published: Vec<Listing>, failed: Failures },
}

pub struct DataLoader {
    /// Tokio runtime for async requests
    runtime: Runtime,
    api: AdminApi,
    sender: UnboundedSender<LoadResult>,
    receiver: UnboundedReceiver<LoadResult>,
}

impl DataLoader {
    pub fn new(api: AdminApi) -> DashboardResult<Self> {
        let runtime = Runtime::new()?;
        let (sender, receiver) = unbounded_channel();
        Ok(Self {
            runtime,
            api,
            sender,
            receiver,
        })
    }

    fn spawn<F>(&self, ctx: &egui::Context, task: F)
    where
        F: Future<Output = LoadResult> + Send + 'static,
    {
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = task.await;
            if sender.send(result).is_err() {
                debug!("Loader closed before the result arrived");
            }
            ctx.request_repaint();
        });
    }

    pub fn load_inventory(&self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn(ctx, async move {
            LoadResult::Inventory(api.list_inventory().await)
        });
    }

    pub fn load_listings(&self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn(ctx, async move {
            LoadResult::Listings(api.list_listings().await)
        });
    }

    pub fn load_shipments(&self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn(ctx, async move {
            LoadResult::Shipments(api.list_shipments().await)
        });
    }

    pub fn load_ebay_status(&self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn(ctx, async move {
            LoadResult::EbayStatus(api.ebay_status().await)
        });
    }

    /// Delete items one by one; a failure does not stop the rest.
    pub fn delete_items(&self, ctx: &egui::Context, ids: Vec<i64>) {
        let api = self.api.clone();
        self.spawn(ctx, async move {
            let mut deleted = Vec::new();
            let mut failed = Vec::new();
            for id in ids {
                match api.delete_item(id).await {
                    Ok(()) => deleted.push(id),
                    Err(e) => {
                        warn!("Failed to delete item {id}: {e}");
                        failed.push((id, e.to_string()));
                    }
                }
            }
            LoadResult::Deleted { deleted, failed }
        });
    }

    pub fn cross_post(&self, ctx: &egui::Context, request: CrossPostRequest) {
        let api = self.api.clone();
        self.spawn(ctx, async move {
            LoadResult::CrossPosted(api.cross_post(&request).await)
        });
    }

    pub fn publish_listings(&self, ctx: &egui::Context, ids: Vec<i64>) {
        let api = self.api.clone();
        self.spawn(ctx, async move {
            let mut published = Vec::new();
            let mut failed = Vec::new();
            for id in ids {
                match api.publish_listing(id).await {
                    Ok(listing) => published.push(listing),
                    Err(e) => {
                        warn!("Failed to publish listing {id}: {e}");
                        failed.push((id, e.to_string()));
                    }
                }
            }
            LoadResult::Published { published, failed }
        });
    }

    /// Results that arrived since the last call (non-blocking).
    pub fn poll(&mut self) -> Vec<LoadResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn wait_for_result(loader: &mut DataLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.poll().pop() {
                return result;
            }
            assert!(Instant::now() < deadline, "no result within 5 seconds");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_poll_is_empty_without_requests() {
        let mut loader = DataLoader::new(AdminApi::new("http://localhost:1", None)).unwrap();
        assert!(loader.poll().is_empty());
    }

    #[test]
    fn test_delete_reports_partial_failures() {
        let server_runtime = Runtime::new().unwrap();
        let mock_server = server_runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("DELETE"))
                .and(path("/inventory/1"))
                .respond_with(ResponseTemplate::new(204))
                .mount(&server)
                .await;
            Mock::given(method("DELETE"))
                .and(path("/inventory/2"))
                .respond_with(ResponseTemplate::new(409).set_body_string("listed"))
                .mount(&server)
                .await;
            server
        });

        let mut loader = DataLoader::new(AdminApi::new(mock_server.uri(), None)).unwrap();
        loader.delete_items(&egui::Context::default(), vec![1, 2]);

        match wait_for_result(&mut loader) {
            LoadResult::Deleted { deleted, failed } => {
                assert_eq!(deleted, vec![1]);
                assert_eq!(failed.len(), 1);
                assert_eq!(failed[0].0, 2);
                assert!(failed[0].1.contains("listed"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
