use log::info;
use reqwest::Method;

use super::AdminApi;
use crate::error::DashboardResult;
use crate::models::{CrossPostRequest, Listing};

impl AdminApi {
    /// `GET /listings`
    pub async fn list_listings(&self) -> DashboardResult<Vec<Listing>> {
        let listings: Vec<Listing> = self.send_json(self.request(Method::GET, "/listings")).await?;
        info!("Loaded {} listings", listings.len());
        Ok(listings)
    }

    /// `POST /listings/bulk`, returns the created listings.
    pub async fn cross_post(&self, request: &CrossPostRequest) -> DashboardResult<Vec<Listing>> {
        info!(
            "Cross-posting {} items to {}",
            request.item_ids.len(),
            request.marketplace
        );
        let created: Vec<Listing> = self
            .send_json(self.request(Method::POST, "/listings/bulk").json(request))
            .await?;
        info!("Created {} listings", created.len());
        Ok(created)
    }

    /// `POST /listings/{id}/publish`, returns the updated listing.
    pub async fn publish_listing(&self, id: i64) -> DashboardResult<Listing> {
        let listing: Listing = self
            .send_json(self.request(Method::POST, &format!("/listings/{id}/publish")))
            .await?;
        info!("Published listing {id} (status: {})", listing.status);
        Ok(listing)
    }
}
