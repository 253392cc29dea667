use log::info;
use reqwest::Method;

use super::AdminApi;
use crate::error::DashboardResult;
use crate::models::EbayAuthStatus;

impl AdminApi {
    /// `GET /ebay/status`
    pub async fn ebay_status(&self) -> DashboardResult<EbayAuthStatus> {
        let status: EbayAuthStatus = self
            .send_json(self.request(Method::GET, "/ebay/status"))
            .await?;
        info!("eBay connection: {}", if status.connected { "connected" } else { "not connected" });
        Ok(status)
    }
}
