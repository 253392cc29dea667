use log::info;
use reqwest::Method;

use super::AdminApi;
use crate::error::DashboardResult;
use crate::models::Shipment;

impl AdminApi {
    /// `GET /shipments`
    pub async fn list_shipments(&self) -> DashboardResult<Vec<Shipment>> {
        let shipments: Vec<Shipment> = self
            .send_json(self.request(Method::GET, "/shipments"))
            .await?;
        info!("Loaded {} shipments", shipments.len());
        Ok(shipments)
    }
}
