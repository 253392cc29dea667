use log::info;
use reqwest::Method;

use super::AdminApi;
use crate::error::DashboardResult;
use crate::models::InventoryItem;

impl AdminApi {
    /// `GET /inventory`
    pub async fn list_inventory(&self) -> DashboardResult<Vec<InventoryItem>> {
        let items: Vec<InventoryItem> = self
            .send_json(self.request(Method::GET, "/inventory"))
            .await?;
        info!("Loaded {} inventory items", items.len());
        Ok(items)
    }

    /// `DELETE /inventory/{id}`
    pub async fn delete_item(&self, id: i64) -> DashboardResult<()> {
        self.send(self.request(Method::DELETE, &format!("/inventory/{id}")))
            .await?;
        info!("Deleted inventory item {id}");
        Ok(())
    }
}
