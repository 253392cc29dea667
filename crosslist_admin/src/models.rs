use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use table_engine::{Record, RowId, Value};

/// A stock item as returned by `GET /inventory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub sku: String,
    pub title: String,
    /// May drop below zero when an item was sold on several marketplaces
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn is_oversold(&self) -> bool {
        self.quantity < 0
    }

    /// Only items with stock on hand can be cross-posted.
    pub fn can_cross_post(&self) -> bool {
        self.quantity > 0
    }
}

impl Record for InventoryItem {
    fn id(&self) -> Option<RowId> {
        Some(RowId::Number(self.id))
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "sku" => Value::from(&self.sku),
            "title" => Value::from(&self.title),
            "quantity" => Value::from(self.quantity),
            "price" => Value::from(self.price),
            "condition" => Value::from(self.condition.clone()),
            "location" => Value::from(self.location.clone()),
            "updated_at" => Value::from(self.updated_at),
            _ => Value::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Draft,
    Scheduled,
    Active,
    Ended,
    Failed,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Draft => "Draft",
            ListingStatus::Scheduled => "Scheduled",
            ListingStatus::Active => "Active",
            ListingStatus::Ended => "Ended",
            ListingStatus::Failed => "Failed",
        }
    }

    /// Drafts and scheduled listings can still be published by hand.
    pub fn is_publishable(&self) -> bool {
        matches!(self, ListingStatus::Draft | ListingStatus::Scheduled)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A marketplace listing created from an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub item_id: i64,
    pub title: String,
    pub marketplace: String,
    pub status: ListingStatus,
    pub price: f64,
    /// When the backend publisher should push the listing live
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Listing id on the marketplace once published
    #[serde(default)]
    pub external_id: Option<String>,
}

impl Record for Listing {
    fn id(&self) -> Option<RowId> {
        Some(RowId::Number(self.id))
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "item_id" => Value::from(self.item_id),
            "title" => Value::from(&self.title),
            "marketplace" => Value::from(&self.marketplace),
            "status" => Value::from(self.status.label()),
            "price" => Value::from(self.price),
            "scheduled_at" => Value::from(self.scheduled_at),
            "external_id" => Value::from(self.external_id.clone()),
            _ => Value::Null,
        }
    }
}

/// An outgoing shipment; the shipping backend hands out string ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub order_ref: String,
    pub carrier: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
    pub status: String,
    #[serde(default)]
    pub shipped_at: Option<DateTime<Utc>>,
}

impl Record for Shipment {
    fn id(&self) -> Option<RowId> {
        Some(RowId::Text(self.id.clone()))
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(&self.id),
            "order_ref" => Value::from(&self.order_ref),
            "carrier" => Value::from(&self.carrier),
            "tracking_number" => Value::from(self.tracking_number.clone()),
            "status" => Value::from(&self.status),
            "shipped_at" => Value::from(self.shipped_at),
            _ => Value::Null,
        }
    }
}

/// eBay OAuth connection state from `GET /ebay/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbayAuthStatus {
    pub connected: bool,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Body of `POST /listings/bulk`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossPostRequest {
    pub item_ids: Vec<i64>,
    pub marketplace: String,
    /// Publish immediately when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_listing_status_is_lowercase_on_the_wire() {
        let listing: Listing = serde_json::from_value(json!({
            "id": 4,
            "item_id": 9,
            "title": "Desk lamp",
            "marketplace": "ebay",
            "status": "scheduled",
            "price": 19.5,
            "scheduled_at": "2026-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(listing.status, ListingStatus::Scheduled);
        assert_eq!(
            listing.scheduled_at,
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(listing.external_id, None);
        assert_eq!(serde_json::to_value(ListingStatus::Failed).unwrap(), json!("failed"));
    }

    #[test]
    fn test_only_drafts_and_scheduled_are_publishable() {
        assert!(ListingStatus::Draft.is_publishable());
        assert!(ListingStatus::Scheduled.is_publishable());
        assert!(!ListingStatus::Active.is_publishable());
        assert!(!ListingStatus::Ended.is_publishable());
        assert!(!ListingStatus::Failed.is_publishable());
    }

    #[test]
    fn test_inventory_item_fields() {
        let item = InventoryItem {
            id: 3,
            sku: "LAMP-01".to_string(),
            title: "Desk lamp".to_string(),
            quantity: -2,
            price: 12.0,
            condition: None,
            location: Some("A1".to_string()),
            updated_at: None,
        };

        assert_eq!(item.id(), Some(RowId::Number(3)));
        assert_eq!(item.field("quantity"), Value::Int(-2));
        assert_eq!(item.field("location"), Value::Text("A1".to_string()));
        assert_eq!(item.field("condition"), Value::Null);
        assert_eq!(item.field("actions"), Value::Null);
        assert!(item.is_oversold());
        assert!(!item.can_cross_post());
    }

    #[test]
    fn test_shipment_uses_string_ids() {
        let shipment: Shipment = serde_json::from_value(json!({
            "id": "shp_123",
            "order_ref": "ORD-1",
            "carrier": "DHL",
            "status": "in_transit"
        }))
        .unwrap();

        assert_eq!(shipment.id(), Some(RowId::Text("shp_123".to_string())));
        assert_eq!(shipment.tracking_number, None);
    }

    #[test]
    fn test_cross_post_request_omits_missing_schedule() {
        let request = CrossPostRequest {
            item_ids: vec![1, 2],
            marketplace: "ebay".to_string(),
            scheduled_at: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"item_ids": [1, 2], "marketplace": "ebay"})
        );
    }
}
