pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod models;
pub mod selection;
pub mod ui;

// Re-export commonly used items
pub use api::AdminApi;
pub use config::{Args, Settings};
pub use error::{DashboardError, DashboardResult};
pub use export::{export_csv, write_csv};
pub use formatters::{format_price, format_quantity, format_timestamp, schedule_label, status_class};
pub use models::{CrossPostRequest, EbayAuthStatus, InventoryItem, Listing, ListingStatus, Shipment};
pub use selection::SelectionSet;
