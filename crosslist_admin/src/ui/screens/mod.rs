mod home;
mod inventory;
mod listings;
mod shipments;

pub use home::{EbayState, HomeScreen};
pub use inventory::InventoryScreen;
pub use listings::ListingsScreen;
pub use shipments::ShipmentsScreen;
