mod app;
mod components;
pub mod loader;
mod screens;
pub mod state;

pub use app::{launch_gui, CrosslistApp};
pub use screens::{EbayState, HomeScreen, InventoryScreen, ListingsScreen, ShipmentsScreen};
