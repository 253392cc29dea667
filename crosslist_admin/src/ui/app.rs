use eframe::{self, egui};
use egui::ViewportBuilder;
use log::info;

use super::{
    loader::{DataLoader, LoadResult},
    screens::{HomeScreen, InventoryScreen, ListingsScreen, ShipmentsScreen},
    state::Screen,
};
use crate::api::AdminApi;
use crate::config::Settings;
use crate::error::{DashboardError, DashboardResult};

pub struct CrosslistApp {
    current_screen: Screen,
    settings: Settings,
    loader: DataLoader,
    home: HomeScreen,
    inventory: InventoryScreen,
    listings: ListingsScreen,
    shipments: ShipmentsScreen,
}

impl CrosslistApp {
    pub fn new(settings: Settings) -> DashboardResult<Self> {
        let loader = DataLoader::new(AdminApi::from_settings(&settings))?;
        Ok(Self {
            current_screen: Screen::default(),
            loader,
            home: HomeScreen::default(),
            inventory: InventoryScreen::new(settings.page_size)?,
            listings: ListingsScreen::new(settings.page_size)?,
            shipments: ShipmentsScreen::new(settings.page_size)?,
            settings,
        })
    }

    fn apply(&mut self, result: LoadResult) {
        match result {
            LoadResult::Inventory(result) => self.inventory.on_loaded(result),
            LoadResult::Listings(result) => self.listings.on_loaded(result),
            LoadResult::Shipments(result) => self.shipments.on_loaded(result),
            LoadResult::EbayStatus(result) => self.home.on_status(result),
            LoadResult::Deleted { deleted, failed } => self.inventory.on_deleted(&deleted, &failed),
            LoadResult::CrossPosted(result) => {
                self.inventory.on_cross_posted(&result);
                if let Ok(created) = &result {
                    self.listings.merge(created);
                }
            }
            LoadResult::Published { published, failed } => {
                self.listings.on_published(&published, &failed)
            }
        }
    }

    /// Load the visible screen on first visit and then every refresh interval.
    fn refresh_if_due(&mut self, ctx: &egui::Context) {
        let interval = self.settings.refresh_interval();
        match self.current_screen {
            Screen::Home => {
                if self.home.needs_status() {
                    self.home.refresh(ctx, &self.loader);
                }
            }
            Screen::Inventory => {
                if self.inventory.is_refresh_due(interval) {
                    self.inventory.refresh(ctx, &self.loader);
                }
            }
            Screen::Listings => {
                if self.listings.is_refresh_due(interval) {
                    self.listings.refresh(ctx, &self.loader);
                }
            }
            Screen::Shipments => {
                if self.shipments.is_refresh_due(interval) {
                    self.shipments.refresh(ctx, &self.loader);
                }
            }
        }
        if let Some(interval) = interval {
            ctx.request_repaint_after(interval);
        }
    }

    fn show_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for screen in Screen::ALL {
                    ui.selectable_value(&mut self.current_screen, screen, screen.title());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.settings.api_url.as_str());
                });
            });
        });
    }
}

impl eframe::App for CrosslistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.loader.poll() {
            self.apply(result);
        }
        self.refresh_if_due(ctx);
        self.show_navigation(ctx);

        match self.current_screen {
            Screen::Home => {
                self.home
                    .show(ctx, &mut self.current_screen, &self.loader);
            }
            Screen::Inventory => self.inventory.show(ctx, &self.loader),
            Screen::Listings => self.listings.show(ctx, &self.loader),
            Screen::Shipments => self.shipments.show(ctx, &self.loader),
        }
    }
}

pub fn launch_gui(settings: Settings) -> DashboardResult<()> {
    info!(
        "Connecting to {} (page size {}, refresh every {} s)",
        settings.api_url, settings.page_size, settings.refresh_secs
    );
    let app = CrosslistApp::new(settings)?;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Crosslist Admin",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| DashboardError::Gui(e.to_string()))
}
