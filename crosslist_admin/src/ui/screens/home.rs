use crate::error::DashboardResult;
use crate::formatters::format_optional_timestamp;
use crate::models::EbayAuthStatus;
use crate::ui::loader::DataLoader;
use crate::ui::state::Screen;
use eframe::egui;
use log::warn;
use table_engine::egui_table::class_color;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EbayState {
    #[default]
    Unknown,
    Loading,
    Loaded(EbayAuthStatus),
    Failed(String),
}

#[derive(Default)]
pub struct HomeScreen {
    ebay: EbayState,
}

impl HomeScreen {
    pub fn needs_status(&self) -> bool {
        self.ebay == EbayState::Unknown
    }

    pub fn refresh(&mut self, ctx: &egui::Context, loader: &DataLoader) {
        self.ebay = EbayState::Loading;
        loader.load_ebay_status(ctx);
    }

    pub fn on_status(&mut self, result: DashboardResult<EbayAuthStatus>) {
        self.ebay = match result {
            Ok(status) => EbayState::Loaded(status),
            Err(e) => {
                warn!("Failed to load eBay status: {e}");
                EbayState::Failed(e.to_string())
            }
        };
    }

    pub fn ebay_state(&self) -> &EbayState {
        &self.ebay
    }

    /// One-line summary of the eBay connection.
    pub fn ebay_summary(&self) -> String {
        match &self.ebay {
            EbayState::Unknown | EbayState::Loading => "Checking eBay connection...".to_string(),
            EbayState::Loaded(status) if status.connected => format!(
                "eBay connected{} (token expires {})",
                status
                    .account
                    .as_ref()
                    .map(|account| format!(" as {account}"))
                    .unwrap_or_default(),
                format_optional_timestamp(status.expires_at)
            ),
            EbayState::Loaded(_) => {
                "eBay not connected, authorize the account in the backend".to_string()
            }
            EbayState::Failed(e) => format!("Could not check eBay connection: {e}"),
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        current_screen: &mut Screen,
        loader: &DataLoader,
    ) {
        let mut recheck = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading("Crosslist Admin");
                ui.add_space(20.0);

                for screen in [Screen::Inventory, Screen::Listings, Screen::Shipments] {
                    if ui.button(screen.title()).clicked() {
                        *current_screen = screen;
                    }
                    ui.add_space(10.0);
                }

                ui.add_space(20.0);
                let summary = self.ebay_summary();
                match &self.ebay {
                    EbayState::Loaded(status) if status.connected => {
                        let color = class_color("success").unwrap_or(egui::Color32::GREEN);
                        ui.colored_label(color, summary);
                    }
                    EbayState::Loaded(_) | EbayState::Failed(_) => {
                        let color = class_color("warning").unwrap_or(egui::Color32::YELLOW);
                        ui.colored_label(color, summary);
                    }
                    EbayState::Unknown | EbayState::Loading => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(summary);
                        });
                    }
                }
                if ui.button("Check again").clicked() {
                    recheck = true;
                }
            });
        });
        if recheck {
            self.refresh(ctx, loader);
        }
    }
}
