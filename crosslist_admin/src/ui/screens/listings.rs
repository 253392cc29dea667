use crate::error::DashboardResult;
use crate::formatters::{format_price, schedule_label, status_class};
use crate::models::Listing;
use crate::selection::SelectionSet;
use crate::ui::loader::{DataLoader, Failures};
use crate::ui::state::{RefreshState, StatusMessage};
use chrono::Utc;
use eframe::egui;
use log::{info, warn};
use std::time::Duration;
use table_engine::{ColumnDescriptor, Record, Table, TableConfig, TableWidget, Value};

pub struct ListingsScreen {
    table: Table<Listing>,
    selection: SelectionSet,
    refresh: RefreshState,
    status: Option<StatusMessage>,
}

impl ListingsScreen {
    pub fn new(page_size: usize) -> DashboardResult<Self> {
        let selection = SelectionSet::new();
        let columns = vec![
            ColumnDescriptor::checkbox(
                "select",
                "",
                selection
                    .checkbox_props::<Listing>()
                    .disabled(|listing: &Listing| !listing.status.is_publishable()),
            ),
            ColumnDescriptor::new("title", "Title").filterable(true).width(260.0),
            ColumnDescriptor::new("marketplace", "Marketplace").filterable(true),
            ColumnDescriptor::new("status", "Status")
                .filterable(true)
                .class_with(|listing: &Listing| status_class(listing.status).map(str::to_string)),
            ColumnDescriptor::new("price", "Price")
                .render(|listing: &Listing| format_price(listing.price)),
            // Sorts by the scheduled time, shows where the publisher stands.
            ColumnDescriptor::new("schedule", "Schedule")
                .accessor(|listing: &Listing| Value::from(listing.scheduled_at))
                .render(|listing: &Listing| schedule_label(listing, Utc::now()))
                .width(320.0),
        ];
        let config = TableConfig::default()
            .filtering(true)
            .page_size(page_size)
            .empty_message("No listings yet");

        Ok(Self {
            table: Table::new(columns, config)?,
            selection,
            refresh: RefreshState::default(),
            status: None,
        })
    }

    pub fn is_refresh_due(&self, interval: Option<Duration>) -> bool {
        self.refresh.is_due(interval)
    }

    pub fn refresh(&mut self, ctx: &egui::Context, loader: &DataLoader) {
        if self.table.records().is_empty() {
            self.table.set_loading(true);
        }
        self.table.set_error(None);
        self.refresh.started();
        loader.load_listings(ctx);
    }

    pub fn on_loaded(&mut self, result: DashboardResult<Vec<Listing>>) {
        self.refresh.finished();
        self.table.set_loading(false);
        match result {
            Ok(listings) => {
                // Listings that went live in the meantime can no longer be published.
                self.selection.retain_existing(
                    listings
                        .iter()
                        .filter(|listing| listing.status.is_publishable())
                        .filter_map(|listing| listing.id()),
                );
                self.table.set_records(listings);
            }
            Err(e) => {
                warn!("Failed to load listings: {e}");
                self.table.set_error(Some(e.to_string()));
            }
        }
    }

    /// Merge listings created or updated elsewhere into the current rows.
    pub fn merge(&mut self, updated: &[Listing]) {
        let mut listings = self.table.records().to_vec();
        for listing in updated {
            match listings.iter_mut().find(|existing| existing.id == listing.id) {
                Some(existing) => *existing = listing.clone(),
                None => listings.push(listing.clone()),
            }
        }
        self.table.set_records(listings);
    }

    pub fn on_published(&mut self, published: &[Listing], failed: &Failures) {
        for id in published.iter().filter_map(|listing| listing.id()) {
            self.selection.toggle(id, false);
        }
        self.merge(published);
        self.status = Some(if failed.is_empty() {
            StatusMessage::Info(format!("Published {} listings", published.len()))
        } else {
            StatusMessage::Error(format!(
                "Published {} listings, {} failed",
                published.len(),
                failed.len()
            ))
        });
    }

    pub fn table(&self) -> &Table<Listing> {
        &self.table
    }

    pub fn show(&mut self, ctx: &egui::Context, loader: &DataLoader) {
        let mut refresh = false;
        let mut publish = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Listings");
            ui.add_space(10.0);

            let selected = self.selection.len();
            ui.horizontal(|ui| {
                if ui.button("🔄 Refresh").clicked() {
                    refresh = true;
                }
                if self.refresh.in_flight() {
                    ui.spinner();
                }
                ui.separator();
                ui.label(format!("{selected} selected"));
                if ui
                    .add_enabled(selected > 0, egui::Button::new("Publish selected now"))
                    .clicked()
                {
                    publish = true;
                }
            });
            if let Some(status) = &self.status {
                status.show(ui);
            }
            ui.add_space(10.0);

            TableWidget::new(&mut self.table).id_salt("listings").show(ui);
        });

        if refresh {
            self.refresh(ctx, loader);
        }
        if publish {
            let ids = self.selection.numeric_ids();
            info!("Publishing {} listings", ids.len());
            self.status = Some(StatusMessage::Info("Publishing...".to_string()));
            loader.publish_listings(ctx, ids);
        }
    }
}
