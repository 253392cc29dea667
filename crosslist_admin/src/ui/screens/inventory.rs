use crate::error::DashboardResult;
use crate::export::export_csv;
use crate::formatters::{format_optional_timestamp, format_price, format_quantity};
use crate::models::{CrossPostRequest, InventoryItem, Listing};
use crate::selection::SelectionSet;
use crate::ui::components::ItemWindow;
use crate::ui::loader::{DataLoader, Failures};
use crate::ui::state::{RefreshState, StatusMessage};
use chrono::{Duration as ChronoDuration, Utc};
use eframe::egui;
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use table_engine::{
    ColumnDescriptor, Record, RowProps, Table, TableConfig, TableWidget, DEFAULT_PAGE_SIZES,
};

const MARKETPLACE: &str = "ebay";

/// Deferred actions collected while drawing, applied afterwards
enum InventoryAction {
    Refresh,
    CrossPost,
    ConfirmDelete,
    Delete,
    CancelDelete,
    Export,
}

pub struct InventoryScreen {
    table: Table<InventoryItem>,
    selection: SelectionSet,
    /// Filled by the table's row click callback
    clicked: Rc<RefCell<Option<InventoryItem>>>,
    detail: Option<InventoryItem>,
    show_detail: bool,
    refresh: RefreshState,
    status: Option<StatusMessage>,
    confirm_delete: bool,
    schedule: bool,
    schedule_minutes: u32,
}

impl InventoryScreen {
    pub fn new(page_size: usize) -> DashboardResult<Self> {
        let selection = SelectionSet::new();
        let clicked = Rc::new(RefCell::new(None));
        let table = Self::build_table(&selection, Rc::clone(&clicked), page_size)?;
        Ok(Self {
            table,
            selection,
            clicked,
            detail: None,
            show_detail: false,
            refresh: RefreshState::default(),
            status: None,
            confirm_delete: false,
            schedule: false,
            schedule_minutes: 60,
        })
    }

    fn build_table(
        selection: &SelectionSet,
        clicked: Rc<RefCell<Option<InventoryItem>>>,
        page_size: usize,
    ) -> DashboardResult<Table<InventoryItem>> {
        let columns = vec![
            // Every row is selectable: the selection also drives deletion.
            ColumnDescriptor::checkbox("select", "", selection.checkbox_props::<InventoryItem>()),
            ColumnDescriptor::new("sku", "SKU").filterable(true).width(110.0),
            ColumnDescriptor::new("title", "Title").filterable(true).width(260.0),
            ColumnDescriptor::new("quantity", "Qty")
                .render(|item: &InventoryItem| format_quantity(item.quantity))
                .class_with(|item: &InventoryItem| {
                    item.is_oversold().then(|| "negative".to_string())
                }),
            ColumnDescriptor::new("price", "Price")
                .render(|item: &InventoryItem| format_price(item.price)),
            ColumnDescriptor::new("location", "Location").filterable(true),
            ColumnDescriptor::new("updated_at", "Updated")
                .render(|item: &InventoryItem| format_optional_timestamp(item.updated_at)),
        ];
        let config = TableConfig::default()
            .filtering(true)
            .page_size(page_size)
            .empty_message("No inventory items");

        Ok(Table::new(columns, config)?
            .on_row_click(move |item: &InventoryItem| {
                *clicked.borrow_mut() = Some(item.clone());
            })
            .row_props(|item: &InventoryItem| RowProps {
                class: None,
                tooltip: item
                    .is_oversold()
                    .then(|| "Oversold: more units sold than in stock".to_string()),
            }))
    }

    pub fn is_refresh_due(&self, interval: Option<Duration>) -> bool {
        self.refresh.is_due(interval)
    }

    pub fn refresh(&mut self, ctx: &egui::Context, loader: &DataLoader) {
        // Keep showing the current rows during background refreshes.
        if self.table.records().is_empty() {
            self.table.set_loading(true);
        }
        self.table.set_error(None);
        self.refresh.started();
        loader.load_inventory(ctx);
    }

    pub fn on_loaded(&mut self, result: DashboardResult<Vec<InventoryItem>>) {
        self.refresh.finished();
        self.table.set_loading(false);
        match result {
            Ok(items) => {
                let dropped = self
                    .selection
                    .retain_existing(items.iter().filter_map(|item| item.id()));
                if dropped > 0 {
                    info!("Dropped {dropped} selected items that no longer exist");
                }
                self.table.set_records(items);
                self.table.set_error(None);
            }
            Err(e) => {
                warn!("Failed to load inventory: {e}");
                self.table.set_error(Some(e.to_string()));
            }
        }
    }

    /// Remove deleted rows right away; the page index is clamped by the table.
    pub fn on_deleted(&mut self, deleted: &[i64], failed: &Failures) {
        let remaining: Vec<InventoryItem> = self
            .table
            .records()
            .iter()
            .filter(|item| !deleted.contains(&item.id))
            .cloned()
            .collect();
        self.selection
            .retain_existing(remaining.iter().filter_map(|item| item.id()));
        self.table.set_records(remaining);

        self.status = Some(if failed.is_empty() {
            StatusMessage::Info(format!("Deleted {} items", deleted.len()))
        } else {
            StatusMessage::Error(format!(
                "Deleted {} items, {} failed: {}",
                deleted.len(),
                failed.len(),
                failed
                    .iter()
                    .map(|(id, e)| format!("#{id} ({e})"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        });
    }

    pub fn on_cross_posted(&mut self, result: &DashboardResult<Vec<Listing>>) {
        self.status = Some(match result {
            Ok(created) => {
                self.selection.clear();
                StatusMessage::Info(format!("Created {} listings", created.len()))
            }
            Err(e) => StatusMessage::Error(format!("Cross-posting failed: {e}")),
        });
    }

    /// Selected items that have stock to cross-post, and how many selected
    /// items were left out.
    fn cross_post_ids(&self) -> (Vec<i64>, usize) {
        let selected = self.selection.numeric_ids();
        let total = selected.len();
        let postable: Vec<i64> = selected
            .into_iter()
            .filter(|id| {
                self.table
                    .records()
                    .iter()
                    .any(|item| item.id == *id && item.can_cross_post())
            })
            .collect();
        let skipped = total - postable.len();
        (postable, skipped)
    }

    fn cross_post_request(&self) -> Option<CrossPostRequest> {
        let (item_ids, skipped) = self.cross_post_ids();
        if skipped > 0 {
            info!("Skipping {skipped} selected items without stock");
        }
        if item_ids.is_empty() {
            return None;
        }
        let scheduled_at = self
            .schedule
            .then(|| Utc::now() + ChronoDuration::minutes(self.schedule_minutes.into()));
        Some(CrossPostRequest {
            item_ids,
            marketplace: MARKETPLACE.to_string(),
            scheduled_at,
        })
    }

    pub fn table(&self) -> &Table<InventoryItem> {
        &self.table
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn show(&mut self, ctx: &egui::Context, loader: &DataLoader) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Inventory");
            ui.add_space(10.0);

            self.show_toolbar(ui, &mut actions);
            if let Some(status) = &self.status {
                status.show(ui);
            }
            ui.add_space(10.0);

            TableWidget::new(&mut self.table)
                .id_salt("inventory")
                .page_size_options(DEFAULT_PAGE_SIZES)
                .show(ui);
        });

        if let Some(item) = self.clicked.borrow_mut().take() {
            self.detail = Some(item);
            self.show_detail = true;
        }
        if let Some(item) = &self.detail {
            ItemWindow::new(item, &mut self.show_detail).show(ctx);
        }
        if self.confirm_delete {
            self.show_delete_confirmation(ctx, &mut actions);
        }

        for action in actions {
            self.apply(action, ctx, loader);
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui, actions: &mut Vec<InventoryAction>) {
        let selected = self.selection.len();
        let (postable, skipped) = self.cross_post_ids();
        ui.horizontal(|ui| {
            if ui.button("🔄 Refresh").clicked() {
                actions.push(InventoryAction::Refresh);
            }
            if self.refresh.in_flight() {
                ui.spinner();
            }
            ui.separator();

            ui.label(format!("{selected} selected"));
            let cross_post = ui
                .add_enabled(
                    !postable.is_empty(),
                    egui::Button::new("Cross-post selected to eBay"),
                )
                .on_hover_text("Items without stock are skipped");
            if cross_post.clicked() {
                actions.push(InventoryAction::CrossPost);
            }
            if skipped > 0 {
                ui.weak(format!("({skipped} without stock)"));
            }
            ui.checkbox(&mut self.schedule, "Schedule in");
            ui.add_enabled(
                self.schedule,
                egui::DragValue::new(&mut self.schedule_minutes)
                    .range(1..=10_080)
                    .suffix(" min"),
            );
            if ui
                .add_enabled(selected > 0, egui::Button::new("Delete selected"))
                .clicked()
            {
                actions.push(InventoryAction::ConfirmDelete);
            }
            ui.separator();
            if ui.button("Export CSV").clicked() {
                actions.push(InventoryAction::Export);
            }
        });
    }

    fn show_delete_confirmation(&self, ctx: &egui::Context, actions: &mut Vec<InventoryAction>) {
        egui::Window::new("Delete items")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Delete {} selected items? This cannot be undone.",
                    self.selection.len()
                ));
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        actions.push(InventoryAction::Delete);
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(InventoryAction::CancelDelete);
                    }
                });
            });
    }

    fn apply(&mut self, action: InventoryAction, ctx: &egui::Context, loader: &DataLoader) {
        match action {
            InventoryAction::Refresh => self.refresh(ctx, loader),
            InventoryAction::CrossPost => {
                let Some(request) = self.cross_post_request() else {
                    self.status = Some(StatusMessage::Error(
                        "None of the selected items has stock to cross-post".to_string(),
                    ));
                    return;
                };
                info!("Cross-posting {} items", request.item_ids.len());
                self.status = Some(StatusMessage::Info("Cross-posting...".to_string()));
                loader.cross_post(ctx, request);
            }
            InventoryAction::ConfirmDelete => self.confirm_delete = true,
            InventoryAction::CancelDelete => self.confirm_delete = false,
            InventoryAction::Delete => {
                self.confirm_delete = false;
                let ids = self.selection.numeric_ids();
                info!("Deleting {} items", ids.len());
                self.status = Some(StatusMessage::Info("Deleting...".to_string()));
                loader.delete_items(ctx, ids);
            }
            InventoryAction::Export => self.export(),
        }
    }

    fn export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("inventory.csv")
            .add_filter("CSV Files", &["csv"])
            .save_file()
        else {
            return;
        };
        self.status = Some(match export_csv(&self.table, &path) {
            Ok(rows) => StatusMessage::Info(format!("Exported {rows} rows to {}", path.display())),
            Err(e) => StatusMessage::Error(format!("Export failed: {e}")),
        });
    }
}
