use crate::formatters::{format_optional_timestamp, format_price, format_quantity};
use crate::models::InventoryItem;
use eframe::egui;

/// Read-only detail view of one inventory item
pub struct ItemWindow<'a> {
    pub item: &'a InventoryItem,
    pub show: &'a mut bool,
}

impl<'a> ItemWindow<'a> {
    pub fn new(item: &'a InventoryItem, show: &'a mut bool) -> Self {
        Self { item, show }
    }

    /// Label/value pairs in display order.
    pub fn rows(item: &InventoryItem) -> Vec<(&'static str, String)> {
        vec![
            ("ID", item.id.to_string()),
            ("SKU", item.sku.clone()),
            ("Title", item.title.clone()),
            ("Quantity", format_quantity(item.quantity)),
            ("Price", format_price(item.price)),
            ("Condition", item.condition.clone().unwrap_or_else(|| "—".to_string())),
            ("Location", item.location.clone().unwrap_or_else(|| "—".to_string())),
            ("Updated", format_optional_timestamp(item.updated_at)),
        ]
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let mut open = *self.show;
        egui::Window::new(format!("Item {}", self.item.sku))
            .open(&mut open)
            .default_size([360.0, 240.0])
            .collapsible(false)
            .show(ctx, |ui| {
                egui::Grid::new(("item_details", self.item.id))
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for (label, value) in Self::rows(self.item) {
                            ui.strong(label);
                            ui.label(value);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Copy SKU").clicked() {
                        ui.ctx().copy_text(self.item.sku.clone());
                    }
                    if ui.button("Close").clicked() {
                        *self.show = false;
                    }
                });
            });
        if !open {
            *self.show = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fill_missing_fields() {
        let item = InventoryItem {
            id: 5,
            sku: "LAMP-01".to_string(),
            title: "Desk lamp".to_string(),
            quantity: -1,
            price: 9.0,
            condition: None,
            location: None,
            updated_at: None,
        };
        let rows = ItemWindow::rows(&item);
        assert_eq!(rows[3], ("Quantity", "-1 (oversold)".to_string()));
        assert_eq!(rows[5], ("Condition", "—".to_string()));
        assert_eq!(rows[7], ("Updated", "—".to_string()));
    }
}
