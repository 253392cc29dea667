use crate::error::DashboardResult;
use crate::formatters::format_optional_timestamp;
use crate::models::Shipment;
use crate::ui::loader::DataLoader;
use crate::ui::state::{RefreshState, StatusMessage};
use eframe::egui;
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use table_engine::{ColumnDescriptor, Table, TableConfig, TableWidget};

pub struct ShipmentsScreen {
    table: Table<Shipment>,
    /// Tracking number of the last clicked row, copied on the next frame
    copy_request: Rc<RefCell<Option<String>>>,
    refresh: RefreshState,
    status: Option<StatusMessage>,
}

impl ShipmentsScreen {
    pub fn new(page_size: usize) -> DashboardResult<Self> {
        let columns = vec![
            ColumnDescriptor::new("order_ref", "Order").width(120.0),
            ColumnDescriptor::new("carrier", "Carrier").filterable(true),
            ColumnDescriptor::new("tracking_number", "Tracking").width(180.0),
            ColumnDescriptor::new("status", "Status").filterable(true),
            ColumnDescriptor::new("shipped_at", "Shipped")
                .render(|shipment: &Shipment| format_optional_timestamp(shipment.shipped_at)),
        ];
        let config = TableConfig::default()
            .filtering(true)
            .page_size(page_size)
            .empty_message("No shipments");

        let copy_request = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&copy_request);
        let table = Table::new(columns, config)?.on_row_click(move |shipment: &Shipment| {
            *sink.borrow_mut() = shipment.tracking_number.clone();
        });

        Ok(Self {
            table,
            copy_request,
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
        loader.load_shipments(ctx);
    }

    pub fn on_loaded(&mut self, result: DashboardResult<Vec<Shipment>>) {
        self.refresh.finished();
        self.table.set_loading(false);
        match result {
            Ok(shipments) => self.table.set_records(shipments),
            Err(e) => {
                warn!("Failed to load shipments: {e}");
                self.table.set_error(Some(e.to_string()));
            }
        }
    }

    pub fn table(&self) -> &Table<Shipment> {
        &self.table
    }

    pub fn show(&mut self, ctx: &egui::Context, loader: &DataLoader) {
        let mut refresh = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Shipments");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("🔄 Refresh").clicked() {
                    refresh = true;
                }
                if self.refresh.in_flight() {
                    ui.spinner();
                }
                ui.label("Click a row to copy its tracking number");
            });
            if let Some(status) = &self.status {
                status.show(ui);
            }
            ui.add_space(10.0);

            TableWidget::new(&mut self.table).id_salt("shipments").show(ui);
        });

        if let Some(tracking) = self.copy_request.borrow_mut().take() {
            info!("Copied tracking number {tracking}");
            ctx.copy_text(tracking.clone());
            self.status = Some(StatusMessage::Info(format!("Copied {tracking}")));
        }
        if refresh {
            self.refresh(ctx, loader);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_engine::{RowId, RowKey, TableEvent};

    fn shipment(id: &str, carrier: &str, status: &str) -> Shipment {
        Shipment {
            id: id.to_string(),
            order_ref: format!("ORD-{id}"),
            carrier: carrier.to_string(),
            tracking_number: Some(format!("TRK-{id}")),
            status: status.to_string(),
            shipped_at: None,
        }
    }

    #[test]
    fn test_carrier_and_status_filters_combine() {
        let mut screen = ShipmentsScreen::new(25).unwrap();
        screen.on_loaded(Ok(vec![
            shipment("a", "DHL", "in_transit"),
            shipment("b", "UPS", "in_transit"),
            shipment("c", "DHL", "delivered"),
        ]));

        screen.table.set_filter("carrier", "dhl");
        screen.table.set_filter("status", "transit");

        let ids: Vec<&str> = screen
            .table()
            .processed_records()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a"]);
        // Tracking is not filterable.
        assert!(!screen.table.set_filter("tracking_number", "TRK"));
    }

    #[test]
    fn test_row_click_requests_copy_of_tracking_number() {
        let mut screen = ShipmentsScreen::new(25).unwrap();
        screen.on_loaded(Ok(vec![shipment("a", "DHL", "in_transit")]));

        screen
            .table
            .handle(TableEvent::RowClicked(RowKey::Id(RowId::from("a"))));

        assert_eq!(
            screen.copy_request.borrow().as_deref(),
            Some("TRK-a")
        );
    }
}
