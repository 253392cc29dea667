use eframe::egui;
use std::time::{Duration, Instant};
use table_engine::egui_table::class_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Inventory,
    Listings,
    Shipments,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Inventory,
        Screen::Listings,
        Screen::Shipments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Inventory => "Inventory",
            Screen::Listings => "Listings",
            Screen::Shipments => "Shipments",
        }
    }
}

/// One-line feedback shown under a screen's toolbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        match self {
            StatusMessage::Info(text) => {
                ui.label(text);
            }
            StatusMessage::Error(text) => {
                let color = class_color("error").unwrap_or(egui::Color32::RED);
                ui.colored_label(color, text);
            }
        }
    }
}

/// When a list was last requested and whether a request is in flight.
#[derive(Debug, Default)]
pub struct RefreshState {
    last_request: Option<Instant>,
    in_flight: bool,
}

impl RefreshState {
    /// Due on first use, then every `interval`; never while a request is
    /// still running.
    pub fn is_due(&self, interval: Option<Duration>) -> bool {
        if self.in_flight {
            return false;
        }
        match (self.last_request, interval) {
            (None, _) => true,
            (Some(at), Some(interval)) => at.elapsed() >= interval,
            (Some(_), None) => false,
        }
    }

    pub fn started(&mut self) {
        self.last_request = Some(Instant::now());
        self.in_flight = true;
    }

    pub fn finished(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
