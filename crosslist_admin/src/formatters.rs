use crate::models::{Listing, ListingStatus};
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn format_price(price: f64) -> String {
    format!("{price:.2} €")
}

pub fn format_quantity(quantity: i64) -> String {
    if quantity < 0 {
        format!("{quantity} (oversold)")
    } else {
        quantity.to_string()
    }
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_optional_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map(format_timestamp).unwrap_or_else(|| "—".to_string())
}

/// Publish state of a listing as shown in the listings view.
///
/// Publishing itself is done by a backend job; this only describes where a
/// scheduled listing stands relative to `now`.
pub fn schedule_label(listing: &Listing, now: DateTime<Utc>) -> String {
    match (listing.status, listing.scheduled_at) {
        (ListingStatus::Scheduled, Some(at)) if at > now => format!(
            "Scheduled for {} (publisher runs every minute)",
            format_timestamp(at)
        ),
        (ListingStatus::Scheduled, _) => "Due, waiting for publisher".to_string(),
        _ => "—".to_string(),
    }
}

/// Style tag for a listing status cell.
pub fn status_class(status: ListingStatus) -> Option<&'static str> {
    match status {
        ListingStatus::Draft | ListingStatus::Ended => Some("muted"),
        ListingStatus::Scheduled => Some("info"),
        ListingStatus::Active => Some("success"),
        ListingStatus::Failed => Some("danger"),
    }
}
