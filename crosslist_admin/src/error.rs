//! Error types for the dashboard

use table_engine::TableError;
use thiserror::Error;

/// Unified error type for backend, file and configuration failures
#[derive(Debug, Error)]
pub enum DashboardError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Backend answered with a non-success status
    #[error("HTTP error {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Missing or rejected API token
    #[error("Not authorized, check the API token")]
    Unauthorized,
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Table error: {0}")]
    Table(#[from] TableError),
    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_includes_body() {
        let error = DashboardError::HttpStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "item 7 not found".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error 404 Not Found: item 7 not found");
    }

    #[test]
    fn test_table_error_converts() {
        let error: DashboardError = TableError::InvalidPageSize(0).into();
        assert!(matches!(error, DashboardError::Table(_)));
        assert!(error.to_string().contains("invalid page size"));
    }
}
