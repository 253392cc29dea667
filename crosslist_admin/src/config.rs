//! Command line and settings file configuration.
//!
//! Precedence is command line (or its environment variables), then the
//! settings file, then built-in defaults.

use crate::error::{DashboardError, DashboardResult};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Admin dashboard for inventory and marketplace cross-listings
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "crosslist_admin")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the backend REST API
    #[arg(long, env = "CROSSLIST_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, env = "CROSSLIST_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Rows per page in the list views
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Auto-refresh interval in seconds (0 disables auto-refresh)
    #[arg(long)]
    pub refresh_secs: Option<u64>,

    /// Path to the settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub api_token: Option<String>,
    pub page_size: usize,
    pub refresh_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl Settings {
    /// Default settings file: ~/.config/crosslist_admin/settings.json
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("crosslist_admin")
            .join("settings.json")
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => {
                    log::warn!("Failed to parse settings file, using defaults: {}", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read settings file, using defaults: {}", e);
            }
        }
        Self::default()
    }

    pub fn save_to(&self, path: &Path) -> DashboardResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn save(&self) -> DashboardResult<()> {
        self.save_to(&Self::default_path())
    }

    /// Overlay values given on the command line.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(url) = &args.api_url {
            self.api_url = url.clone();
        }
        if let Some(token) = &args.api_token {
            self.api_token = Some(token.clone());
        }
        if let Some(page_size) = args.page_size {
            self.page_size = page_size;
        }
        if let Some(refresh_secs) = args.refresh_secs {
            self.refresh_secs = refresh_secs;
        }
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.page_size == 0 {
            return Err(DashboardError::Config(
                "page size must be greater than zero".to_string(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(DashboardError::Config("API URL must not be empty".to_string()));
        }
        Ok(())
    }

    /// Resolve the effective settings for a run.
    pub fn resolve(args: &Args) -> DashboardResult<Self> {
        let path = args.settings.clone().unwrap_or_else(Self::default_path);
        let settings = Self::load_from(&path).with_args(args);
        settings.validate()?;
        Ok(settings)
    }

    /// `None` when auto-refresh is disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }
}
