use config::{Config, File};
pub use config::ConfigError;
use serde::Deserialize;

use crate::consts::{
    DEFAULT_POLL_INTERVAL_MS, FLASH_DURATION_MS, FLASH_THRESHOLD, LARGE_TRADE_THRESHOLD,
    LOCAL_SERVER_URL, NOTIFICATION_TTL_MS,
};
use crate::sync::SyncConfig;
use crate::view::{PageView, PortfolioRow, Route, StockCard};

/// Main configuration struct
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Server configuration (base URL)
    #[serde(default)]
    pub server: ServerConfig,
    /// Sync loop timing
    #[serde(default)]
    pub sync: SyncSettings,
    /// Form thresholds
    #[serde(default)]
    pub forms: FormsConfig,
    /// Notification lifetime
    #[serde(default)]
    pub notify: NotifyConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Initial page state for the standalone binary
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Stocker server base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    LOCAL_SERVER_URL.to_string()
}

#[derive(Debug, Deserialize)]
pub struct SyncSettings {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_flash_threshold")]
    pub flash_threshold: f64,
    #[serde(default = "default_flash_duration_ms")]
    pub flash_duration_ms: u64,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            flash_threshold: default_flash_threshold(),
            flash_duration_ms: default_flash_duration_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_flash_threshold() -> f64 {
    FLASH_THRESHOLD
}

fn default_flash_duration_ms() -> u64 {
    FLASH_DURATION_MS
}

#[derive(Debug, Deserialize)]
pub struct FormsConfig {
    #[serde(default = "default_large_trade_threshold")]
    pub large_trade_threshold: f64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            large_trade_threshold: default_large_trade_threshold(),
        }
    }
}

fn default_large_trade_threshold() -> f64 {
    LARGE_TRADE_THRESHOLD
}

#[derive(Debug, Deserialize)]
pub struct NotifyConfig {
    #[serde(default = "default_notification_ttl_ms")]
    pub ttl_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_notification_ttl_ms(),
        }
    }
}

fn default_notification_ttl_ms() -> u64 {
    NOTIFICATION_TTL_MS
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Seed state for the page the binary pretends to be showing
#[derive(Debug, Deserialize)]
pub struct PageConfig {
    /// Route: "dashboard", "portfolio", "admin", "trade:SYMBOL", or other
    #[serde(default = "default_route")]
    pub route: String,
    /// Signed-in account id, if any
    pub holder_id: Option<u64>,
    #[serde(default)]
    pub cards: Vec<StockCard>,
    #[serde(default)]
    pub rows: Vec<PortfolioRow>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            route: default_route(),
            holder_id: None,
            cards: Vec::new(),
            rows: Vec::new(),
        }
    }
}

fn default_route() -> String {
    "dashboard".to_string()
}

impl PageConfig {
    pub fn route(&self) -> Route {
        match self.route.as_str() {
            "dashboard" => Route::Dashboard,
            "portfolio" => Route::Portfolio,
            "admin" => Route::Admin,
            other => match other.strip_prefix("trade:") {
                Some(symbol) => Route::Trade(symbol.to_string()),
                None => Route::Other,
            },
        }
    }

    pub fn view(&self) -> PageView {
        let mut view = PageView::new(self.route(), self.holder_id);
        view.cards = self.cards.clone();
        view.rows = self.rows.clone();
        view
    }
}

impl Settings {
    /// Load settings from a configuration file
    pub fn new(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Add configuration file
            .add_source(File::with_name(config_path))
            // Add environment variables (overrides file)
            // e.g. STOCKER_SERVER__BASE_URL=...
            .add_source(config::Environment::with_prefix("STOCKER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig {
            poll_interval: std::time::Duration::from_millis(self.sync.poll_interval_ms),
            flash_threshold: self.sync.flash_threshold,
            flash_duration: std::time::Duration::from_millis(self.sync.flash_duration_ms),
        }
    }
}
