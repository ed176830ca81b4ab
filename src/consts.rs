pub const LOCAL_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Wall-clock spacing between price polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// Absolute price delta below which a repaint is not treated as a change.
pub const FLASH_THRESHOLD: f64 = 0.01;

/// How long a price flash stays on screen before it is cleared.
pub const FLASH_DURATION_MS: u64 = 1000;

/// Notifications auto-dismiss after this long.
pub const NOTIFICATION_TTL_MS: u64 = 5000;

/// Trades above this total require interactive confirmation.
pub const LARGE_TRADE_THRESHOLD: f64 = 10_000.0;
