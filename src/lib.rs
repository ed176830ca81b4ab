#![deny(unreachable_pub)]
pub mod admin;
pub mod api;
pub mod config;
mod consts;
pub mod errors;
pub mod events;
pub mod forms;
mod helpers;
pub mod notify;
pub mod runner;
pub mod surface;
pub mod sync;
pub mod view;
pub use consts::{
    DEFAULT_POLL_INTERVAL_MS, FLASH_DURATION_MS, FLASH_THRESHOLD, LARGE_TRADE_THRESHOLD,
    LOCAL_SERVER_URL, NOTIFICATION_TTL_MS,
};
pub use errors::{Error, Result};
pub use helpers::{format_currency, format_percentage, format_signed_currency, parse_currency};
