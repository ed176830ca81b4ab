//! Live Sync Module
//!
//! The core of the crate: a single repeating timer that polls the server
//! and patches the page view through the attached surface.
//!
//! # Usage Pattern
//!
//! ```ignore
//! use std::sync::Arc;
//! use stocker_sync::api::StockerClient;
//! use stocker_sync::surface::LogSurface;
//! use stocker_sync::sync::{PriceSyncController, SyncConfig};
//! use stocker_sync::view::{PageView, Route};
//!
//! let api = Arc::new(StockerClient::new("http://127.0.0.1:5000"));
//! let view = PageView::new(Route::Dashboard, Some(7));
//! let mut controller =
//!     PriceSyncController::new(api, view, Box::new(LogSurface), SyncConfig::default());
//!
//! controller.start().await;
//! // ... page lifetime ...
//! controller.stop();
//! ```

mod controller;
mod flash;

pub use controller::{PriceSyncController, SyncConfig};
pub use flash::FlashTracker;
