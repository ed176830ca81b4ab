//! Stocker server API
//!
//! Wire types and the HTTP client for the endpoints the page consumes:
//!
//! - `GET /api/stocks` - full price snapshot
//! - `GET /api/portfolio/{id}` - aggregate portfolio value
//! - `DELETE /admin/users/{id}` - admin delete
//! - `POST /admin/users/{id}/suspend` - admin suspend
//!
//! All calls go through the [`StockerApi`] trait so the sync loop can be
//! exercised without a live server.

mod client;
mod types;

pub use client::{StockerApi, StockerClient};
pub use types::{PortfolioSummary, PriceSnapshot, Quote};
