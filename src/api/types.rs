//! Wire types for the Stocker server API

use std::collections::HashMap;

use serde::Deserialize;

/// One symbol's current quote as served by `/api/stocks`
///
/// The server also sends a display `name` per symbol; only the fields the
/// sync loop consumes are kept.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Quote {
    /// Last price
    pub price: f64,
    /// Absolute change since the previous quote
    pub change: f64,
}

/// The full price mapping returned by one poll
///
/// Produced fresh on each tick; a superseded snapshot is simply dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PriceSnapshot(pub HashMap<String, Quote>);

impl PriceSnapshot {
    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.0.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Quote)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Quote)> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Quote)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregate holdings value for one account, from `/api/portfolio/{id}`
///
/// The endpoint also returns the per-position breakdown; the dashboard stat
/// only needs the aggregate.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioSummary {
    pub portfolio_value: f64,
}
