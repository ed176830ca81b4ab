//! Trade form total and the large-trade gate

use crate::errors::Result;
use crate::helpers::{format_currency, parse_currency};
use crate::surface::Surface;

/// The trade form as typed state
///
/// The page shows the unit price as formatted currency text, so the form is
/// usually built via [`TradeForm::from_displayed_price`].
#[derive(Debug, Clone)]
pub struct TradeForm {
    pub symbol: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl TradeForm {
    pub fn new(symbol: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            unit_price,
        }
    }

    /// Build from the displayed price text, e.g. `"$250.00"`
    pub fn from_displayed_price(
        symbol: impl Into<String>,
        quantity: u32,
        price_text: &str,
    ) -> Result<Self> {
        Ok(Self::new(symbol, quantity, parse_currency(price_text)?))
    }

    /// Recomputed on every quantity edit and at load
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// quantity x unit price
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    /// Whether this trade is large enough to need confirmation
    pub fn requires_confirmation(&self, threshold: f64) -> bool {
        self.total() > threshold
    }

    /// Gate a submission: large trades must be confirmed or they are
    /// cancelled. Returns whether the submission proceeds.
    pub fn submit(&self, surface: &mut dyn Surface, threshold: f64) -> bool {
        if !self.requires_confirmation(threshold) {
            return true;
        }
        surface.confirm(&format!(
            "This is a large trade worth {}. Are you sure you want to proceed?",
            format_currency(self.total())
        ))
    }
}
