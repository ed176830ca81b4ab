//! Typed view state for the rendered page
//!
//! Replaces DOM-query reads: everything the sync loop needs to know about
//! the page (which cards and rows exist, what they currently display, whose
//! dashboard this is) lives here as explicit typed state. Quantities and
//! average costs are attributes cached from the rendered markup; the page
//! owns them, the controller only reads them.

use serde::Deserialize;

use super::patch::Patch;

/// Which page the user is currently on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Trade(String),
    Portfolio,
    Admin,
    Other,
}

/// A rendered stock card and the values it currently displays
#[derive(Debug, Clone, Deserialize)]
pub struct StockCard {
    pub symbol: String,
    pub displayed_price: f64,
    #[serde(default)]
    pub displayed_change: f64,
}

/// A rendered portfolio row
///
/// `quantity` and `avg_price` come from the markup; `displayed_total` and
/// `displayed_gain` are what the row currently shows.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioRow {
    pub symbol: String,
    pub quantity: u32,
    pub avg_price: f64,
    #[serde(default)]
    pub displayed_total: f64,
    #[serde(default)]
    pub displayed_gain: f64,
}

/// The whole visible page as the controller sees it
#[derive(Debug, Clone)]
pub struct PageView {
    pub route: Route,
    /// Signed-in account id, if the page carries one
    pub holder_id: Option<u64>,
    pub cards: Vec<StockCard>,
    pub rows: Vec<PortfolioRow>,
    /// The dashboard's aggregate portfolio value element
    pub portfolio_value_stat: Option<f64>,
}

impl PageView {
    pub fn new(route: Route, holder_id: Option<u64>) -> Self {
        Self {
            route,
            holder_id,
            cards: Vec::new(),
            rows: Vec::new(),
            portfolio_value_stat: None,
        }
    }

    /// Whether live updates have anything to drive
    pub fn has_priced_elements(&self) -> bool {
        !self.cards.is_empty() || !self.rows.is_empty()
    }

    pub fn card(&self, symbol: &str) -> Option<&StockCard> {
        self.cards.iter().find(|c| c.symbol == symbol)
    }

    pub fn row(&self, symbol: &str) -> Option<&PortfolioRow> {
        self.rows.iter().find(|r| r.symbol == symbol)
    }

    /// Fold a patch into the displayed state
    ///
    /// Flashes, navigation, and confirmation are surface concerns and leave
    /// the view untouched.
    pub fn apply(&mut self, patch: &Patch) {
        match patch {
            Patch::CardPrice { symbol, price } => {
                if let Some(card) = self.cards.iter_mut().find(|c| &c.symbol == symbol) {
                    card.displayed_price = *price;
                }
            }
            Patch::CardChange { symbol, change, .. } => {
                if let Some(card) = self.cards.iter_mut().find(|c| &c.symbol == symbol) {
                    card.displayed_change = *change;
                }
            }
            Patch::RowTotal { symbol, total } => {
                if let Some(row) = self.rows.iter_mut().find(|r| &r.symbol == symbol) {
                    row.displayed_total = *total;
                }
            }
            Patch::RowGain { symbol, gain, .. } => {
                if let Some(row) = self.rows.iter_mut().find(|r| &r.symbol == symbol) {
                    row.displayed_gain = *gain;
                }
            }
            Patch::PortfolioValue { value } => {
                self.portfolio_value_stat = Some(*value);
            }
            Patch::Flash { .. } | Patch::ClearFlash { .. } | Patch::Navigate { .. } => {}
        }
    }
}
