//! Render output: the patch list
//!
//! Render passes are pure functions of (snapshot, view) and emit these
//! patches instead of touching anything directly. A surface turns them into
//! visible changes; [`PageView::apply`](super::page::PageView::apply) folds
//! them back into the displayed state.

use std::fmt;
use std::time::Duration;

use crate::helpers::{format_currency, format_signed_currency};

use super::page::Route;

/// Direction of a price flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashDirection {
    /// Price rose - success styling
    Up,
    /// Price fell - danger styling
    Down,
}

/// Sign classification for change and gain/loss text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeClass {
    Positive,
    Negative,
}

impl ChangeClass {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            ChangeClass::Positive
        } else {
            ChangeClass::Negative
        }
    }
}

/// One display mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Replace a card's price text
    CardPrice { symbol: String, price: f64 },
    /// Replace a card's change text and styling class
    CardChange {
        symbol: String,
        change: f64,
        class: ChangeClass,
    },
    /// Transient highlight on a card whose price moved
    Flash {
        symbol: String,
        direction: FlashDirection,
        clear_after: Duration,
    },
    /// Remove an expired flash
    ClearFlash { symbol: String },
    /// Replace a portfolio row's total value text
    RowTotal { symbol: String, total: f64 },
    /// Replace a portfolio row's gain/loss text and styling class
    RowGain {
        symbol: String,
        gain: f64,
        class: ChangeClass,
    },
    /// Replace the dashboard's aggregate portfolio value
    PortfolioValue { value: f64 },
    /// Leave the current page
    Navigate { route: Route },
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::CardPrice { symbol, price } => {
                write!(f, "{symbol} price {}", format_currency(*price))
            }
            Patch::CardChange { symbol, change, class } => {
                write!(
                    f,
                    "{symbol} change {} ({class:?})",
                    format_signed_currency(*change)
                )
            }
            Patch::Flash { symbol, direction, .. } => write!(f, "{symbol} flash {direction:?}"),
            Patch::ClearFlash { symbol } => write!(f, "{symbol} flash cleared"),
            Patch::RowTotal { symbol, total } => {
                write!(f, "{symbol} holding total {}", format_currency(*total))
            }
            Patch::RowGain { symbol, gain, class } => {
                write!(
                    f,
                    "{symbol} gain/loss {} ({class:?})",
                    format_signed_currency(*gain)
                )
            }
            Patch::PortfolioValue { value } => {
                write!(f, "portfolio value {}", format_currency(*value))
            }
            Patch::Navigate { route } => write!(f, "navigate to {route:?}"),
        }
    }
}
