//! Pure render passes
//!
//! Each pass maps (snapshot, view) to a patch list and mutates nothing.
//! Symbols missing from the snapshot are left alone, so their last rendered
//! values survive a partial snapshot.

use std::time::Duration;

use crate::api::PriceSnapshot;

use super::page::PageView;
use super::patch::{ChangeClass, FlashDirection, Patch};

/// Card pass: new price text, flash on movement, signed change text
///
/// A flash fires only when the new price differs from the displayed price by
/// more than `flash_threshold` (absolute), up or down by direction.
pub fn render_cards(
    snapshot: &PriceSnapshot,
    view: &PageView,
    flash_threshold: f64,
    flash_duration: Duration,
) -> Vec<Patch> {
    let mut patches = Vec::new();

    for card in &view.cards {
        let Some(quote) = snapshot.get(&card.symbol) else {
            continue;
        };

        patches.push(Patch::CardPrice {
            symbol: card.symbol.clone(),
            price: quote.price,
        });

        let delta = quote.price - card.displayed_price;
        if delta.abs() > flash_threshold {
            patches.push(Patch::Flash {
                symbol: card.symbol.clone(),
                direction: if delta > 0.0 {
                    FlashDirection::Up
                } else {
                    FlashDirection::Down
                },
                clear_after: flash_duration,
            });
        }

        patches.push(Patch::CardChange {
            symbol: card.symbol.clone(),
            change: quote.change,
            class: ChangeClass::of(quote.change),
        });
    }

    patches
}

/// Portfolio pass: recompute each row's total value and gain/loss
///
/// total = quantity x current price
/// gain  = (current price - average cost) x quantity
pub fn render_portfolio(snapshot: &PriceSnapshot, view: &PageView) -> Vec<Patch> {
    let mut patches = Vec::new();

    for row in &view.rows {
        let Some(quote) = snapshot.get(&row.symbol) else {
            continue;
        };

        let quantity = f64::from(row.quantity);
        let total = quantity * quote.price;
        let gain = (quote.price - row.avg_price) * quantity;

        patches.push(Patch::RowTotal {
            symbol: row.symbol.clone(),
            total,
        });
        patches.push(Patch::RowGain {
            symbol: row.symbol.clone(),
            gain,
            class: ChangeClass::of(gain),
        });
    }

    patches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Quote;
    use crate::view::page::{PortfolioRow, Route, StockCard};

    const THRESHOLD: f64 = 0.01;
    const FLASH: Duration = Duration::from_millis(1000);

    fn snapshot(entries: &[(&str, f64, f64)]) -> PriceSnapshot {
        entries
            .iter()
            .map(|(symbol, price, change)| {
                (
                    symbol.to_string(),
                    Quote {
                        price: *price,
                        change: *change,
                    },
                )
            })
            .collect()
    }

    fn view_with_card(symbol: &str, displayed: f64) -> PageView {
        let mut view = PageView::new(Route::Dashboard, None);
        view.cards.push(StockCard {
            symbol: symbol.to_string(),
            displayed_price: displayed,
            displayed_change: 0.0,
        });
        view
    }

    fn flashes(patches: &[Patch]) -> Vec<&Patch> {
        patches
            .iter()
            .filter(|p| matches!(p, Patch::Flash { .. }))
            .collect()
    }

    #[test]
    fn test_identical_price_no_flash() {
        let view = view_with_card("AAPL", 185.20);
        let snap = snapshot(&[("AAPL", 185.20, 4.20)]);

        let patches = render_cards(&snap, &view, THRESHOLD, FLASH);
        assert!(flashes(&patches).is_empty());
        // Price and change text are still repainted
        assert!(patches
            .iter()
            .any(|p| matches!(p, Patch::CardPrice { price, .. } if *price == 185.20)));
    }

    #[test]
    fn test_delta_at_threshold_no_flash() {
        let view = view_with_card("AAPL", 185.20);
        let snap = snapshot(&[("AAPL", 185.21, 0.01)]);

        let patches = render_cards(&snap, &view, THRESHOLD, FLASH);
        assert!(flashes(&patches).is_empty());
    }

    #[test]
    fn test_price_rise_flashes_up_once() {
        let view = view_with_card("AAPL", 185.20);
        let snap = snapshot(&[("AAPL", 186.00, 0.80)]);

        let patches = render_cards(&snap, &view, THRESHOLD, FLASH);
        let flashes = flashes(&patches);
        assert_eq!(flashes.len(), 1);
        match flashes[0] {
            Patch::Flash {
                direction,
                clear_after,
                ..
            } => {
                assert_eq!(*direction, FlashDirection::Up);
                assert_eq!(*clear_after, FLASH);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_price_drop_flashes_down() {
        let view = view_with_card("LYFT", 14.85);
        let snap = snapshot(&[("LYFT", 14.50, -0.35)]);

        let patches = render_cards(&snap, &view, THRESHOLD, FLASH);
        assert!(patches.iter().any(|p| matches!(
            p,
            Patch::Flash {
                direction: FlashDirection::Down,
                ..
            }
        )));
    }

    #[test]
    fn test_rendering_same_snapshot_twice_no_second_flash() {
        let mut view = view_with_card("AAPL", 185.20);
        let snap = snapshot(&[("AAPL", 186.00, 0.80)]);

        let first = render_cards(&snap, &view, THRESHOLD, FLASH);
        assert_eq!(flashes(&first).len(), 1);
        for patch in &first {
            view.apply(patch);
        }

        let second = render_cards(&snap, &view, THRESHOLD, FLASH);
        assert!(flashes(&second).is_empty());
    }

    #[test]
    fn test_absent_symbol_untouched() {
        let mut view = view_with_card("AAPL", 185.20);
        view.cards.push(StockCard {
            symbol: "MSFT".to_string(),
            displayed_price: 400.0,
            displayed_change: 1.0,
        });
        let snap = snapshot(&[("AAPL", 186.00, 0.80)]);

        let patches = render_cards(&snap, &view, THRESHOLD, FLASH);
        assert!(patches.iter().all(|p| !matches!(
            p,
            Patch::CardPrice { symbol, .. } if symbol == "MSFT"
        )));
    }

    #[test]
    fn test_change_classification() {
        let mut view = view_with_card("AAPL", 185.20);
        view.cards.push(StockCard {
            symbol: "LYFT".to_string(),
            displayed_price: 14.85,
            displayed_change: 0.0,
        });
        let snap = snapshot(&[("AAPL", 185.20, 4.20), ("LYFT", 14.85, -0.35)]);

        let patches = render_cards(&snap, &view, THRESHOLD, FLASH);
        assert!(patches.iter().any(|p| matches!(
            p,
            Patch::CardChange { symbol, class: ChangeClass::Positive, .. } if symbol == "AAPL"
        )));
        assert!(patches.iter().any(|p| matches!(
            p,
            Patch::CardChange { symbol, class: ChangeClass::Negative, .. } if symbol == "LYFT"
        )));
    }

    #[test]
    fn test_portfolio_totals_exact() {
        let mut view = PageView::new(Route::Portfolio, Some(1));
        view.rows.push(PortfolioRow {
            symbol: "IBM".to_string(),
            quantity: 50,
            avg_price: 150.0,
            displayed_total: 0.0,
            displayed_gain: 0.0,
        });
        let snap = snapshot(&[("IBM", 158.75, 0.85)]);

        let patches = render_portfolio(&snap, &view);
        assert_eq!(patches.len(), 2);
        assert!(patches.iter().any(|p| matches!(
            p,
            Patch::RowTotal { total, .. } if *total == 50.0 * 158.75
        )));
        assert!(patches.iter().any(|p| matches!(
            p,
            Patch::RowGain { gain, class: ChangeClass::Positive, .. }
                if *gain == (158.75 - 150.0) * 50.0
        )));
    }

    #[test]
    fn test_portfolio_loss_negative_class() {
        let mut view = PageView::new(Route::Portfolio, Some(1));
        view.rows.push(PortfolioRow {
            symbol: "INTC".to_string(),
            quantity: 10,
            avg_price: 50.0,
            displayed_total: 0.0,
            displayed_gain: 0.0,
        });
        let snap = snapshot(&[("INTC", 43.20, -0.60)]);

        let patches = render_portfolio(&snap, &view);
        assert!(patches.iter().any(|p| matches!(
            p,
            Patch::RowGain { gain, class: ChangeClass::Negative, .. }
                if (*gain - (43.20 - 50.0) * 10.0).abs() < 1e-9
        )));
    }

    #[test]
    fn test_portfolio_absent_symbol_skipped() {
        let mut view = PageView::new(Route::Portfolio, Some(1));
        view.rows.push(PortfolioRow {
            symbol: "GONE".to_string(),
            quantity: 5,
            avg_price: 10.0,
            displayed_total: 55.0,
            displayed_gain: 5.0,
        });
        let snap = snapshot(&[("IBM", 158.75, 0.85)]);

        assert!(render_portfolio(&snap, &view).is_empty());
    }
}
