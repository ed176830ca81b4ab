//! Currency and percentage formatting helpers
//!
//! The rendered page shows formatted currency text, so both directions are
//! needed: formatting typed values for display and parsing displayed text
//! back into numbers (the trade form's unit price only exists as text).

use crate::errors::{Error, Result};

/// Format an amount as dollar text, e.g. `1234.5` -> `"$1234.50"`
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Format a signed dollar amount, e.g. `2.1` -> `"+$2.10"`, `-1.95` -> `"-$1.95"`
pub fn format_signed_currency(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+${amount:.2}")
    } else {
        format!("-${:.2}", amount.abs())
    }
}

/// Format a ratio as percent text, e.g. `0.1234` -> `"12.34%"`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Parse displayed currency text back into a number
///
/// Accepts an optional leading sign and `$`, e.g. `"$250.00"`, `"+$2.10"`,
/// `"-$1.95"`.
pub fn parse_currency(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest.strip_prefix('$').unwrap_or(rest);
    digits
        .parse::<f64>()
        .map(|v| sign * v)
        .map_err(|_| Error::CurrencyParse(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(185.204), "$185.20");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed_currency(2.1), "+$2.10");
        assert_eq!(format_signed_currency(0.0), "+$0.00");
        assert_eq!(format_signed_currency(-1.95), "-$1.95");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.1234), "12.34%");
        assert_eq!(format_percentage(-0.005), "-0.50%");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$250.00").unwrap(), 250.0);
        assert_eq!(parse_currency("+$2.10").unwrap(), 2.1);
        assert_eq!(parse_currency("-$1.95").unwrap(), -1.95);
        assert_eq!(parse_currency(" $14.85 ").unwrap(), 14.85);
        assert_eq!(parse_currency("65.4").unwrap(), 65.4);
    }

    #[test]
    fn test_parse_currency_invalid() {
        assert!(parse_currency("").is_err());
        assert!(parse_currency("$").is_err());
        assert!(parse_currency("abc").is_err());
    }

    #[test]
    fn test_round_trip() {
        let text = format_currency(42.42);
        assert_eq!(parse_currency(&text).unwrap(), 42.42);
    }
}
