//! Money formatting collaborator.
//!
//! Receipt amounts are formatted in the order's currency by the host
//! application's rules; this crate does not own those rules. The
//! [`CurrencyFormatter`] trait is the seam, and [`SimpleCurrencyFormatter`]
//! is a small default good enough for receipts in common currencies.

/// Formats a monetary amount in a given currency.
///
/// Injected into the generator so the host can supply its own locale-aware
/// formatting without this crate reimplementing it.
pub trait CurrencyFormatter: Send + Sync {
    /// `currency` is an ISO 4217 code, e.g. "USD".
    fn format(&self, amount: f64, currency: &str) -> String;
}

/// Symbol-prefix formatter with two decimal places.
///
/// Unknown currencies fall back to `"{amount} {CODE}"`. Negative amounts keep
/// the sign ahead of the symbol (`-$5.00`), which is how discounts render.
#[derive(Debug, Default, Clone)]
pub struct SimpleCurrencyFormatter;

impl SimpleCurrencyFormatter {
    pub fn new() -> Self {
        Self
    }

    fn symbol(currency: &str) -> Option<&'static str> {
        match currency {
            "USD" | "CAD" | "AUD" | "NZD" | "MXN" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }
}

impl CurrencyFormatter for SimpleCurrencyFormatter {
    fn format(&self, amount: f64, currency: &str) -> String {
        match Self::symbol(currency) {
            Some(symbol) => {
                if amount < 0.0 {
                    format!("-{}{:.2}", symbol, amount.abs())
                } else {
                    format!("{}{:.2}", symbol, amount)
                }
            }
            None => format!("{:.2} {}", amount, currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_symbol() {
        let fmt = SimpleCurrencyFormatter::new();
        assert_eq!(fmt.format(12.5, "USD"), "$12.50");
        assert_eq!(fmt.format(3.0, "EUR"), "€3.00");
    }

    #[test]
    fn negative_keeps_sign_before_symbol() {
        let fmt = SimpleCurrencyFormatter::new();
        assert_eq!(fmt.format(-5.0, "USD"), "-$5.00");
    }

    #[test]
    fn unknown_currency_falls_back_to_code() {
        let fmt = SimpleCurrencyFormatter::new();
        assert_eq!(fmt.format(99.9, "CHF"), "99.90 CHF");
    }
}
