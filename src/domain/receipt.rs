//! Receipt types: the artifact handle and the render-ready view model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque name of a stored receipt artifact.
///
/// A handle recorded in order metadata may outlive the artifact it names:
/// the transient file store garbage-collects expired artifacts on its own
/// schedule. Validity must therefore be re-checked against the store on every
/// read; holding a handle proves nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptHandle(String);

impl ReceiptHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the receipt's summary table: a label and a formatted amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub label: String,
    pub amount: String,
}

impl ReceiptLine {
    pub fn new(label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
        }
    }
}

/// Ephemeral, render-ready data derived from an [`Order`](crate::domain::Order).
///
/// Built fresh per generation request and never persisted; the renderer is its
/// only consumer. Line rows are pre-ordered (products, Subtotal, fees,
/// discounts, Shipping, Taxes, Amount Paid) and all amounts arrive already
/// formatted in the order's currency.
///
/// `card_brand` and `card_last4` are deliberately unwired: the real source of
/// that data (stored payment token metadata?) is not established yet, so they
/// stay `None` until a requirement pins it down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptViewModel {
    /// `"Receipt from {store}"`, or plain `"Receipt"` when no store name is configured.
    pub receipt_title: String,
    /// `"Summary: Order #{id}"`, or plain `"Summary"` for anonymous orders.
    pub summary_title: String,
    pub lines: Vec<ReceiptLine>,
    pub payment_method: String,
    pub date_paid: Option<DateTime<Utc>>,
    pub notes: Vec<String>,
    pub card_brand: Option<String>,
    pub card_last4: Option<String>,
}
