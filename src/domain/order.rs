//! Order domain types.
//!
//! An [`Order`] is owned by the external order store; this crate only reads it
//! (plus one metadata key, which the store mediates; see
//! [`crate::stores::OrderStore`]). The types here mirror exactly the slice of
//! an order a receipt needs: line items, fees, coupons, taxes, totals, payment
//! summary, and customer-visible notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier of an order.
///
/// `OrderId(0)` is legal and means "anonymous": such orders get the generic
/// `Summary` heading instead of `Summary: Order #{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId(id)
    }
}

/// A purchased product line.
///
/// For variation products `name` carries the **parent** product name and
/// `attribute_summary` the variation attributes (e.g. `"Color: Blue, Size: M"`).
/// Simple products leave `attribute_summary` unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub name: String,
    pub attribute_summary: Option<String>,
    pub quantity: u32,
    pub line_total: f64,
}

impl OrderLineItem {
    pub fn new(name: impl Into<String>, quantity: u32, line_total: f64) -> Self {
        Self {
            name: name.into(),
            attribute_summary: None,
            quantity,
            line_total,
        }
    }

    /// A variation line: parent product name plus an attribute summary.
    pub fn variation(
        parent_name: impl Into<String>,
        attribute_summary: impl Into<String>,
        quantity: u32,
        line_total: f64,
    ) -> Self {
        Self {
            name: parent_name.into(),
            attribute_summary: Some(attribute_summary.into()),
            quantity,
            line_total,
        }
    }
}

/// An extra charge on the order. Unnamed fees render with a generic label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFee {
    pub name: Option<String>,
    pub amount: f64,
}

/// A coupon applied to the order. `discount` is the positive amount taken off;
/// the receipt shows it negated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCoupon {
    pub code: String,
    pub discount: f64,
}

/// One tax line; the receipt shows the sum of all lines as a single row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTaxLine {
    pub label: String,
    pub amount: f64,
}

/// A customer-visible order note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderNote {
    pub text: String,
}

/// The read-only order slice consumed by receipt generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// ISO 4217 currency code (e.g. "USD").
    pub currency: String,
    pub line_items: Vec<OrderLineItem>,
    pub fees: Vec<OrderFee>,
    pub coupons: Vec<OrderCoupon>,
    pub tax_lines: Vec<OrderTaxLine>,
    pub shipping_total: f64,
    pub total: f64,
    pub payment_method_title: String,
    pub date_paid: Option<DateTime<Utc>>,
    pub notes: Vec<OrderNote>,
}

impl Order {
    /// Creates an empty order shell; callers fill in the line data directly.
    pub fn new(id: impl Into<OrderId>, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
            line_items: Vec::new(),
            fees: Vec::new(),
            coupons: Vec::new(),
            tax_lines: Vec::new(),
            shipping_total: 0.0,
            total: 0.0,
            payment_method_title: String::new(),
            date_paid: None,
            notes: Vec::new(),
        }
    }

    /// Sum of all product line totals (the receipt's Subtotal row).
    pub fn items_subtotal(&self) -> f64 {
        self.line_items.iter().map(|item| item.line_total).sum()
    }

    /// Sum of all tax-line totals (the receipt's Taxes row).
    pub fn taxes_total(&self) -> f64 {
        self.tax_lines.iter().map(|line| line.amount).sum()
    }
}

/// Reference to an order: either an identity to resolve against the store, or
/// an order the caller already resolved.
///
/// Resolution of an `Id` that matches no order is a legitimate empty result
/// ("absent"), never an error.
#[derive(Debug, Clone)]
pub enum OrderRef {
    Id(OrderId),
    Resolved(Order),
}

impl From<OrderId> for OrderRef {
    fn from(id: OrderId) -> Self {
        OrderRef::Id(id)
    }
}

impl From<u64> for OrderRef {
    fn from(id: u64) -> Self {
        OrderRef::Id(OrderId(id))
    }
}

impl From<Order> for OrderRef {
    fn from(order: Order) -> Self {
        OrderRef::Resolved(order)
    }
}
