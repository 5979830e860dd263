//! Domain types: orders (externally owned, read-only here), receipt handles,
//! and the ephemeral receipt view model.

pub mod money;
pub mod order;
pub mod receipt;

pub use money::{CurrencyFormatter, SimpleCurrencyFormatter};
pub use order::{
    Order, OrderCoupon, OrderFee, OrderId, OrderLineItem, OrderNote, OrderRef, OrderTaxLine,
};
pub use receipt::{ReceiptHandle, ReceiptLine, ReceiptViewModel};
