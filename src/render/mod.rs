//! Receipt rendering.
//!
//! The generator treats rendering as an opaque function from view model to
//! document body; [`ReceiptRenderer`] is that seam. The crate ships one
//! implementation, [`HtmlReceiptRenderer`], which mirrors the classic
//! receipt layout: title, order summary table, payment method, notes.

pub mod html;

pub use html::HtmlReceiptRenderer;

use crate::domain::ReceiptViewModel;

/// Renders a receipt view model into the final document body.
///
/// Implementations must be pure with respect to the view model: the same
/// input yields the same document.
pub trait ReceiptRenderer: Send + Sync {
    fn render(&self, view: &ReceiptViewModel) -> String;
}
