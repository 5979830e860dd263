//! Minimal HTML receipt renderer.

use crate::domain::ReceiptViewModel;
use crate::render::ReceiptRenderer;

/// Renders the receipt as a small self-contained HTML document.
///
/// All dynamic text is escaped; the view model is trusted for structure but
/// not for markup.
#[derive(Debug, Default, Clone)]
pub struct HtmlReceiptRenderer;

impl HtmlReceiptRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl ReceiptRenderer for HtmlReceiptRenderer {
    fn render(&self, view: &ReceiptViewModel) -> String {
        let mut doc = String::new();
        doc.push_str("<!DOCTYPE html>\n<html>\n<body>\n");
        doc.push_str(&format!("<h1>{}</h1>\n", escape(&view.receipt_title)));
        doc.push_str(&format!("<h2>{}</h2>\n", escape(&view.summary_title)));

        doc.push_str("<table>\n");
        for line in &view.lines {
            doc.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape(&line.label),
                escape(&line.amount),
            ));
        }
        doc.push_str("</table>\n");

        if !view.payment_method.is_empty() {
            doc.push_str(&format!(
                "<p>Paid via {}</p>\n",
                escape(&view.payment_method)
            ));
        }
        if let Some(date_paid) = view.date_paid {
            doc.push_str(&format!(
                "<p>Date paid: {}</p>\n",
                date_paid.format("%Y-%m-%d")
            ));
        }
        if !view.notes.is_empty() {
            doc.push_str("<ul>\n");
            for note in &view.notes {
                doc.push_str(&format!("<li>{}</li>\n", escape(note)));
            }
            doc.push_str("</ul>\n");
        }

        doc.push_str("</body>\n</html>\n");
        doc
    }
}
