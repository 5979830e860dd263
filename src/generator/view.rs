//! View-model assembly: the pure Order → ReceiptViewModel transformation.
//!
//! Deterministic and side-effect free; everything dynamic (store name, money
//! formatting) comes in as an argument. The row order is fixed:
//!
//! 1. one row per product line item
//! 2. Subtotal
//! 3. one row per fee
//! 4. one row per coupon (negated discount)
//! 5. Shipping
//! 6. Taxes (sum of all tax lines)
//! 7. Amount Paid

use crate::domain::{CurrencyFormatter, Order, ReceiptLine, ReceiptViewModel};

/// Builds the render-ready view model for an order.
///
/// `store_name` drives the receipt title: `"Receipt from {store}"` when
/// configured, a generic `"Receipt"` otherwise. Anonymous orders (id 0) get
/// the generic `"Summary"` heading.
pub fn build_view_model(
    order: &Order,
    store_name: Option<&str>,
    formatter: &dyn CurrencyFormatter,
) -> ReceiptViewModel {
    let money = |amount: f64| formatter.format(amount, &order.currency);

    let receipt_title = match store_name {
        Some(name) => format!("Receipt from {}", name),
        None => "Receipt".to_string(),
    };
    let summary_title = if order.id.0 != 0 {
        format!("Summary: Order #{}", order.id)
    } else {
        "Summary".to_string()
    };

    let mut lines = Vec::new();

    for item in &order.line_items {
        let name = match &item.attribute_summary {
            Some(attrs) => format!("{} ({})", item.name, attrs),
            None => item.name.clone(),
        };
        lines.push(ReceiptLine::new(
            format!("{} × {}", name, item.quantity),
            money(item.line_total),
        ));
    }

    lines.push(ReceiptLine::new("Subtotal", money(order.items_subtotal())));

    for fee in &order.fees {
        let label = fee.name.as_deref().unwrap_or("Fee");
        lines.push(ReceiptLine::new(label, money(fee.amount)));
    }

    for coupon in &order.coupons {
        lines.push(ReceiptLine::new(
            format!("Discount ({})", coupon.code),
            money(-coupon.discount),
        ));
    }

    lines.push(ReceiptLine::new("Shipping", money(order.shipping_total)));
    lines.push(ReceiptLine::new("Taxes", money(order.taxes_total())));
    lines.push(ReceiptLine::new("Amount Paid", money(order.total)));

    ReceiptViewModel {
        receipt_title,
        summary_title,
        lines,
        payment_method: order.payment_method_title.clone(),
        date_paid: order.date_paid,
        notes: order.notes.iter().map(|note| note.text.clone()).collect(),
        // Source of card data is not established yet; left unwired.
        card_brand: None,
        card_last4: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderCoupon, OrderFee, OrderLineItem, OrderNote, SimpleCurrencyFormatter};

    fn sample_order() -> Order {
        let mut order = Order::new(42u64, "USD");
        order
            .line_items
            .push(OrderLineItem::new("Coffee Mug", 2, 24.0));
        order.line_items.push(OrderLineItem::variation(
            "T-Shirt",
            "Color: Blue, Size: M",
            1,
            18.0,
        ));
        order.fees.push(OrderFee {
            name: Some("Gift wrap".to_string()),
            amount: 3.0,
        });
        order.coupons.push(OrderCoupon {
            code: "SAVE5".to_string(),
            discount: 5.0,
        });
        order.tax_lines.push(crate::domain::OrderTaxLine {
            label: "VAT".to_string(),
            amount: 4.0,
        });
        order.tax_lines.push(crate::domain::OrderTaxLine {
            label: "City".to_string(),
            amount: 0.5,
        });
        order.shipping_total = 7.0;
        order.total = 51.5;
        order.payment_method_title = "Credit card".to_string();
        order.notes.push(OrderNote {
            text: "Leave at the door".to_string(),
        });
        order
    }

    #[test]
    fn rows_follow_the_fixed_order() {
        let order = sample_order();
        let view = build_view_model(&order, Some("Acme"), &SimpleCurrencyFormatter::new());

        let labels: Vec<&str> = view.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Coffee Mug × 2",
                "T-Shirt (Color: Blue, Size: M) × 1",
                "Subtotal",
                "Gift wrap",
                "Discount (SAVE5)",
                "Shipping",
                "Taxes",
                "Amount Paid",
            ]
        );
    }

    #[test]
    fn amounts_are_formatted_in_order_currency() {
        let order = sample_order();
        let view = build_view_model(&order, Some("Acme"), &SimpleCurrencyFormatter::new());

        let amounts: Vec<&str> = view.lines.iter().map(|l| l.amount.as_str()).collect();
        assert_eq!(
            amounts,
            vec![
                "$24.00", "$18.00", "$42.00", "$3.00", "-$5.00", "$7.00", "$4.50", "$51.50",
            ]
        );
    }

    #[test]
    fn titles_use_store_name_and_order_id() {
        let order = sample_order();
        let view = build_view_model(&order, Some("Acme"), &SimpleCurrencyFormatter::new());
        assert_eq!(view.receipt_title, "Receipt from Acme");
        assert_eq!(view.summary_title, "Summary: Order #42");
    }

    #[test]
    fn titles_fall_back_when_unconfigured_or_anonymous() {
        let order = Order::new(0u64, "USD");
        let view = build_view_model(&order, None, &SimpleCurrencyFormatter::new());
        assert_eq!(view.receipt_title, "Receipt");
        assert_eq!(view.summary_title, "Summary");
    }

    #[test]
    fn unnamed_fee_gets_generic_label() {
        let mut order = Order::new(1u64, "USD");
        order.fees.push(OrderFee {
            name: None,
            amount: 2.0,
        });
        let view = build_view_model(&order, None, &SimpleCurrencyFormatter::new());
        assert!(view.lines.iter().any(|l| l.label == "Fee"));
    }

    #[test]
    fn card_fields_stay_unset() {
        let order = sample_order();
        let view = build_view_model(&order, None, &SimpleCurrencyFormatter::new());
        assert!(view.card_brand.is_none());
        assert!(view.card_last4.is_none());
    }

    #[test]
    fn notes_keep_store_order() {
        let mut order = sample_order();
        order.notes.push(OrderNote {
            text: "Call on arrival".to_string(),
        });
        let view = build_view_model(&order, None, &SimpleCurrencyFormatter::new());
        assert_eq!(view.notes, vec!["Leave at the door", "Call on arrival"]);
    }
}
