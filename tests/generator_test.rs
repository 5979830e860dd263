use std::sync::Arc;

use chrono::{Duration, Utc};
use transient_receipts::domain::{Order, OrderCoupon, OrderFee, OrderLineItem, OrderTaxLine};
use transient_receipts::generator::{ReceiptConfig, ReceiptError, ReceiptGenerator, RECEIPT_HANDLE_META_KEY};
use transient_receipts::lifecycle::ReceiptSystem;
use transient_receipts::stores::{InMemoryFileStore, InMemoryOrderStore};

fn sample_order(id: u64) -> Order {
    let mut order = Order::new(id, "USD");
    order
        .line_items
        .push(OrderLineItem::new("Coffee Mug", 2, 24.0));
    order
        .line_items
        .push(OrderLineItem::new("Tea Pot", 1, 30.0));
    order.fees.push(OrderFee {
        name: Some("Gift wrap".to_string()),
        amount: 3.0,
    });
    order.coupons.push(OrderCoupon {
        code: "SAVE5".to_string(),
        discount: 5.0,
    });
    order.tax_lines.push(OrderTaxLine {
        label: "VAT".to_string(),
        amount: 4.0,
    });
    order.shipping_total = 7.0;
    order.total = 63.0;
    order.payment_method_title = "Credit card".to_string();
    order
}

/// Builds a generator wired to fresh in-memory stores, seeded with one order.
fn setup(id: u64) -> (Arc<ReceiptGenerator>, Arc<InMemoryOrderStore>, Arc<InMemoryFileStore>) {
    let orders = Arc::new(InMemoryOrderStore::new());
    orders.insert_order(sample_order(id));
    let files = Arc::new(InMemoryFileStore::new());
    let system = ReceiptSystem::with_stores(
        ReceiptConfig::with_store_name("Acme Goods"),
        orders.clone(),
        files.clone(),
    );
    (system.generator(), orders, files)
}

/// Two sequential non-forced calls return the identical handle; the file
/// store and metadata are each written exactly once.
#[tokio::test]
async fn repeat_generation_is_idempotent() {
    let (generator, orders, files) = setup(42);

    let first = generator
        .get_or_create_receipt(42u64, None, false)
        .await
        .unwrap()
        .expect("order exists");
    let second = generator
        .get_or_create_receipt(42u64, None, false)
        .await
        .unwrap()
        .expect("order exists");

    assert_eq!(first, second);
    assert_eq!(files.created_count(), 1);
    assert_eq!(orders.metadata_write_count(), 1);
}

/// `force_new` always renders a fresh artifact and repoints the metadata,
/// even when a valid one exists.
#[tokio::test]
async fn force_new_regenerates_and_overwrites_pointer() {
    let (generator, orders, files) = setup(42);

    let first = generator
        .get_or_create_receipt(42u64, None, false)
        .await
        .unwrap()
        .unwrap();
    let forced = generator
        .get_or_create_receipt(42u64, None, true)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(first, forced);
    assert_eq!(files.created_count(), 2);
    assert_eq!(
        orders
            .metadata_value(42u64.into(), RECEIPT_HANDLE_META_KEY)
            .as_deref(),
        Some(forced.as_str())
    );
}

/// Once the artifact expires, lookups report absent even though the metadata
/// pointer still holds the old handle (lazy invalidation).
#[tokio::test]
async fn expired_artifact_reads_as_absent_but_pointer_survives() {
    let (generator, orders, files) = setup(42);

    let handle = generator
        .get_or_create_receipt(42u64, None, false)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(generator.get_existing_receipt(42u64).await, Some(handle.clone()));

    files.expire_now(&handle);

    assert_eq!(generator.get_existing_receipt(42u64).await, None);
    // The stale pointer is hidden, not erased.
    assert_eq!(
        orders
            .metadata_value(42u64.into(), RECEIPT_HANDLE_META_KEY)
            .as_deref(),
        Some(handle.as_str())
    );
}

/// After expiry a non-forced call misses the cache and generates a new
/// artifact under a new handle.
#[tokio::test]
async fn expired_artifact_is_regenerated_on_next_request() {
    let (generator, _orders, files) = setup(42);

    let first = generator
        .get_or_create_receipt(42u64, None, false)
        .await
        .unwrap()
        .unwrap();
    files.expire_now(&first);

    let second = generator
        .get_or_create_receipt(42u64, None, false)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(files.created_count(), 2);
}

/// A missing order is a legitimate empty result for both operations, never an
/// error, and triggers no writes.
#[tokio::test]
async fn missing_order_is_absent_not_an_error() {
    let (generator, orders, files) = setup(42);

    let created = generator.get_or_create_receipt(999u64, None, false).await;
    assert_eq!(created, Ok(None));
    assert_eq!(generator.get_existing_receipt(999u64).await, None);

    assert_eq!(files.created_count(), 0);
    assert_eq!(orders.metadata_write_count(), 0);
}

/// A past expiration fails before any rendering or storage work.
#[tokio::test]
async fn past_expiration_is_rejected_with_no_side_effects() {
    let (generator, orders, files) = setup(42);

    let yesterday = Utc::now() - Duration::days(1);
    let result = generator
        .get_or_create_receipt(42u64, Some(yesterday), false)
        .await;

    assert!(matches!(result, Err(ReceiptError::InvalidExpiration(_))));
    assert_eq!(files.created_count(), 0);
    assert_eq!(orders.metadata_write_count(), 0);
}

/// An unwritable artifact store surfaces as a fatal error and leaves the
/// metadata untouched.
#[tokio::test]
async fn unavailable_directory_is_fatal_and_writes_nothing() {
    let (generator, orders, files) = setup(42);
    files.set_directory_unavailable(true);

    let result = generator.get_or_create_receipt(42u64, None, false).await;

    assert!(matches!(result, Err(ReceiptError::DirectoryUnavailable(_))));
    assert_eq!(orders.metadata_write_count(), 0);
}

/// Passing an already-resolved order skips store resolution entirely.
#[tokio::test]
async fn resolved_order_bypasses_lookup() {
    let (generator, _orders, files) = setup(42);

    // This order was never inserted into the store.
    let handle = generator
        .get_or_create_receipt(sample_order(7), None, false)
        .await
        .unwrap()
        .expect("resolved orders need no lookup");

    assert_eq!(files.created_count(), 1);
    let document = files.content(&handle).unwrap();
    assert!(document.contains("Summary: Order #7"));
    assert!(document.contains("Amount Paid"));
}

/// Concurrent non-forced requests for the same order serialize on the
/// per-order lock: only one render happens and both callers see its handle.
#[tokio::test]
async fn concurrent_requests_render_once() {
    let (generator, _orders, files) = setup(42);

    let a = {
        let generator = generator.clone();
        tokio::spawn(async move { generator.get_or_create_receipt(42u64, None, false).await })
    };
    let b = {
        let generator = generator.clone();
        tokio::spawn(async move { generator.get_or_create_receipt(42u64, None, false).await })
    };

    let first = a.await.unwrap().unwrap().unwrap();
    let second = b.await.unwrap().unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(files.created_count(), 1);
}
