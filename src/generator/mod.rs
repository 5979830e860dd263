//! # Transient Receipt Generator
//!
//! The service at the heart of this crate. Given an order reference it
//! produces a human-readable receipt document, persists it as a time-limited
//! artifact in the [`TransientFileStore`](crate::stores::TransientFileStore),
//! and records the artifact's handle in the order's metadata so repeat
//! requests are idempotent until the artifact expires or regeneration is
//! forced.
//!
//! ## Idempotency contract
//!
//! With `force_new = false`, [`ReceiptGenerator::get_or_create_receipt`]
//! first consults [`ReceiptGenerator::get_existing_receipt`]; a still-valid
//! artifact is returned unchanged with **zero** writes. The generation path
//! performs exactly one metadata write.
//!
//! ## Stale pointers
//!
//! The metadata pointer is lazily invalidated: when the store reports the
//! artifact gone, lookups return absent but the pointer is left in place.
//! Absence is recomputed on every read rather than proactively pruned.
//!
//! ## Concurrency
//!
//! The original design accepted a race where two concurrent cache-missing
//! calls both render and store, last metadata write winning. This
//! implementation hardens that with an async lock per order id, so
//! simultaneous generation requests for the same order serialize. The lock
//! map is keyed by `OrderId` and entries are retained for the generator's
//! lifetime.

pub mod error;
pub mod view;

pub use error::ReceiptError;
pub use view::build_view_model;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::domain::{CurrencyFormatter, Order, OrderId, OrderRef, ReceiptHandle, ReceiptViewModel};
use crate::render::ReceiptRenderer;
use crate::stores::{OrderStore, TransientFileStore};

/// Metadata key under which the latest receipt handle is recorded.
pub const RECEIPT_HANDLE_META_KEY: &str = "receipt_transient_file";

/// Configuration for receipt generation.
#[derive(Debug, Clone)]
pub struct ReceiptConfig {
    /// Store name for the receipt title; `None` yields the generic "Receipt".
    pub store_name: Option<String>,
    /// Expiration applied when the caller does not supply one.
    pub default_ttl: Duration,
    /// Order metadata key holding the artifact handle.
    pub metadata_key: String,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            store_name: None,
            default_ttl: Duration::days(1),
            metadata_key: RECEIPT_HANDLE_META_KEY.to_string(),
        }
    }
}

impl ReceiptConfig {
    pub fn with_store_name(name: impl Into<String>) -> Self {
        Self {
            store_name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Parses a user-supplied expiration string.
///
/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (interpreted as
/// end of that day, UTC). Anything else is an
/// [`InvalidExpiration`](ReceiptError::InvalidExpiration).
pub fn parse_expiration(input: &str) -> Result<DateTime<Utc>, ReceiptError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ReceiptError::InvalidExpiration(format!("unparseable date: {input}")))?;
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)
        .ok_or_else(|| ReceiptError::InvalidExpiration(input.to_string()))?;
    Ok(Utc.from_utc_datetime(&date.and_time(end_of_day)))
}

/// The transient receipt generator.
///
/// All collaborators are injected explicitly; there is no ambient or global
/// store access. The generator itself holds no durable state; everything
/// durable lives behind the two store traits.
pub struct ReceiptGenerator {
    config: ReceiptConfig,
    order_store: Arc<dyn OrderStore>,
    file_store: Arc<dyn TransientFileStore>,
    renderer: Arc<dyn ReceiptRenderer>,
    formatter: Arc<dyn CurrencyFormatter>,
    generation_locks: Mutex<HashMap<OrderId, Arc<Mutex<()>>>>,
}

impl ReceiptGenerator {
    pub fn new(
        config: ReceiptConfig,
        order_store: Arc<dyn OrderStore>,
        file_store: Arc<dyn TransientFileStore>,
        renderer: Arc<dyn ReceiptRenderer>,
        formatter: Arc<dyn CurrencyFormatter>,
    ) -> Self {
        Self {
            config,
            order_store,
            file_store,
            renderer,
            formatter,
            generation_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the handle of a valid existing receipt, or generates a new one.
    ///
    /// - `expires_at`: expiration for a newly generated artifact; defaults to
    ///   the configured TTL from now. Rejected with
    ///   [`ReceiptError::InvalidExpiration`] if in the past, before any other
    ///   work happens.
    /// - `force_new`: bypasses idempotent reuse and always renders.
    ///
    /// Returns `Ok(None)` when the order reference does not resolve.
    #[instrument(skip(self, order_ref))]
    pub async fn get_or_create_receipt(
        &self,
        order_ref: impl Into<OrderRef>,
        expires_at: Option<DateTime<Utc>>,
        force_new: bool,
    ) -> Result<Option<ReceiptHandle>, ReceiptError> {
        // Fail fast: a bad expiration must not trigger any render or write.
        let expires_at = self.effective_expiration(expires_at)?;

        let order = match self.resolve(order_ref.into()).await {
            Some(order) => order,
            None => {
                debug!("Order did not resolve, nothing to generate");
                return Ok(None);
            }
        };

        let lock = self.generation_lock(order.id).await;
        let _guard = lock.lock().await;

        if !force_new {
            if let Some(handle) = self.validated_handle(&order).await {
                debug!(order_id = %order.id, %handle, "Reusing valid receipt");
                return Ok(Some(handle));
            }
        }

        let view = self.view_model(&order);
        let document = self.renderer.render(&view);
        let handle = self.file_store.create_file(&document, expires_at).await?;
        self.order_store
            .write_metadata(&order.id, &self.config.metadata_key, handle.as_str())
            .await?;

        info!(order_id = %order.id, %handle, %expires_at, "Receipt generated");
        Ok(Some(handle))
    }

    /// Looks up the order's recorded receipt and re-validates it against the
    /// file store. Purely a read: no metadata write, ever.
    ///
    /// Absent when the order does not resolve, no handle is recorded, or the
    /// artifact has expired or been deleted. A stale pointer is never
    /// surfaced, though it is also not erased.
    #[instrument(skip(self, order_ref))]
    pub async fn get_existing_receipt(&self, order_ref: impl Into<OrderRef>) -> Option<ReceiptHandle> {
        let order = self.resolve(order_ref.into()).await?;
        self.validated_handle(&order).await
    }

    /// Assembles the receipt view model for an order using the configured
    /// store name and currency formatter.
    pub fn view_model(&self, order: &Order) -> ReceiptViewModel {
        build_view_model(order, self.config.store_name.as_deref(), self.formatter.as_ref())
    }

    async fn resolve(&self, order_ref: OrderRef) -> Option<Order> {
        match order_ref {
            OrderRef::Resolved(order) => Some(order),
            OrderRef::Id(id) => self.order_store.resolve_order(&id).await,
        }
    }

    /// Reads the metadata pointer and checks the artifact is still live.
    async fn validated_handle(&self, order: &Order) -> Option<ReceiptHandle> {
        let recorded = self
            .order_store
            .read_metadata(&order.id, &self.config.metadata_key)
            .await
            .filter(|value| !value.is_empty())?;
        let handle = ReceiptHandle::new(recorded);
        match self.file_store.resolve_path(&handle).await {
            Some(_) => Some(handle),
            None => {
                debug!(order_id = %order.id, %handle, "Recorded receipt expired or missing");
                None
            }
        }
    }

    fn effective_expiration(
        &self,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, ReceiptError> {
        let now = Utc::now();
        match expires_at {
            None => Ok(now + self.config.default_ttl),
            Some(when) if when <= now => Err(ReceiptError::InvalidExpiration(format!(
                "expiration {when} is in the past"
            ))),
            Some(when) => Ok(when),
        }
    }

    async fn generation_lock(&self, id: OrderId) -> Arc<Mutex<()>> {
        let mut locks = self.generation_locks.lock().await;
        locks.entry(id).or_default().clone()
    }
}
