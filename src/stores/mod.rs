//! # Store Seams
//!
//! The generator consumes two durable collaborators it does not implement:
//! an order store and a transient file store. Both are injected as explicit
//! trait objects at construction time, with no ambient or global lookups.
//!
//! - [`OrderStore`]: resolves orders and mediates the single metadata key the
//!   generator writes.
//! - [`TransientFileStore`]: persists rendered documents with an expiration
//!   and resolves handles back to live paths.
//!
//! [`FsTransientFileStore`] is a real filesystem-backed implementation; the
//! [`memory`] module provides deterministic in-memory stores for tests and
//! demos.

pub mod fs;
pub mod memory;

pub use fs::FsTransientFileStore;
pub use memory::{InMemoryFileStore, InMemoryOrderStore};

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Order, OrderId, ReceiptHandle};
use crate::generator::ReceiptError;

/// Read access to orders plus the one metadata key this crate owns.
///
/// Resolution failures are modeled as `None`, not errors: a missing order is
/// a legitimate empty result for every caller in this crate.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Resolves an order by id; `None` when no such order exists.
    async fn resolve_order(&self, id: &OrderId) -> Option<Order>;

    /// Reads a metadata value for an order; `None` when unset.
    async fn read_metadata(&self, id: &OrderId, key: &str) -> Option<String>;

    /// Writes (or overwrites) a metadata value and persists it.
    async fn write_metadata(&self, id: &OrderId, key: &str, value: &str)
        -> Result<(), ReceiptError>;
}

/// Time-limited artifact storage.
///
/// Artifacts may be garbage-collected by the store any time after their
/// expiration; a handle is only as good as the last `resolve_path` check.
#[async_trait]
pub trait TransientFileStore: Send + Sync {
    /// Stores `content` as a new artifact expiring at `expires_at` and
    /// returns its opaque handle.
    async fn create_file(
        &self,
        content: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<ReceiptHandle, ReceiptError>;

    /// Resolves a handle to the artifact's path, or `None` when the artifact
    /// is missing or expired.
    async fn resolve_path(&self, handle: &ReceiptHandle) -> Option<PathBuf>;
}
