//! In-memory stores for tests and demos.
//!
//! Testing the generator against a real filesystem is slow and makes expiry
//! awkward to simulate. These deterministic implementations keep everything
//! in memory and expose a few test hooks:
//!
//! - [`InMemoryFileStore::expire_now`] flips an artifact to expired, driving
//!   the stale-pointer path without waiting a day.
//! - [`InMemoryFileStore::set_directory_unavailable`] makes the next creates
//!   fail, simulating an unwritable backing location.
//! - [`InMemoryOrderStore::metadata_write_count`] verifies the
//!   exactly-one-write-per-generation contract.
//!
//! Lock discipline: short `std::sync::Mutex` critical sections, never held
//! across an await.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::{Order, OrderId, ReceiptHandle};
use crate::generator::ReceiptError;
use crate::stores::{OrderStore, TransientFileStore};

#[derive(Default)]
struct OrderStoreInner {
    orders: HashMap<OrderId, Order>,
    metadata: HashMap<(OrderId, String), String>,
    metadata_writes: u64,
}

/// Seedable in-memory order store.
#[derive(Default)]
pub struct InMemoryOrderStore {
    inner: Mutex<OrderStoreInner>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_order(&self, order: Order) {
        let mut inner = self.inner.lock().unwrap();
        inner.orders.insert(order.id, order);
    }

    /// Current value of a metadata key, if any.
    pub fn metadata_value(&self, id: OrderId, key: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.metadata.get(&(id, key.to_string())).cloned()
    }

    /// Total number of metadata writes observed.
    pub fn metadata_write_count(&self) -> u64 {
        self.inner.lock().unwrap().metadata_writes
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn resolve_order(&self, id: &OrderId) -> Option<Order> {
        self.inner.lock().unwrap().orders.get(id).cloned()
    }

    async fn read_metadata(&self, id: &OrderId, key: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.metadata.get(&(*id, key.to_string())).cloned()
    }

    async fn write_metadata(
        &self,
        id: &OrderId,
        key: &str,
        value: &str,
    ) -> Result<(), ReceiptError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .metadata
            .insert((*id, key.to_string()), value.to_string());
        inner.metadata_writes += 1;
        Ok(())
    }
}

struct FileStoreInner {
    files: HashMap<ReceiptHandle, (String, DateTime<Utc>)>,
    created: u64,
    sequence: u64,
    directory_unavailable: bool,
}

/// In-memory transient file store with expiry and failure hooks.
pub struct InMemoryFileStore {
    inner: Mutex<FileStoreInner>,
}

impl Default for InMemoryFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FileStoreInner {
                files: HashMap::new(),
                created: 0,
                sequence: 0,
                directory_unavailable: false,
            }),
        }
    }

    /// Number of artifacts ever created (expiry does not decrement it).
    pub fn created_count(&self) -> u64 {
        self.inner.lock().unwrap().created
    }

    /// Content of a stored artifact, live or expired.
    pub fn content(&self, handle: &ReceiptHandle) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.files.get(handle).map(|(content, _)| content.clone())
    }

    /// Backdates an artifact's expiration so the next resolve reports absent.
    pub fn expire_now(&self, handle: &ReceiptHandle) {
        let mut inner = self.inner.lock().unwrap();
        if let Some((_, expires_at)) = inner.files.get_mut(handle) {
            *expires_at = Utc::now() - Duration::seconds(1);
        }
    }

    /// When set, `create_file` fails with `DirectoryUnavailable`.
    pub fn set_directory_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().directory_unavailable = unavailable;
    }
}

#[async_trait]
impl TransientFileStore for InMemoryFileStore {
    async fn create_file(
        &self,
        content: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<ReceiptHandle, ReceiptError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.directory_unavailable {
            return Err(ReceiptError::DirectoryUnavailable(
                "simulated unwritable directory".to_string(),
            ));
        }
        inner.sequence += 1;
        let handle = ReceiptHandle::new(format!("receipt_{}", inner.sequence));
        inner
            .files
            .insert(handle.clone(), (content.to_string(), expires_at));
        inner.created += 1;
        Ok(handle)
    }

    async fn resolve_path(&self, handle: &ReceiptHandle) -> Option<PathBuf> {
        let inner = self.inner.lock().unwrap();
        let (_, expires_at) = inner.files.get(handle)?;
        if *expires_at <= Utc::now() {
            return None;
        }
        Some(PathBuf::from(format!("mem://{}", handle)))
    }
}
