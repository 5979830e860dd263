//! Filesystem-backed transient file store.
//!
//! Artifacts live as plain files under a single root directory. The
//! expiration **date** is hex-encoded into the first six characters of the
//! filename (`yymmdd`, two hex digits each), so expiry can be judged from the
//! name alone without sidecar state. An artifact is considered live through
//! the end (UTC) of its encoded day.
//!
//! Expired files are not deleted automatically; `resolve_path` simply stops
//! reporting them. [`FsTransientFileStore::purge_expired`] performs the
//! actual cleanup sweep when the host wants one; there is no background task.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::domain::ReceiptHandle;
use crate::generator::ReceiptError;
use crate::stores::TransientFileStore;

/// Stores receipt artifacts as expiring files in one directory.
pub struct FsTransientFileStore {
    root: PathBuf,
    sequence: AtomicU64,
}

impl FsTransientFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Deletes every expired artifact under the root; returns how many were
    /// removed. Files whose names do not carry a valid date prefix are left
    /// alone.
    pub async fn purge_expired(&self) -> Result<usize, ReceiptError> {
        let today = Utc::now().date_naive();
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            // Nothing was ever stored; nothing to purge.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(ReceiptError::Store(e.to_string())),
        };

        let mut removed = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ReceiptError::Store(e.to_string()))?
        {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(date) = decode_expiration_date(name) else {
                continue;
            };
            if date < today {
                match tokio::fs::remove_file(entry.path()).await {
                    Ok(()) => removed += 1,
                    Err(e) => warn!(file = name, error = %e, "Failed to purge expired receipt"),
                }
            }
        }
        info!(removed, "Purged expired receipts");
        Ok(removed)
    }

    fn next_name(&self, expires_at: DateTime<Utc>) -> String {
        let date = expires_at.date_naive();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        format!(
            "{:02x}{:02x}{:02x}{:016x}{:04x}",
            date.year().rem_euclid(100) as u8,
            date.month() as u8,
            date.day() as u8,
            nanos,
            seq & 0xffff,
        )
    }
}

/// Decodes the `yymmdd` hex prefix of an artifact name. `None` for names that
/// are not valid artifact names (wrong length, bad hex, impossible date).
fn decode_expiration_date(name: &str) -> Option<NaiveDate> {
    if name.len() < 6 || !name.is_ascii() {
        return None;
    }
    let yy = u8::from_str_radix(&name[0..2], 16).ok()?;
    let month = u8::from_str_radix(&name[2..4], 16).ok()?;
    let day = u8::from_str_radix(&name[4..6], 16).ok()?;
    NaiveDate::from_ymd_opt(2000 + yy as i32, month as u32, day as u32)
}

#[async_trait]
impl TransientFileStore for FsTransientFileStore {
    async fn create_file(
        &self,
        content: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<ReceiptHandle, ReceiptError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ReceiptError::DirectoryUnavailable(e.to_string()))?;

        let name = self.next_name(expires_at);
        let path = self.root.join(&name);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ReceiptError::DirectoryUnavailable(e.to_string()))?;

        debug!(file = %name, %expires_at, "Stored transient receipt");
        Ok(ReceiptHandle::new(name))
    }

    async fn resolve_path(&self, handle: &ReceiptHandle) -> Option<PathBuf> {
        let name = handle.as_str();
        // Handles are bare filenames; anything path-like is not ours.
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return None;
        }
        let date = decode_expiration_date(name)?;
        if date < Utc::now().date_naive() {
            return None;
        }
        let path = self.root.join(name);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Some(path),
            _ => None,
        }
    }
}
