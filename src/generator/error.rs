//! Error types for receipt generation.

use thiserror::Error;

/// Errors that can occur while generating or storing a receipt.
///
/// Order-not-found is deliberately **not** here: an unresolvable order is a
/// legitimate empty result (`None`), so callers can tell "nothing to show"
/// apart from a fault. Likewise a stale metadata pointer whose artifact has
/// expired is reported as absent, not as an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReceiptError {
    /// The supplied expiration is unparseable or already in the past.
    /// Raised before any rendering or storage work begins.
    #[error("Invalid expiration: {0}")]
    InvalidExpiration(String),

    /// The transient file store's backing location cannot be created or
    /// written. Fatal for the call; no retry is attempted.
    #[error("Receipt directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// An underlying store failed while reading or persisting data.
    #[error("Store error: {0}")]
    Store(String),
}
