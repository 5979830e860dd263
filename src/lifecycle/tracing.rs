//! # Observability & Tracing
//!
//! Structured logging for receipt generation, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Generation**: cache hits (`Reusing valid receipt`), renders
//!   (`Receipt generated` with order id, handle, and expiration), and
//!   unresolvable orders.
//! - **Invalidation**: stale pointers detected on read
//!   (`Recorded receipt expired or missing`).
//! - **Storage**: artifact writes and purge sweeps in the filesystem store.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Show the full decision path, including cache-hit and stale-pointer checks
//! RUST_LOG=debug cargo test
//!
//! # Filter to the generator only
//! RUST_LOG=transient_receipts::generator=debug cargo test
//! ```
//!
//! The `#[instrument]` spans on the generator operations carry `force_new`
//! and the expiration as structured fields, so a single grep of the log
//! shows why a given call rendered or reused.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Short lines; the spans carry the context.
        .compact()
        .init();
}
