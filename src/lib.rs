//! # Transient Receipts
//!
//! > **Expiring-artifact generation with idempotent retrieval.**
//!
//! This crate turns an order into a human-readable receipt document, stores
//! the document as a **time-limited artifact**, and records the artifact's
//! handle against the order so repeat requests reuse the same artifact until
//! it expires or regeneration is forced.
//!
//! ## Design Philosophy
//!
//! ### Explicit collaborators, no globals
//! The generator reads orders and writes artifacts through two injected
//! traits, [`stores::OrderStore`] and [`stores::TransientFileStore`], and
//! renders through a third, [`render::ReceiptRenderer`]. Nothing is reached
//! via ambient lookups, which is what makes the whole pipeline testable with
//! plain in-memory stores.
//!
//! ### Lazy invalidation
//! The handle recorded in order metadata may point at an artifact the file
//! store has already expired. That is fine: validity is re-checked against
//! the store on **every** read, and a stale pointer is reported as absent
//! rather than surfaced or eagerly erased. Absence is recomputed, not pruned.
//!
//! ### Absent is not an error
//! An order id that resolves to nothing yields `None`, never an error.
//! Errors are reserved for real faults: a bad expiration
//! ([`generator::ReceiptError::InvalidExpiration`], raised before any side
//! effect) and an unwritable artifact store
//! ([`generator::ReceiptError::DirectoryUnavailable`]).
//!
//! ## Module Tour
//!
//! ### 1. The Service ([`generator`])
//! [`generator::ReceiptGenerator`] implements the two operations:
//! `get_or_create_receipt` (idempotent generation) and
//! `get_existing_receipt` (pure validated lookup), plus the deterministic
//! Order → view-model assembly.
//!
//! ### 2. The Seams ([`stores`], [`render`])
//! Trait definitions for the injected collaborators, a filesystem-backed
//! transient file store ([`stores::FsTransientFileStore`]), and in-memory
//! stores for tests ([`stores::memory`]).
//!
//! ### 3. The Data ([`domain`])
//! The read-only order slice, the opaque [`domain::ReceiptHandle`], and the
//! ephemeral [`domain::ReceiptViewModel`] handed to the renderer.
//!
//! ### 4. The Wiring ([`lifecycle`])
//! [`lifecycle::ReceiptSystem`] assembles a generator from parts;
//! [`lifecycle::setup_tracing`] initializes structured logging.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use transient_receipts::domain::{Order, OrderLineItem};
//! use transient_receipts::generator::ReceiptConfig;
//! use transient_receipts::lifecycle::ReceiptSystem;
//! use transient_receipts::stores::{InMemoryFileStore, InMemoryOrderStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let orders = Arc::new(InMemoryOrderStore::new());
//!     let mut order = Order::new(42u64, "USD");
//!     order.line_items.push(OrderLineItem::new("Coffee Mug", 2, 24.0));
//!     order.total = 24.0;
//!     orders.insert_order(order);
//!
//!     let system = ReceiptSystem::with_stores(
//!         ReceiptConfig::with_store_name("Acme Goods"),
//!         orders.clone(),
//!         Arc::new(InMemoryFileStore::new()),
//!     );
//!     let generator = system.generator();
//!
//!     let first = generator.get_or_create_receipt(42u64, None, false).await.unwrap();
//!     let second = generator.get_or_create_receipt(42u64, None, false).await.unwrap();
//!     assert_eq!(first, second); // idempotent until expiry
//! }
//! ```

pub mod domain;
pub mod generator;
pub mod lifecycle;
pub mod render;
pub mod stores;
