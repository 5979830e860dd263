//! Wiring and observability: assembles a ready-to-use generator from its
//! collaborators and initializes structured logging.

pub mod receipt_system;
pub mod tracing;

pub use receipt_system::ReceiptSystem;
pub use tracing::setup_tracing;
