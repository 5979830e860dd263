//! System wiring for receipt generation.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::{CurrencyFormatter, SimpleCurrencyFormatter};
use crate::generator::{ReceiptConfig, ReceiptGenerator};
use crate::render::{HtmlReceiptRenderer, ReceiptRenderer};
use crate::stores::{FsTransientFileStore, OrderStore, TransientFileStore};

/// Assembles a ready-to-use [`ReceiptGenerator`] from its collaborators.
///
/// `ReceiptSystem` is the composition root: the host hands it an order store
/// (and optionally its own file store, renderer, and formatter) and gets back
/// a generator with everything injected. The generator holds no global state,
/// so hosts that want several independently-configured generators can simply
/// build several systems.
///
/// # Example
///
/// ```ignore
/// let system = ReceiptSystem::with_fs_store(
///     ReceiptConfig::with_store_name("Acme Goods"),
///     order_store,
///     "/var/receipts",
/// );
/// let handle = system.generator().get_or_create_receipt(order_id, None, false).await?;
/// ```
pub struct ReceiptSystem {
    generator: Arc<ReceiptGenerator>,
}

impl ReceiptSystem {
    /// Wires a generator against a filesystem-backed transient file store
    /// rooted at `receipts_dir`, with the default renderer and formatter.
    pub fn with_fs_store(
        config: ReceiptConfig,
        order_store: Arc<dyn OrderStore>,
        receipts_dir: impl Into<PathBuf>,
    ) -> Self {
        let receipts_dir = receipts_dir.into();
        info!(dir = %receipts_dir.display(), "Receipt system using filesystem store");
        Self::with_stores(
            config,
            order_store,
            Arc::new(FsTransientFileStore::new(receipts_dir)),
        )
    }

    /// Wires a generator against caller-supplied stores, with the default
    /// renderer and formatter.
    pub fn with_stores(
        config: ReceiptConfig,
        order_store: Arc<dyn OrderStore>,
        file_store: Arc<dyn TransientFileStore>,
    ) -> Self {
        Self::with_parts(
            config,
            order_store,
            file_store,
            Arc::new(HtmlReceiptRenderer::new()),
            Arc::new(SimpleCurrencyFormatter::new()),
        )
    }

    /// Full control over every collaborator.
    pub fn with_parts(
        config: ReceiptConfig,
        order_store: Arc<dyn OrderStore>,
        file_store: Arc<dyn TransientFileStore>,
        renderer: Arc<dyn ReceiptRenderer>,
        formatter: Arc<dyn CurrencyFormatter>,
    ) -> Self {
        let generator = Arc::new(ReceiptGenerator::new(
            config,
            order_store,
            file_store,
            renderer,
            formatter,
        ));
        Self { generator }
    }

    pub fn generator(&self) -> Arc<ReceiptGenerator> {
        self.generator.clone()
    }
}
