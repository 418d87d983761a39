// SkinConsult - app/catalog_store.rs
//
// One-per-process catalog cache. The table is read on first use and then
// shared read-only as `Arc<Catalog>`; there is no invalidation because the
// source file is static for the life of the process.

use crate::core::catalog::{parse_catalog, Catalog};
use crate::platform::fs;
use crate::util::error::CatalogError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Lazily loaded, memoized catalog handle for one source path.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    catalog: OnceLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            catalog: OnceLock::new(),
        }
    }

    /// Wrap an already-built catalog (used by tests and embedders).
    pub fn preloaded(path: impl Into<PathBuf>, catalog: Catalog) -> Self {
        let store = Self::new(path);
        let _ = store.catalog.set(Arc::new(catalog));
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the catalog has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Return the cached catalog, loading it on first call.
    ///
    /// Non-fatal load warnings are logged. A failed load is not cached, so a
    /// later call retries.
    pub fn get(&self) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let reader = fs::open_catalog_file(&self.path)?;
        let (catalog, warnings) = parse_catalog(reader, &self.path)?;
        for warning in &warnings {
            tracing::warn!(warning = %warning, "Catalog load warning");
        }

        tracing::info!(
            path = %self.path.display(),
            products = catalog.len(),
            steps = ?catalog.step_counts(),
            "Catalog loaded"
        );

        // Another caller may have won the race; keep whichever landed first.
        Ok(Arc::clone(self.catalog.get_or_init(|| Arc::new(catalog))))
    }
}
