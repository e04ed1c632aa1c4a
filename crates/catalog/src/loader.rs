//! Catalog loader with a tri-state lifecycle.
//!
//! One bulk fetch per session: `idle → loading → loaded` on success,
//! `loading → error` on failure. Neither terminal state is ever left;
//! retrying requires a fresh loader. The loader is an owned, injectable
//! value, so sessions and tests each get an independent catalog instead
//! of sharing ambient global state.

use crate::source::CatalogSource;
use nutrijama_core::FoodItem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, error, info};

/// Lifecycle state of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet
    Idle,
    /// Bulk fetch in flight; the catalog is not queryable
    Loading,
    /// Catalog populated; read-only from here on
    Loaded,
    /// Bulk fetch failed; the catalog stays empty
    Error,
}

/// A failed catalog load, kept as readable state rather than propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog load failed: {0}")]
pub struct LoadError(String);

impl LoadError {
    /// Human-readable description of the failure.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.0
    }
}

struct Inner {
    state: LoadState,
    foods: Arc<Vec<FoodItem>>,
    error: Option<LoadError>,
}

/// Owns the in-memory catalog for the lifetime of one session.
pub struct CatalogLoader {
    inner: RwLock<Inner>,
    // At-most-one fetch per loader, even under concurrent load() calls
    // from remounting consumers.
    started: AtomicBool,
}

impl CatalogLoader {
    /// Create a fresh loader in the idle state with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                state: LoadState::Idle,
                foods: Arc::new(Vec::new()),
                error: None,
            }),
            started: AtomicBool::new(false),
        }
    }

    /// Load the catalog from `source`.
    ///
    /// The first call performs the bulk fetch and settles into `Loaded`
    /// or `Error`. Any further call — concurrent with the first or after
    /// it — is a no-op returning the current state; duplicate fetches
    /// cannot happen.
    pub async fn load<S: CatalogSource>(&self, source: &S) -> LoadState {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("catalog load already started, ignoring");
            return self.state();
        }

        self.write(|inner| inner.state = LoadState::Loading);

        match source.fetch_catalog().await {
            Ok(foods) => {
                info!(count = foods.len(), "catalog loaded");
                self.write(|inner| {
                    inner.foods = Arc::new(foods);
                    inner.state = LoadState::Loaded;
                });
            }
            Err(e) => {
                error!(error = %e, "catalog load failed");
                self.write(|inner| {
                    inner.error = Some(LoadError(e.to_string()));
                    inner.state = LoadState::Error;
                });
            }
        }

        self.state()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadState {
        self.read(|inner| inner.state)
    }

    /// Whether the catalog is populated and queryable.
    pub fn is_loaded(&self) -> bool {
        self.state() == LoadState::Loaded
    }

    /// Snapshot of the catalog. Empty unless the state is `Loaded`;
    /// cheap to clone and safe to share across concurrent searches,
    /// since nothing writes after a successful load.
    pub fn foods(&self) -> Arc<Vec<FoodItem>> {
        self.read(|inner| Arc::clone(&inner.foods))
    }

    /// The load failure, if the loader is in the error state.
    pub fn error(&self) -> Option<LoadError> {
        self.read(|inner| inner.error.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&Inner) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut Inner)) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}
