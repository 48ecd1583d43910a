//! Catalog loader: one instance per consuming view.
//!
//! State moves `Idle -> Loading -> Loaded | Failed` and never leaves a terminal
//! phase; recovery means building a new loader. Every transition is published
//! on a watch channel so the owning view observes it.
//!
//! Loaders never share state: two views loading the same source hold two
//! independent copies of the catalog.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use romantica_core::ProductId;
use romantica_products::{Product, transform_records};

use crate::error::{CatalogError, LOAD_FAILURE_MESSAGE};
use crate::source::RecordSource;

/// Simulated round trip standing in for a live sheet fetch.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    pub latency: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What a view reads: `{ products, loading, error }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub phase: LoadPhase,
    /// Available products only, in source order.
    pub products: Vec<Product>,
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl CatalogState {
    /// True until the load settles. A freshly mounted view has not started
    /// its load yet but still renders as loading.
    pub fn loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products whose category label equals `category`, in loaded order.
    ///
    /// Re-derived on every call; an unknown label is an empty result.
    pub fn get_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category().as_str() == category)
            .cloned()
            .collect()
    }

    /// Look a product up in the resident collection. Ids that do not parse
    /// are simply absent.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        let id: ProductId = id.parse().ok()?;
        self.products.iter().find(|p| p.id_typed() == id)
    }
}

/// How one call to [`CatalogLoader::load`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed,
    /// The owner went away mid-load; nothing was published.
    Cancelled,
    /// This loader had already been initiated.
    AlreadyStarted,
}

pub struct CatalogLoader {
    source: Arc<dyn RecordSource>,
    config: LoaderConfig,
    state: watch::Sender<CatalogState>,
    started: AtomicBool,
    cancel: CancellationToken,
}

impl core::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("source", &self.source.describe())
            .field("config", &self.config)
            .field("phase", &self.state.borrow().phase)
            .finish()
    }
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn RecordSource>, config: LoaderConfig) -> Self {
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            source,
            config,
            state,
            started: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    /// Create a loader and start its load in the background, the way a view
    /// does on first render. Dropping the returned handle cancels the load.
    pub fn mount(source: Arc<dyn RecordSource>, config: LoaderConfig) -> MountedCatalog {
        let loader = Arc::new(Self::new(source, config));
        let task = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load().await })
        };
        MountedCatalog { loader, task }
    }

    /// Run the load. Only the first call on an instance does anything.
    pub async fn load(&self) -> LoadOutcome {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::debug!(source = %self.source.describe(), "catalog load already initiated");
            return LoadOutcome::AlreadyStarted;
        }

        self.state.send_modify(|s| s.phase = LoadPhase::Loading);
        tracing::debug!(
            source = %self.source.describe(),
            latency_ms = self.config.latency.as_millis() as u64,
            "catalog load started"
        );

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::debug!("catalog load cancelled before completion");
                return LoadOutcome::Cancelled;
            }
            result = self.fetch_available() => result,
        };

        match result {
            Ok(products) => {
                let count = products.len();
                self.state.send_modify(|s| {
                    s.phase = LoadPhase::Loaded;
                    s.products = products;
                    s.error = None;
                    s.loaded_at = Some(Utc::now());
                });
                tracing::info!(count, "catalog loaded");
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching products");
                self.state.send_modify(|s| {
                    s.phase = LoadPhase::Failed;
                    s.products.clear();
                    s.error = Some(LOAD_FAILURE_MESSAGE.to_string());
                });
                LoadOutcome::Failed
            }
        }
    }

    async fn fetch_available(&self) -> Result<Vec<Product>, CatalogError> {
        tokio::time::sleep(self.config.latency).await;

        let rows = self.source.fetch().await?;
        let products = transform_records(&rows)?;
        Ok(products.into_iter().filter(Product::is_available).collect())
    }

    /// Abort an in-flight load; no further state is published.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    pub fn get_by_category(&self, category: &str) -> Vec<Product> {
        self.state.borrow().get_by_category(category)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        self.state.borrow().find_by_id(id).cloned()
    }
}

impl Drop for CatalogLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// A loader whose load runs on its own task. Tied to the owning view's
/// lifetime: dropping it cancels the load.
#[derive(Debug)]
pub struct MountedCatalog {
    loader: Arc<CatalogLoader>,
    task: JoinHandle<LoadOutcome>,
}

impl MountedCatalog {
    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Wait for the load to settle and return the final state.
    pub async fn settled(mut self) -> CatalogState {
        match (&mut self.task).await {
            Ok(outcome) => tracing::debug!(?outcome, "mounted catalog settled"),
            Err(err) => tracing::error!(error = %err, "catalog load task did not complete"),
        }
        self.loader.snapshot()
    }
}

impl Drop for MountedCatalog {
    fn drop(&mut self) {
        self.loader.cancel();
    }
}
