//! Catalog retrieval layer.
//!
//! - [`source`]: where raw sheet rows come from (built-in fixture, JSON export).
//! - [`loader`]: one loader per consuming view; loads, filters to available
//!   products, and exposes `{ products, loading, error }`.

pub mod error;
pub mod loader;
pub mod source;

pub use error::{CatalogError, LOAD_FAILURE_MESSAGE, SourceError};
pub use loader::{CatalogLoader, CatalogState, LoadOutcome, LoadPhase, LoaderConfig, MountedCatalog};
pub use source::{JsonRecordSource, RecordSource, StaticRecordSource};
