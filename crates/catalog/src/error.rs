use thiserror::Error;

use romantica_core::DomainError;

/// The only error text a consuming view ever sees.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to fetch products";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record payload: {0}")]
    Malformed(String),
}

/// Why a load failed. Logged in full; surfaced to views only as
/// [`LOAD_FAILURE_MESSAGE`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to transform records: {0}")]
    Transform(#[from] DomainError),
}
