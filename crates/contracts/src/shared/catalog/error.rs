use thiserror::Error;

use crate::domain::a001_cake::aggregate::CakeId;

/// Ошибки загрузки каталога
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The listing request itself failed. Shown as the error state.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// One cake could not be loaded. The cake is dropped, the rest of the load continues.
    #[error("metadata for `{id}` unavailable: {reason}")]
    ItemMetadataUnavailable { id: CakeId, reason: String },

    /// Nothing to show: no images listed, or every cake failed
    #[error("catalog is empty")]
    EmptyCatalog,
}

/// Transport-level failure reported by a [`CatalogSource`](super::source::CatalogSource)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Network(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}
