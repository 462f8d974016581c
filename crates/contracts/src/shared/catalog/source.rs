use async_trait::async_trait;

use super::error::FetchError;
use crate::domain::a001_cake::aggregate::CakeId;
use crate::shared::config::StorefrontConfig;

/// Where the catalog comes from. The browser implementation talks HTTP;
/// tests use an in-memory fake.
///
/// `?Send` because browser futures hold JS handles.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Body of the directory listing response. Non-success statuses are errors.
    async fn fetch_listing(&self, config: &StorefrontConfig) -> Result<String, FetchError>;

    /// Body of `<items_dir>/<id>.txt`. Non-success statuses are errors.
    async fn fetch_metadata(
        &self,
        config: &StorefrontConfig,
        id: &CakeId,
    ) -> Result<String, FetchError>;
}
