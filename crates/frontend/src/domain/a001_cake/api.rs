use async_trait::async_trait;
use contracts::domain::a001_cake::aggregate::CakeId;
use contracts::shared::catalog::error::FetchError;
use contracts::shared::catalog::source::CatalogSource;
use contracts::shared::config::StorefrontConfig;

use crate::shared::api_utils::fetch_text;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Catalog backed by the GitHub contents API (listing) and static files
/// next to the page (`<items_dir>/<id>.txt`)
#[derive(Debug, Clone, Copy)]
pub struct GithubCatalogSource;

#[async_trait(?Send)]
impl CatalogSource for GithubCatalogSource {
    async fn fetch_listing(&self, config: &StorefrontConfig) -> Result<String, FetchError> {
        fetch_text(&config.listing_url(), Some(GITHUB_JSON)).await
    }

    async fn fetch_metadata(
        &self,
        config: &StorefrontConfig,
        id: &CakeId,
    ) -> Result<String, FetchError> {
        fetch_text(&config.metadata_path(id.as_str()), None).await
    }
}
