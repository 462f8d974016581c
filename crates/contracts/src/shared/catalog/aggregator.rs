//! Catalog load cycle: listing -> per-cake metadata -> settled batch.

use futures::stream::{self, StreamExt};

use super::error::CatalogError;
use super::listing::{cake_ids, parse_listing};
use super::source::CatalogSource;
use crate::domain::a001_cake::aggregate::{Cake, CakeId};
use crate::domain::a001_cake::metadata::CakeMetadata;
use crate::shared::config::StorefrontConfig;

/// Result of a settled batch: every id ends up in exactly one of the two lists
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub loaded: Vec<Cake>,
    pub failed: Vec<CatalogError>,
}

/// Fetch the listing and turn it into cake ids
pub async fn list_cake_ids<S>(
    source: &S,
    config: &StorefrontConfig,
) -> Result<Vec<CakeId>, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let body = source
        .fetch_listing(config)
        .await
        .map_err(|e| CatalogError::CatalogUnavailable(e.to_string()))?;
    let entries = parse_listing(&body)?;
    Ok(cake_ids(&entries, &config.catalog.image_extension))
}

/// Load a single cake. Any failure is scoped to this id.
pub async fn fetch_cake<S>(
    source: &S,
    config: &StorefrontConfig,
    id: CakeId,
) -> Result<Cake, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let text = match source.fetch_metadata(config, &id).await {
        Ok(text) => text,
        Err(e) => {
            return Err(CatalogError::ItemMetadataUnavailable {
                id,
                reason: e.to_string(),
            })
        }
    };
    match CakeMetadata::parse(&text) {
        Ok(metadata) => Ok(Cake::new(id, metadata, config)),
        Err(e) => Err(CatalogError::ItemMetadataUnavailable {
            id,
            reason: e.to_string(),
        }),
    }
}

/// Settle-all batch. Waits for every fetch; one failure never aborts the others.
/// Successes keep listing order.
pub async fn fetch_all<S>(source: &S, config: &StorefrontConfig, ids: Vec<CakeId>) -> BatchOutcome
where
    S: CatalogSource + ?Sized,
{
    let limit = config
        .catalog
        .max_concurrent_fetches
        .unwrap_or(ids.len())
        .max(1);

    let results: Vec<Result<Cake, CatalogError>> = stream::iter(ids)
        .map(|id| fetch_cake(source, config, id))
        .buffered(limit)
        .collect()
        .await;

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(cake) => outcome.loaded.push(cake),
            Err(e) => outcome.failed.push(e),
        }
    }
    outcome
}

/// One full load cycle
///
/// - listing failure -> `CatalogUnavailable`
/// - no ids, or no cake loaded -> `EmptyCatalog`
/// - otherwise the loaded cakes
pub async fn load_catalog<S>(source: &S, config: &StorefrontConfig) -> Result<Vec<Cake>, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let ids = match list_cake_ids(source, config).await {
        Ok(ids) => ids,
        Err(e) => {
            log::error!("Error fetching cake list: {}", e);
            return Err(e);
        }
    };
    log::info!("Catalog listing returned {} cakes", ids.len());
    if ids.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let outcome = fetch_all(source, config, ids).await;
    for failure in &outcome.failed {
        log::warn!("Skipping cake: {}", failure);
    }
    log::info!(
        "Loaded {} cakes, skipped {}",
        outcome.loaded.len(),
        outcome.failed.len()
    );

    if outcome.loaded.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    Ok(outcome.loaded)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a001_cake::category::CakeCategory;
    use crate::shared::catalog::error::FetchError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Returns `Pending` once so several fetches are in flight together
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// In-memory source
    pub(crate) struct FakeSource {
        pub listing: Result<String, FetchError>,
        pub items: HashMap<String, Result<String, FetchError>>,
        in_flight: Cell<usize>,
        pub max_in_flight: Cell<usize>,
        pub listing_calls: Cell<usize>,
    }

    impl FakeSource {
        pub fn new(listing: Result<String, FetchError>) -> Self {
            Self {
                listing,
                items: HashMap::new(),
                in_flight: Cell::new(0),
                max_in_flight: Cell::new(0),
                listing_calls: Cell::new(0),
            }
        }

        pub fn with_listing(names: &[&str]) -> Self {
            let entries: Vec<String> = names
                .iter()
                .map(|n| format!(r#"{{"name": "{}", "type": "file"}}"#, n))
                .collect();
            Self::new(Ok(format!("[{}]", entries.join(","))))
        }

        pub fn item(mut self, id: &str, body: Result<&str, FetchError>) -> Self {
            self.items
                .insert(id.to_string(), body.map(|b| b.to_string()));
            self
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for FakeSource {
        async fn fetch_listing(&self, _config: &StorefrontConfig) -> Result<String, FetchError> {
            self.listing_calls.set(self.listing_calls.get() + 1);
            self.listing.clone()
        }

        async fn fetch_metadata(
            &self,
            _config: &StorefrontConfig,
            id: &CakeId,
        ) -> Result<String, FetchError> {
            self.in_flight.set(self.in_flight.get() + 1);
            self.max_in_flight
                .set(self.max_in_flight.get().max(self.in_flight.get()));
            YieldOnce(false).await;
            self.in_flight.set(self.in_flight.get() - 1);
            self.items
                .get(id.as_str())
                .cloned()
                .unwrap_or(Err(FetchError::Status(404)))
        }
    }

    const OK_BODY: &str = "Description: Tasty\nPrice: 25";

    #[test]
    fn test_two_cakes_populated() {
        let source = FakeSource::with_listing(&[
            "birthday-surprise.jpg",
            "birthday-surprise.txt",
            "plain-vanilla.jpg",
        ])
        .item("birthday-surprise", Ok(OK_BODY))
        .item("plain-vanilla", Ok("Description: Simple\nPrice: 15"));

        let cakes = block_on(load_catalog(&source, &StorefrontConfig::default())).unwrap();
        assert_eq!(cakes.len(), 2);
        assert_eq!(cakes[0].id, CakeId::new("birthday-surprise"));
        assert_eq!(cakes[0].category, CakeCategory::Birthday);
        assert_eq!(cakes[1].id, CakeId::new("plain-vanilla"));
        assert_eq!(cakes[1].category, CakeCategory::All);
        assert_eq!(cakes[1].price, "15");
    }

    #[test]
    fn test_listing_failure_is_unavailable() {
        let source = FakeSource::new(Err(FetchError::Status(404)))
            .item("birthday-surprise", Ok(OK_BODY));
        let err = block_on(load_catalog(&source, &StorefrontConfig::default())).unwrap_err();
        assert_eq!(err, CatalogError::CatalogUnavailable("HTTP 404".to_string()));
    }

    #[test]
    fn test_no_images_is_empty() {
        let source = FakeSource::with_listing(&[]);
        let err = block_on(load_catalog(&source, &StorefrontConfig::default())).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCatalog);

        let source = FakeSource::with_listing(&["notes.txt", "README.md"]);
        let err = block_on(load_catalog(&source, &StorefrontConfig::default())).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCatalog);
    }

    #[test]
    fn test_all_items_fail_is_empty() {
        let source = FakeSource::with_listing(&["a.jpg", "b.jpg", "c.jpg"])
            .item("a", Err(FetchError::Network("offline".to_string())))
            .item("b", Ok("just one line"));
        let err = block_on(load_catalog(&source, &StorefrontConfig::default())).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCatalog);
    }

    #[test]
    fn test_partial_failures_are_isolated() {
        let source = FakeSource::with_listing(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"])
            .item("a", Ok(OK_BODY))
            .item("b", Err(FetchError::Status(500)))
            .item("c", Ok("Description: no price line"))
            .item("d", Ok(OK_BODY));

        let outcome = block_on(fetch_all(
            &source,
            &StorefrontConfig::default(),
            vec![
                CakeId::new("a"),
                CakeId::new("b"),
                CakeId::new("c"),
                CakeId::new("d"),
            ],
        ));
        let loaded: Vec<&str> = outcome.loaded.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(loaded, vec!["a", "d"]);
        assert_eq!(outcome.failed.len(), 2);
        assert!(outcome.failed.iter().all(|e| matches!(
            e,
            CatalogError::ItemMetadataUnavailable { .. }
        )));

        let cakes = block_on(load_catalog(&source, &StorefrontConfig::default())).unwrap();
        assert_eq!(cakes.len(), 2);
    }

    #[test]
    fn test_malformed_metadata_reason() {
        let source = FakeSource::with_listing(&["x.jpg"]).item("x", Ok("Cost: 1\nPrice: 2"));
        let err = block_on(fetch_cake(
            &source,
            &StorefrontConfig::default(),
            CakeId::new("x"),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::ItemMetadataUnavailable {
                id: CakeId::new("x"),
                reason: "line 1 does not start with `Description:`".to_string(),
            }
        );
    }

    #[test]
    fn test_concurrency_limit() {
        let names = ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"];
        let mut source = FakeSource::with_listing(&names);
        for id in ["a", "b", "c", "d", "e"] {
            source = source.item(id, Ok(OK_BODY));
        }

        let cakes = block_on(load_catalog(&source, &StorefrontConfig::default())).unwrap();
        assert_eq!(cakes.len(), 5);
        assert_eq!(source.max_in_flight.get(), 5);

        let mut config = StorefrontConfig::default();
        config.catalog.max_concurrent_fetches = Some(2);
        source.max_in_flight.set(0);
        let cakes = block_on(load_catalog(&source, &config)).unwrap();
        assert_eq!(cakes.len(), 5);
        assert_eq!(source.max_in_flight.get(), 2);
        assert_eq!(source.listing_calls.get(), 2);
    }
}
