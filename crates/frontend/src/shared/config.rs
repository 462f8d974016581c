use contracts::shared::catalog::error::FetchError;
use contracts::shared::config::{resolve_config, StorefrontConfig, CONFIG_FILE_NAME};
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::api_utils::fetch_text;

/// How long the optional overlay may take before the embedded default wins
pub const CONFIG_TIMEOUT_MS: u32 = 3_000;

/// Storefront configuration shared through context
///
/// The page renders right away with the embedded default; `resolved` flips once the
/// overlay lookup has settled (loaded, missing, invalid or timed out).
#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub config: RwSignal<StorefrontConfig>,
    pub resolved: RwSignal<bool>,
}

impl ConfigContext {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(StorefrontConfig::default()),
            resolved: RwSignal::new(false),
        }
    }

    /// Start the overlay lookup in the background
    pub fn resolve(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let config = load_config().await;
            this.config.set(config);
            this.resolved.set(true);
        });
    }
}

impl Default for ConfigContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_config() -> ConfigContext {
    use_context::<ConfigContext>().expect("ConfigContext context not found")
}

/// Load configuration for this page
///
/// Search order:
/// 1. `storefront.toml` served next to `index.html`, if it answers within [`CONFIG_TIMEOUT_MS`]
/// 2. Falls back to the embedded default config
pub async fn load_config() -> StorefrontConfig {
    let fetch = Box::pin(fetch_text(CONFIG_FILE_NAME, None));
    let timeout = Box::pin(TimeoutFuture::new(CONFIG_TIMEOUT_MS));

    let answer = match select(fetch, timeout).await {
        Either::Left((answer, _)) => Some(answer),
        Either::Right(_) => None,
    };
    resolve_config(overlay_text(answer).as_deref())
}

/// Overlay text from the `storefront.toml` request; `None` answer means it timed out
pub fn overlay_text(answer: Option<Result<String, FetchError>>) -> Option<String> {
    match answer {
        Some(Ok(text)) => Some(text),
        Some(Err(e)) => {
            log::debug!("{} not loaded: {}", CONFIG_FILE_NAME, e);
            None
        }
        None => {
            log::warn!(
                "{} did not answer within {} ms, using defaults",
                CONFIG_FILE_NAME,
                CONFIG_TIMEOUT_MS
            );
            None
        }
    }
}
