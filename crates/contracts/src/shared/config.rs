use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    pub catalog: CatalogConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the repository-hosting API
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    /// Directory holding `<id>.jpg` / `<id>.txt` pairs, both in the repo and next to the page
    pub items_dir: String,
    pub image_extension: String,
    /// Upper bound on in-flight metadata requests. `None` fires them all at once.
    pub max_concurrent_fetches: Option<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    pub whatsapp_number: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[catalog]
api_base = "https://api.github.com"
owner = "mjjustinbackup-dell"
repo = "cake-shop"
items_dir = "cakes"
image_extension = ".jpg"

[contact]
whatsapp_number = "+31685655527"
"#;

/// File name of the optional overlay served next to `index.html`
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            owner: "mjjustinbackup-dell".to_string(),
            repo: "cake-shop".to_string(),
            items_dir: "cakes".to_string(),
            image_extension: ".jpg".to_string(),
            max_concurrent_fetches: None,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "+31685655527".to_string(),
        }
    }
}

pub fn parse_config(text: &str) -> Result<StorefrontConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Resolve the effective configuration
///
/// Search order:
/// 1. The overlay file contents, if the page served one
/// 2. Falls back to the embedded default
pub fn resolve_config(overlay: Option<&str>) -> StorefrontConfig {
    match overlay {
        Some(text) => match parse_config(text) {
            Ok(config) => {
                log::info!("Loaded {}", CONFIG_FILE_NAME);
                config
            }
            Err(e) => {
                log::warn!("Invalid {}, using defaults: {}", CONFIG_FILE_NAME, e);
                StorefrontConfig::default()
            }
        },
        None => {
            log::info!("Using default embedded configuration");
            StorefrontConfig::default()
        }
    }
}

impl StorefrontConfig {
    /// Contents listing endpoint for the items directory
    pub fn listing_url(&self) -> String {
        let c = &self.catalog;
        format!(
            "{}/repos/{}/{}/contents/{}",
            c.api_base.trim_end_matches('/'),
            c.owner,
            c.repo,
            c.items_dir.trim_matches('/')
        )
    }

    pub fn metadata_path(&self, id: &str) -> String {
        format!("{}/{}.txt", self.catalog.items_dir.trim_matches('/'), id)
    }

    pub fn image_path(&self, id: &str) -> String {
        format!(
            "{}/{}{}",
            self.catalog.items_dir.trim_matches('/'),
            id,
            self.catalog.image_extension
        )
    }

    /// wa.me accepts digits only
    fn whatsapp_digits(&self) -> &str {
        self.contact.whatsapp_number.trim_start_matches('+')
    }

    /// Pre-filled order message link. Only the first `-` of the id becomes a space.
    pub fn order_url(&self, id: &str) -> String {
        let message = format!("I want to order the {} cake", id.replacen('-', " ", 1));
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_digits(),
            urlencoding::encode(&message)
        )
    }

    /// Fallback contact link shown by the error state
    pub fn contact_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_digits())
    }
}
