use serde::{Deserialize, Serialize};

use super::category::CakeCategory;
use super::metadata::CakeMetadata;
use crate::shared::config::StorefrontConfig;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор торта: имя файла изображения без расширения
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CakeId(String);

impl CakeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Strip `extension` from a listing file name. `None` if the name does not end with it
    /// or nothing is left.
    pub fn from_file_name(name: &str, extension: &str) -> Option<Self> {
        name.strip_suffix(extension)
            .filter(|stem| !stem.is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CakeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Карточка торта, собранная из листинга и файла `<id>.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cake {
    pub id: CakeId,

    #[serde(rename = "displayName")]
    pub display_name: String,

    pub description: String,

    /// Unit-less, shown as written in the text file
    pub price: String,

    #[serde(rename = "imagePath")]
    pub image_path: String,

    #[serde(rename = "orderUrl")]
    pub order_url: String,

    pub category: CakeCategory,
}

impl Cake {
    pub fn new(id: CakeId, metadata: CakeMetadata, config: &StorefrontConfig) -> Self {
        Self {
            display_name: display_name(id.as_str()),
            description: metadata.description,
            price: metadata.price,
            image_path: config.image_path(id.as_str()),
            order_url: config.order_url(id.as_str()),
            category: CakeCategory::from_identifier(id.as_str()),
            id,
        }
    }
}

/// `birthday-surprise` -> `Birthday Surprise`
///
/// Every word character (any Unicode letter or digit, or `_`) that follows a
/// non-word character or starts the string is upper-cased; the rest is left as is.
pub fn display_name(id: &str) -> String {
    let mut result = String::with_capacity(id.len());
    let mut prev_is_word = false;
    for ch in id.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        prev_is_word = is_word;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(description: &str, price: &str) -> CakeMetadata {
        CakeMetadata {
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("birthday-surprise"), "Birthday Surprise");
        assert_eq!(display_name("red-velvet-deluxe"), "Red Velvet Deluxe");
        assert_eq!(display_name("mum's-cake"), "Mum'S Cake");
        assert_eq!(display_name("already Capital"), "Already Capital");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_display_name_non_ascii_letters() {
        // letters outside ASCII count as word characters
        assert_eq!(display_name("crème-brûlée"), "Crème Brûlée");
        assert_eq!(display_name("éclair"), "Éclair");
    }

    #[test]
    fn test_cake_id_from_file_name() {
        assert_eq!(
            CakeId::from_file_name("plain-vanilla.jpg", ".jpg"),
            Some(CakeId::new("plain-vanilla"))
        );
        assert_eq!(CakeId::from_file_name("plain-vanilla.txt", ".jpg"), None);
        assert_eq!(CakeId::from_file_name("photo.JPG", ".jpg"), None);
        assert_eq!(CakeId::from_file_name(".jpg", ".jpg"), None);
        assert_eq!(
            CakeId::from_file_name("a.jpg.jpg", ".jpg"),
            Some(CakeId::new("a.jpg"))
        );
    }

    #[test]
    fn test_new_derives_fields() {
        let config = StorefrontConfig::default();
        let cake = Cake::new(
            CakeId::new("wedding-classic"),
            metadata("Three tiers", "120"),
            &config,
        );
        assert_eq!(cake.display_name, "Wedding Classic");
        assert_eq!(cake.description, "Three tiers");
        assert_eq!(cake.price, "120");
        assert_eq!(cake.image_path, "cakes/wedding-classic.jpg");
        assert_eq!(
            cake.order_url,
            "https://wa.me/31685655527?text=I%20want%20to%20order%20the%20wedding%20classic%20cake"
        );
        assert_eq!(cake.category, CakeCategory::Wedding);
    }
}
