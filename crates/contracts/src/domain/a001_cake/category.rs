use serde::{Deserialize, Serialize};

/// Category tag used by the storefront filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CakeCategory {
    Birthday,
    Wedding,
    Special,
    #[default]
    All,
}

/// Keyword groups in priority order. The first group with a hit wins.
const KEYWORD_GROUPS: &[(CakeCategory, &[&str])] = &[
    (CakeCategory::Birthday, &["birthday", "party"]),
    (CakeCategory::Wedding, &["wedding", "bridal"]),
    (CakeCategory::Special, &["special", "custom"]),
];

impl CakeCategory {
    /// Derive the category from a cake identifier
    pub fn from_identifier(id: &str) -> Self {
        let name = id.to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(CakeCategory::All)
    }

    /// Код категории (значение `data-category` / `data-filter`)
    pub fn code(&self) -> &'static str {
        match self {
            CakeCategory::Birthday => "birthday",
            CakeCategory::Wedding => "wedding",
            CakeCategory::Special => "special",
            CakeCategory::All => "all",
        }
    }

    /// Человекочитаемое название для кнопки фильтра
    pub fn display_name(&self) -> &'static str {
        match self {
            CakeCategory::Birthday => "Birthday",
            CakeCategory::Wedding => "Wedding",
            CakeCategory::Special => "Special",
            CakeCategory::All => "All Cakes",
        }
    }

    /// Filter buttons in display order
    pub fn all() -> Vec<CakeCategory> {
        vec![
            CakeCategory::All,
            CakeCategory::Birthday,
            CakeCategory::Wedding,
            CakeCategory::Special,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "birthday" => Some(CakeCategory::Birthday),
            "wedding" => Some(CakeCategory::Wedding),
            "special" => Some(CakeCategory::Special),
            "all" => Some(CakeCategory::All),
            _ => None,
        }
    }
}

impl std::fmt::Display for CakeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
