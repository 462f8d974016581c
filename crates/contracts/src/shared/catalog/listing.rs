//! Contents listing returned by the repository API
//! (`GET /repos/{owner}/{repo}/contents/{dir}`).

use serde::Deserialize;
use std::collections::HashSet;

use super::error::CatalogError;
use crate::domain::a001_cake::aggregate::CakeId;

/// One entry of the listing. Only `name` is required; `type` tells files from
/// directories when present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl ListingEntry {
    pub fn is_dir(&self) -> bool {
        self.kind.as_deref() == Some("dir")
    }
}

pub fn parse_listing(body: &str) -> Result<Vec<ListingEntry>, CatalogError> {
    serde_json::from_str(body)
        .map_err(|e| CatalogError::CatalogUnavailable(format!("Failed to parse listing: {}", e)))
}

/// Identifiers of all non-directory entries ending with `extension`, in listing order,
/// duplicates removed
pub fn cake_ids(entries: &[ListingEntry], extension: &str) -> Vec<CakeId> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| !entry.is_dir())
        .filter_map(|entry| CakeId::from_file_name(&entry.name, extension))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {"name": "birthday-surprise.jpg", "type": "file", "path": "cakes/birthday-surprise.jpg"},
        {"name": "birthday-surprise.txt", "type": "file", "path": "cakes/birthday-surprise.txt"},
        {"name": "plain-vanilla.jpg", "type": "file", "download_url": null},
        {"name": "archive.jpg", "type": "dir"},
        {"name": "README.md"}
    ]"#;

    #[test]
    fn test_parse_and_filter() {
        let entries = parse_listing(LISTING).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].kind.as_deref(), Some("file"));

        let ids = cake_ids(&entries, ".jpg");
        assert_eq!(
            ids,
            vec![CakeId::new("birthday-surprise"), CakeId::new("plain-vanilla")]
        );
    }

    #[test]
    fn test_directory_named_like_image_skipped() {
        let entries =
            parse_listing(r#"[{"name": "x.jpg", "type": "dir"}, {"name": "y.jpg", "type": "file"}]"#)
                .unwrap();
        assert!(entries[0].is_dir());
        assert_eq!(cake_ids(&entries, ".jpg"), vec![CakeId::new("y")]);
    }

    #[test]
    fn test_empty_listing() {
        let entries = parse_listing("[]").unwrap();
        assert!(cake_ids(&entries, ".jpg").is_empty());
    }

    #[test]
    fn test_duplicates_collapsed() {
        let entries = parse_listing(r#"[{"name": "a.jpg"}, {"name": "b.jpg"}, {"name": "a.jpg"}]"#)
            .unwrap();
        assert_eq!(cake_ids(&entries, ".jpg"), vec![CakeId::new("a"), CakeId::new("b")]);
    }

    #[test]
    fn test_malformed_listing() {
        // API error bodies are objects, not arrays
        let err = parse_listing(r#"{"message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::CatalogUnavailable(_)));
    }
}
