use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::index::{CategoryIndex, ALL_CATEGORY};
use crate::item::Item;
use crate::taxonomy::{CategoryInfo, Taxonomy};

const BUILTIN_PORTFOLIO: &str = include_str!("../../../catalogs/portfolio.json");

/// The full, immutable list of showcased items plus the category taxonomy.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    name: Option<String>,
    items: Vec<Item>,
    taxonomy: Taxonomy,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    schema_version: Option<u32>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    categories: Vec<CategoryInfo>,
    #[serde(default)]
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, enforcing unique ids and non-empty categories.
    pub fn new(items: Vec<Item>, taxonomy: Taxonomy) -> Result<Self> {
        validate_items(&items)?;
        Ok(Self {
            name: None,
            items,
            taxonomy,
        })
    }

    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        Self::new(items, Taxonomy::default())
    }

    /// The portfolio compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_bytes(BUILTIN_PORTFOLIO.as_bytes())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_bytes(&bytes)?;
        log::debug!(
            "Loaded catalog from {} ({} items)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw = parse_raw(bytes)?;
        if let Some(schema_version) = raw.schema_version {
            if schema_version != 1 {
                return Err(CatalogError::UnsupportedSchema(schema_version));
            }
        }
        let mut catalog = Self::new(raw.items, Taxonomy::new(raw.categories))?;
        catalog.name = raw.name.filter(|n| !n.trim().is_empty());
        Ok(catalog)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn index(&self) -> CategoryIndex<'_> {
        CategoryIndex::build(&self.items)
    }
}

fn validate_items(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(CatalogError::EmptyId(pos));
        }
        if item.category.trim().is_empty() {
            return Err(CatalogError::EmptyCategory(item.id.clone()));
        }
        if item.category == ALL_CATEGORY {
            return Err(CatalogError::ReservedCategory(item.id.clone(), ALL_CATEGORY));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

fn parse_raw(bytes: &[u8]) -> Result<RawCatalog> {
    let value: serde_json::Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(json_err) => {
            let utf8 = std::str::from_utf8(bytes)
                .map_err(|err| CatalogError::Parse(format!("{json_err}; {err}")))?;
            let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                CatalogError::Parse(format!("{json_err}; TOML parse error: {toml_err}"))
            })?;
            serde_json::to_value(toml_value)
                .map_err(|err| CatalogError::Parse(format!("TOML conversion failed: {err}")))?
        }
    };

    validate_catalog_value(&value)?;
    serde_json::from_value(value).map_err(|err| CatalogError::Parse(err.to_string()))
}

fn validate_catalog_value(value: &serde_json::Value) -> Result<()> {
    const TOP: &[&str] = &["schema_version", "name", "categories", "items"];
    const CATEGORY: &[&str] = &["id", "label", "description", "style"];

    let Some(obj) = value.as_object() else {
        return Err(CatalogError::Parse("catalog root must be an object".to_string()));
    };

    let mut unknown = Vec::new();
    for key in obj.keys() {
        if !TOP.contains(&key.as_str()) {
            unknown.push(key.clone());
        }
    }
    if let Some(categories) = obj.get("categories").and_then(|c| c.as_array()) {
        for (idx, category) in categories.iter().enumerate() {
            let Some(category) = category.as_object() else {
                continue;
            };
            for key in category.keys() {
                if !CATEGORY.contains(&key.as_str()) {
                    unknown.push(format!("categories[{idx}].{key}"));
                }
            }
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::UnknownFields(unknown.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.items().iter().any(|i| i.id == "dl-1"));
        assert!(catalog.taxonomy().section_info("deep-learning").is_some());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_items(vec![
            Item::new("a", "A", "ml"),
            Item::new("a", "A again", "cv"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn rejects_empty_category() {
        let err = Catalog::from_items(vec![Item::new("a", "A", " ")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCategory(_)));
    }

    #[test]
    fn rejects_reserved_all_category() {
        let err = Catalog::from_items(vec![
            Item::new("a-1", "A", "all"),
            Item::new("ml-1", "M", "ml"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::ReservedCategory(ref id, "all") if id == "a-1"));
        assert!(err.to_string().contains("reserved category 'all'"));

        let err = Catalog::from_bytes(
            br#"{"items": [{"id": "a-1", "title": "A", "category": "all"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::ReservedCategory(..)));
    }

    #[test]
    fn rejects_unsupported_schema() {
        let err = Catalog::from_bytes(br#"{"schema_version": 2, "items": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedSchema(2)));
    }

    #[test]
    fn rejects_unknown_fields_with_paths() {
        let err = Catalog::from_bytes(
            br#"{"items": [], "sections": {}, "categories": [{"id": "ml", "colour": "red"}]}"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sections"), "{message}");
        assert!(message.contains("categories[0].colour"), "{message}");
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
schema_version = 1
name = "Lab"

[[categories]]
id = "cv"
label = "Computer Vision"

[[items]]
id = "cv-1"
title = "Detector"
category = "cv"
technologies = ["PyTorch"]
"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.name(), Some("Lab"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].technologies, vec!["PyTorch".to_string()]);
        assert_eq!(catalog.taxonomy().label_for("cv"), "Computer Vision");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::from_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_bytes(b"{}").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.index().is_empty());
    }
}
