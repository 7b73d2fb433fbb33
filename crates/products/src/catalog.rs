//! Read-only product collection supplied at startup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::product::Product;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable product collection.
///
/// Cloning is cheap: all clones share the same backing slice. Source order is
/// preserved, and it is the order results appear in when no sort is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Arc<[Product]>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Load a JSON array of product records from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, ProductId};

    #[test]
    fn from_json_preserves_source_order() {
        let json = r#"[
            {"id": 2, "name": "Second", "category": "B", "price": 20, "inStock": false},
            {"id": 1, "name": "First", "category": "A", "price": 10, "inStock": true}
        ]"#;

        let catalog = ProductCatalog::from_json_str(json).unwrap();
        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn from_json_rejects_unknown_category() {
        let json = r#"[{"id": 1, "name": "X", "category": "Q", "price": 1, "inStock": true}]"#;
        let err = ProductCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn from_json_rejects_negative_price() {
        let json = r#"[{"id": 1, "name": "X", "category": "A", "price": -3, "inStock": true}]"#;
        assert!(ProductCatalog::from_json_str(json).is_err());
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = ProductCatalog::load("/definitely/not/here/items.json").unwrap_err();
        match err {
            CatalogLoadError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/items.json"));
            }
            _ => panic!("Expected Io error for missing file"),
        }
    }

    #[test]
    fn clones_share_backing_storage() {
        let catalog = ProductCatalog::new(vec![
            Product::new(ProductId::new(1), "Widget", Category::A, 50.0, true).unwrap(),
        ]);
        let clone = catalog.clone();
        assert!(core::ptr::eq(catalog.products(), clone.products()));
    }

    #[test]
    fn empty_catalog_is_empty() {
        let catalog = ProductCatalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
