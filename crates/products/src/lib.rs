//! Products domain module.
//!
//! Product records are supplied once at startup by an external source and are
//! read-only afterwards. This crate only describes them and loads them; all
//! filtering happens in `catalog-filters`.

pub mod catalog;
pub mod product;

pub use catalog::{CatalogLoadError, ProductCatalog};
pub use product::{Category, Product, ProductId};
