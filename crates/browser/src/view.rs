//! Render-boundary snapshot.

use serde::Serialize;

use catalog_filters::{FilterState, PriceDraft};
use catalog_pagination::{PageControl, PageOption};
use catalog_products::Product;

/// Everything a renderer needs to draw one frame of the catalog.
///
/// Borrowed from the [`crate::CatalogBrowser`] that built it; take a new view
/// after every dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    /// Products on the current page.
    pub products: &'a [Product],
    /// Matches across all pages.
    pub total_results: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub controls: Vec<PageControl>,
    pub page_options: Vec<PageOption>,
    pub filters: &'a FilterState,
    /// Any criterion differs from the initial state; drives the reset hint.
    pub filters_active: bool,
    pub price_draft: &'a PriceDraft,
}

impl CatalogView<'_> {
    pub fn is_empty(&self) -> bool {
        self.total_results == 0
    }
}
