//! The coordinator between user input and the filtering core.

use catalog_core::Reducer;
use catalog_filters::{FilterAction, FilterReducer, FilterState, PriceBound, PriceDraft, SortMode, project};
use catalog_pagination::{build_controls, page_options, total_pages};
use catalog_products::{Category, Product, ProductCatalog};

use crate::config::BrowserConfig;
use crate::view::CatalogView;

/// Keys the price inputs react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Activate: commits the price draft.
    Enter,
    Other,
}

/// Owns the filter state, the derived results, and the price draft.
///
/// Every dispatched action is applied immediately and in order. Whenever the
/// filter state changes, the result set is rebuilt from the full catalog, so
/// no reader ever sees results from a previous state.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: ProductCatalog,
    config: BrowserConfig,
    reducer: FilterReducer,
    state: FilterState,
    results: Vec<Product>,
    price_draft: PriceDraft,
}

impl CatalogBrowser {
    pub fn new(catalog: ProductCatalog, config: BrowserConfig) -> Self {
        let reducer = FilterReducer;
        let state = reducer.initial_state();
        let results = project(catalog.products(), &state);

        tracing::info!(
            products = catalog.len(),
            page_size = config.page_size(),
            "catalog browser ready"
        );

        Self {
            catalog,
            config,
            reducer,
            state,
            results,
            price_draft: PriceDraft::new(),
        }
    }

    /// Single entry point for every filter action.
    pub fn dispatch(&mut self, action: FilterAction) {
        let next = self.reducer.reduce(&self.state, &action);

        if next == self.state {
            tracing::debug!(action = action.action_type(), "filter action left state unchanged");
            return;
        }

        self.results = project(self.catalog.products(), &next);
        self.state = next;

        tracing::debug!(
            action = action.action_type(),
            page = self.state.current_page,
            results = self.results.len(),
            "filter action applied"
        );
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Every product matching the current criteria, in display order.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.results.len(), self.config.page_size())
    }

    /// Results on the current page: indices `[(page-1)*size, page*size)`,
    /// clipped to the result length.
    pub fn visible_products(&self) -> &[Product] {
        let size = self.config.page_size();
        let page = self.state.current_page.max(1);
        let len = self.results.len();
        let start = (page - 1).saturating_mul(size).min(len);
        let end = page.saturating_mul(size).min(len);
        &self.results[start..end]
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.dispatch(FilterAction::ToggleCategory(category));
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.dispatch(FilterAction::SetSearch(search.into()));
    }

    pub fn toggle_in_stock(&mut self) {
        self.dispatch(FilterAction::ToggleInStock);
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.dispatch(FilterAction::SetSort(sort));
    }

    /// Clear every criterion and the price inputs.
    pub fn reset(&mut self) {
        self.price_draft = PriceDraft::new();
        self.dispatch(FilterAction::Reset);
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.state.current_page < self.total_pages()
    }

    /// Jump to `page`. Pages outside `1..=total_pages` are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            tracing::debug!(page, total_pages = self.total_pages(), "ignoring out-of-range page");
            return false;
        }
        self.dispatch(FilterAction::SetPage(page));
        true
    }

    /// Inert on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.dispatch(FilterAction::SetPage(self.state.current_page + 1));
        true
    }

    /// Inert on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.dispatch(FilterAction::SetPage(self.state.current_page - 1));
        true
    }

    pub fn price_draft(&self) -> &PriceDraft {
        &self.price_draft
    }

    /// Edit one side of the price draft. Does not touch the filter state.
    pub fn edit_price(&mut self, bound: PriceBound, raw: &str) {
        self.price_draft = self.price_draft.with_bound(bound, raw);
    }

    /// Commit the price draft into the filter state.
    pub fn apply_price_draft(&mut self) {
        self.dispatch(self.price_draft.commit());
    }

    /// Key pressed while a price input has focus. Returns whether it committed.
    pub fn handle_price_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => {
                self.apply_price_draft();
                true
            }
            Key::Other => false,
        }
    }

    /// Snapshot of everything the renderer needs.
    pub fn view(&self) -> CatalogView<'_> {
        let total_pages = self.total_pages();
        CatalogView {
            products: self.visible_products(),
            total_results: self.results.len(),
            current_page: self.state.current_page,
            total_pages,
            controls: build_controls(self.state.current_page, total_pages),
            page_options: page_options(total_pages),
            filters: &self.state,
            filters_active: self.state.has_active_filters(),
            price_draft: &self.price_draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_filters::PriceRange;
    use catalog_products::ProductId;

    fn catalog(count: u64) -> ProductCatalog {
        ProductCatalog::new(
            (1..=count)
                .map(|i| {
                    let category = Category::ALL[((i - 1) % 5) as usize];
                    Product::new(ProductId::new(i), format!("Item {i}"), category, i as f64, i % 2 == 0)
                        .unwrap()
                })
                .collect(),
        )
    }

    fn browser(count: u64, page_size: usize) -> CatalogBrowser {
        CatalogBrowser::new(catalog(count), BrowserConfig::default().with_page_size(page_size))
    }

    fn visible_ids(browser: &CatalogBrowser) -> Vec<u64> {
        browser.visible_products().iter().map(|p| p.id().value()).collect()
    }

    #[test]
    fn starts_with_every_product_on_page_one() {
        let browser = browser(32, 15);
        assert_eq!(browser.result_count(), 32);
        assert_eq!(browser.total_pages(), 3);
        assert_eq!(browser.current_page(), 1);
        assert_eq!(visible_ids(&browser), (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut browser = browser(32, 15);
        assert!(browser.go_to_page(3));
        assert_eq!(visible_ids(&browser), vec![31, 32]);
    }

    #[test]
    fn next_and_previous_are_inert_at_boundaries() {
        let mut browser = browser(20, 10);
        assert!(!browser.previous_page());
        assert!(browser.next_page());
        assert_eq!(browser.current_page(), 2);
        assert!(!browser.next_page());
        assert_eq!(browser.current_page(), 2);
        assert!(browser.previous_page());
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn go_to_page_ignores_out_of_range_pages() {
        let mut browser = browser(20, 10);
        assert!(!browser.go_to_page(0));
        assert!(!browser.go_to_page(3));
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn filter_change_returns_to_first_page_and_reprojects() {
        let mut browser = browser(40, 10);
        browser.go_to_page(4);
        browser.toggle_in_stock();
        assert_eq!(browser.current_page(), 1);
        assert_eq!(browser.result_count(), 20);
        assert!(browser.visible_products().iter().all(Product::in_stock));
    }

    #[test]
    fn no_results_means_no_pages_and_empty_slice() {
        let mut browser = browser(10, 5);
        browser.set_search("nothing matches this");
        assert_eq!(browser.result_count(), 0);
        assert_eq!(browser.total_pages(), 0);
        assert!(browser.visible_products().is_empty());
        assert!(!browser.can_go_next());
    }

    #[test]
    fn price_edits_do_not_filter_until_applied() {
        let mut browser = browser(30, 10);
        browser.go_to_page(2);
        browser.edit_price(PriceBound::Min, "5");
        browser.edit_price(PriceBound::Max, "1x0");

        assert_eq!(browser.state().price_range, PriceRange::UNBOUNDED);
        assert_eq!(browser.result_count(), 30);
        assert_eq!(browser.current_page(), 2);
        assert_eq!(browser.price_draft().max(), "10");

        browser.apply_price_draft();
        assert_eq!(browser.state().price_range, PriceRange::new(5.0, 10.0));
        assert_eq!(browser.result_count(), 6);
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn enter_commits_price_draft_and_other_keys_do_not() {
        let mut browser = browser(30, 10);
        browser.edit_price(PriceBound::Max, "3");

        assert!(!browser.handle_price_key(Key::Other));
        assert_eq!(browser.result_count(), 30);

        assert!(browser.handle_price_key(Key::Enter));
        assert_eq!(browser.result_count(), 3);
    }

    #[test]
    fn reset_clears_filters_and_price_draft() {
        let mut browser = browser(30, 10);
        browser.toggle_category(Category::B);
        browser.edit_price(PriceBound::Min, "4");
        browser.apply_price_draft();
        browser.set_sort(SortMode::PriceDesc);

        browser.reset();
        assert_eq!(*browser.state(), FilterState::initial());
        assert!(browser.price_draft().is_blank());
        assert_eq!(browser.result_count(), 30);
    }

    #[test]
    fn unrecognized_action_changes_nothing() {
        let mut browser = browser(30, 10);
        browser.go_to_page(2);
        let before = browser.state().clone();
        browser.dispatch(FilterAction::Unrecognized);
        assert_eq!(*browser.state(), before);
        assert_eq!(visible_ids(&browser), (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn raw_set_page_beyond_range_yields_empty_slice() {
        // The reducer trusts SetPage; the slice is clipped instead of panicking.
        let mut browser = browser(12, 5);
        browser.dispatch(FilterAction::SetPage(9));
        assert_eq!(browser.current_page(), 9);
        assert!(browser.visible_products().is_empty());
    }

    #[test]
    fn sort_applies_to_results_in_order() {
        let mut browser = browser(12, 5);
        browser.set_sort(SortMode::PriceDesc);
        assert_eq!(visible_ids(&browser), vec![12, 11, 10, 9, 8]);
    }

    #[test]
    fn view_reports_page_metadata() {
        let mut browser = browser(100, 10);
        browser.go_to_page(5);
        let view = browser.view();

        assert_eq!(view.total_results, 100);
        assert_eq!(view.current_page, 5);
        assert_eq!(view.total_pages, 10);
        assert_eq!(view.products.len(), 10);
        assert_eq!(view.page_options.len(), 10);
        assert_eq!(view.controls.len(), 11);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: walking every page visits each result exactly once.
            #[test]
            fn pages_partition_results(count in 0u64..80, page_size in 1usize..20) {
                let mut browser = browser(count, page_size);
                let mut seen = visible_ids(&browser);
                while browser.next_page() {
                    seen.extend(visible_ids(&browser));
                }
                prop_assert_eq!(seen, (1..=count).collect::<Vec<_>>());
            }

            /// Property: the visible slice never exceeds the page size.
            #[test]
            fn visible_slice_fits_page(count in 0u64..80, page_size in 1usize..20, page in 1usize..10) {
                let mut browser = browser(count, page_size);
                browser.go_to_page(page);
                prop_assert!(browser.visible_products().len() <= page_size);
            }
        }
    }
}
