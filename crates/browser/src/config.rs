//! Fixed browser configuration.

use std::time::Duration;

/// Products shown per page.
pub const PAGE_SIZE: usize = 15;

/// Quiet period before a debounced search is dispatched.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserConfig {
    page_size: usize,
    search_debounce: Duration,
}

impl BrowserConfig {
    pub fn new(page_size: usize, search_debounce: Duration) -> Self {
        Self {
            page_size: page_size.max(1),
            search_debounce,
        }
    }

    /// Same config with a different page size (never below 1).
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(page_size, self.search_debounce)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::new(PAGE_SIZE, SEARCH_DEBOUNCE)
    }
}
