use serde::{Deserialize, Serialize};

use catalog_core::ValueObject;

/// One entry of the jump-to-page selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOption {
    pub page: usize,
    pub label: String,
}

impl ValueObject for PageOption {}

/// `[1, 2, ..., total_pages]`, each labelled "Page i". Empty for zero pages.
pub fn page_options(total_pages: usize) -> Vec<PageOption> {
    (1..=total_pages)
        .map(|page| PageOption {
            page,
            label: format!("Page {page}"),
        })
        .collect()
}

/// Number of pages needed for `len` items: `ceil(len / page_size)`.
///
/// A zero `page_size` yields zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pages_yield_no_options() {
        assert!(page_options(0).is_empty());
    }

    #[test]
    fn options_enumerate_every_page() {
        let options = page_options(3);
        let pages: Vec<usize> = options.iter().map(|o| o.page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(options[0].label, "Page 1");
        assert_eq!(options[2].label, "Page 3");
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(1, 15), 1);
        assert_eq!(total_pages(15, 15), 1);
        assert_eq!(total_pages(16, 15), 2);
        assert_eq!(total_pages(150, 15), 10);
    }

    #[test]
    fn zero_page_size_has_no_pages() {
        assert_eq!(total_pages(10, 0), 0);
    }
}
