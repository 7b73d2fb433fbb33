use serde::{Deserialize, Serialize};

use catalog_core::ValueObject;

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: i64 = 2;

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageToken {
    Previous,
    Page(usize),
    Ellipsis,
    Next,
}

impl ValueObject for PageToken {}

impl core::fmt::Display for PageToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PageToken::Previous => f.write_str("<"),
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str("..."),
            PageToken::Next => f.write_str(">"),
        }
    }
}

/// Build the token sequence for a pagination bar.
///
/// Page 1 is always present, even when there are no pages at all. The last
/// page appears only when `total_pages > 1`, and up to two pages either side
/// of `current_page` fill the gap, with an ellipsis wherever pages are skipped.
pub fn build_window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    let current = current_page as i64;
    let total = total_pages as i64;
    let mut tokens = Vec::new();

    if current > 1 {
        tokens.push(PageToken::Previous);
    }

    tokens.push(PageToken::Page(1));

    let start = (current - WINDOW_RADIUS).max(2);
    let end = (current + WINDOW_RADIUS).min(total - 1);

    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.extend((start..=end).map(|page| PageToken::Page(page as usize)));

    if end < total - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    if total > 1 {
        tokens.push(PageToken::Page(total_pages));
    }

    if current < total {
        tokens.push(PageToken::Next);
    }

    tokens
}

/// A token plus what activating it would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControl {
    pub token: PageToken,
    /// Page to navigate to, if the control is interactive at all.
    pub target: Option<usize>,
    pub disabled: bool,
}

impl ValueObject for PageControl {}

/// Annotate [`build_window`] output for rendering.
///
/// Previous/next are disabled at the first/last page, the current page's own
/// button is disabled, and ellipses are never interactive.
pub fn build_controls(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    build_window(current_page, total_pages)
        .into_iter()
        .map(|token| match token {
            PageToken::Previous => PageControl {
                token,
                target: Some(current_page.saturating_sub(1)),
                disabled: current_page <= 1,
            },
            PageToken::Next => PageControl {
                token,
                target: Some(current_page + 1),
                disabled: current_page >= total_pages,
            },
            PageToken::Page(page) => PageControl {
                token,
                target: Some(page),
                disabled: page == current_page,
            },
            PageToken::Ellipsis => PageControl {
                token,
                target: None,
                disabled: true,
            },
        })
        .collect()
}
