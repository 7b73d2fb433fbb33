//! Plain-text rendering of a [`CatalogView`] for the terminal driver.

use std::fmt::{self, Write as _};

use catalog_pagination::PageToken;
use catalog_products::Category;

use crate::view::CatalogView;

/// Render one frame: criteria, result table, and pagination bar.
pub fn render(view: &CatalogView<'_>) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_frame(&mut out, view);
    out
}

fn write_frame(out: &mut String, view: &CatalogView<'_>) -> fmt::Result {
    let filters = view.filters;

    let categories: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            let mark = if filters.is_category_selected(*c) { "x" } else { " " };
            format!("[{mark}] {c}")
        })
        .collect();
    writeln!(out, "Categories: {}", categories.join("  "))?;
    writeln!(
        out,
        "In stock only: {}  |  Sort: {}  |  Search: {:?}",
        if filters.in_stock_only { "yes" } else { "no" },
        filters.sort.label(),
        filters.search
    )?;

    let range = filters.price_range;
    let price = if range.is_unbounded() {
        "any".to_string()
    } else if range.max.is_finite() {
        format!("{} - {}", range.min, range.max)
    } else {
        format!("{} and up", range.min)
    };
    writeln!(
        out,
        "Price: {price}  (draft: {:?} - {:?})",
        view.price_draft.min(),
        view.price_draft.max()
    )?;
    if view.filters_active {
        writeln!(out, "Filters active; `reset` clears them")?;
    }

    writeln!(out)?;
    writeln!(out, "{} products found", view.total_results)?;

    if view.is_empty() {
        writeln!(out, "  No matching products")?;
    } else {
        writeln!(out, "  {:<5} {:<24} {:<8} {:>8}  {}", "ID", "Name", "Category", "Price", "In stock")?;
        for product in view.products {
            writeln!(
                out,
                "  {:<5} {:<24} {:<8} {:>8}  {}",
                product.id(),
                product.name(),
                product.category(),
                format!("${}", product.price()),
                if product.in_stock() { "yes" } else { "no" }
            )?;
        }
    }

    writeln!(out)?;
    let bar: Vec<String> = view
        .controls
        .iter()
        .map(|control| match control.token {
            PageToken::Page(n) if n == view.current_page => format!("[{n}]"),
            token if control.disabled => format!("({token})"),
            token => token.to_string(),
        })
        .collect();
    write!(out, "{}", bar.join(" "))?;
    if view.total_pages > 0 {
        write!(out, "   page {} of {}", view.current_page, view.total_pages)?;
    }
    writeln!(out)
}
