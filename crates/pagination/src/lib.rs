//! Page navigation helpers.
//!
//! Pure functions of `(current page, total pages)`. They decide what to show,
//! never what page is current.

pub mod options;
pub mod window;

pub use options::{PageOption, page_options, total_pages};
pub use window::{PageControl, PageToken, build_controls, build_window};
