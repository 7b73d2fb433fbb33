//! `catalog-browser`
//!
//! **Responsibility:** coordinate user input, filter state, and the visible page.
//!
//! This crate provides:
//! - [`CatalogBrowser`]: dispatches actions, re-projects results, slices pages
//! - [`Debouncer`]: single-slot coalescing timer for rapid input
//! - [`CatalogView`]: everything a renderer needs for one frame
//!
//! Rendering itself is a thin shell; `render` only exists for the terminal driver.

pub mod browser;
pub mod command;
pub mod config;
pub mod debounce;
pub mod render;
pub mod view;

pub use browser::{CatalogBrowser, Key};
pub use command::{BrowserCommand, parse_command};
pub use config::BrowserConfig;
pub use debounce::Debouncer;
pub use view::CatalogView;
