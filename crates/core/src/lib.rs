//! `catalog-core`: foundation building blocks for the catalog browser.
//!
//! This crate contains **pure** primitives (no IO, no rendering, no timers).

pub mod error;
pub mod reducer;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use reducer::Reducer;
pub use value_object::ValueObject;
