//! Filtering domain module.
//!
//! Everything here is deterministic and side-effect free:
//!
//! - [`state`]: the filter criteria and their frozen initial value
//! - [`action`]: the tagged actions a user can dispatch
//! - [`reducer`]: the pure `(state, action) -> state` transition
//! - [`price_draft`]: uncommitted price input and its commit rules
//! - [`projection`]: the filtered, sorted view of a product collection

pub mod action;
pub mod price_draft;
pub mod projection;
pub mod reducer;
pub mod state;

pub use action::FilterAction;
pub use price_draft::{PriceBound, PriceDraft, sanitize_price_input};
pub use projection::{matches, project};
pub use reducer::{FilterReducer, reduce};
pub use state::{FilterState, INITIAL_FILTER_STATE, PriceRange, SortMode};
