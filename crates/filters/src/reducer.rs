use catalog_core::Reducer;

use crate::action::FilterAction;
use crate::state::{FilterState, INITIAL_FILTER_STATE};

/// The filter state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterState;
    type Action = FilterAction;

    fn initial_state(&self) -> FilterState {
        FilterState::initial()
    }

    fn reduce(&self, state: &FilterState, action: &FilterAction) -> FilterState {
        reduce(state, action)
    }
}

/// Compute the next filter state.
///
/// Every criterion change sends the user back to page 1. `SetPage` touches
/// nothing but the page and does not validate it.
pub fn reduce(state: &FilterState, action: &FilterAction) -> FilterState {
    match action {
        FilterAction::ToggleCategory(category) => {
            let mut selected_categories = state.selected_categories.clone();
            if !selected_categories.remove(category) {
                selected_categories.insert(*category);
            }
            FilterState {
                selected_categories,
                current_page: 1,
                ..state.clone()
            }
        }
        FilterAction::SetPriceRange(range) => FilterState {
            price_range: *range,
            current_page: 1,
            ..state.clone()
        },
        FilterAction::SetSearch(search) => FilterState {
            search: search.clone(),
            current_page: 1,
            ..state.clone()
        },
        FilterAction::ToggleInStock => FilterState {
            in_stock_only: !state.in_stock_only,
            current_page: 1,
            ..state.clone()
        },
        FilterAction::SetSort(sort) => FilterState {
            sort: *sort,
            current_page: 1,
            ..state.clone()
        },
        FilterAction::SetPage(page) => FilterState {
            current_page: *page,
            ..state.clone()
        },
        FilterAction::Reset => INITIAL_FILTER_STATE.clone(),
        FilterAction::Unrecognized => state.clone(),
    }
}
