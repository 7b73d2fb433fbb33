use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use catalog_products::Category;

use crate::state::{PriceRange, SortMode};

/// A user intent, dispatched into the filter reducer.
///
/// Serialized as `{"type": "SET_SEARCH", "payload": "wid"}`. Any tag this
/// enum does not know deserializes to [`FilterAction::Unrecognized`] whatever
/// its payload, and the reducer treats that as a no-op.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterAction {
    ToggleCategory(Category),
    SetPriceRange(PriceRange),
    SetSearch(String),
    ToggleInStock,
    SetSort(SortMode),
    /// Trusted as-is; callers only offer pages in `1..=total_pages`.
    SetPage(usize),
    Reset,
    Unrecognized,
}

/// Untyped action as received: the payload stays raw until the tag is known.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

fn payload<T: DeserializeOwned, E: serde::de::Error>(raw: serde_json::Value) -> Result<T, E> {
    serde_json::from_value(raw).map_err(E::custom)
}

impl<'de> Deserialize<'de> for FilterAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        let action = match raw.kind.as_str() {
            "TOGGLE_CATEGORY" => FilterAction::ToggleCategory(payload(raw.payload)?),
            "SET_PRICE_RANGE" => FilterAction::SetPriceRange(payload(raw.payload)?),
            "SET_SEARCH" => FilterAction::SetSearch(payload(raw.payload)?),
            "TOGGLE_IN_STOCK" => FilterAction::ToggleInStock,
            "SET_SORT" => FilterAction::SetSort(payload(raw.payload)?),
            "SET_PAGE" => FilterAction::SetPage(payload(raw.payload)?),
            "RESET" => FilterAction::Reset,
            _ => FilterAction::Unrecognized,
        };
        Ok(action)
    }
}

impl FilterAction {
    /// Whether this action changes a filter criterion (and so resets the page).
    pub fn changes_criteria(&self) -> bool {
        matches!(
            self,
            FilterAction::ToggleCategory(_)
                | FilterAction::SetPriceRange(_)
                | FilterAction::SetSearch(_)
                | FilterAction::ToggleInStock
                | FilterAction::SetSort(_)
        )
    }

    pub fn action_type(&self) -> &'static str {
        match self {
            FilterAction::ToggleCategory(_) => "TOGGLE_CATEGORY",
            FilterAction::SetPriceRange(_) => "SET_PRICE_RANGE",
            FilterAction::SetSearch(_) => "SET_SEARCH",
            FilterAction::ToggleInStock => "TOGGLE_IN_STOCK",
            FilterAction::SetSort(_) => "SET_SORT",
            FilterAction::SetPage(_) => "SET_PAGE",
            FilterAction::Reset => "RESET",
            FilterAction::Unrecognized => "UNRECOGNIZED",
        }
    }
}
