use std::collections::BTreeSet;

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, ValueObject};
use catalog_products::Category;

/// Inclusive price bounds.
///
/// `max` may be `f64::INFINITY` (no upper bound). On the wire an unbounded
/// maximum is written as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    #[serde(with = "unbounded")]
    pub max: f64,
}

impl PriceRange {
    /// `[0, +inf]`: admits every valid price.
    pub const UNBOUNDED: PriceRange = PriceRange {
        min: 0.0,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive at both ends. A range with `min > max` contains nothing.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl ValueObject for PriceRange {}

mod unbounded {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(max: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let bound = if max.is_finite() { Some(*max) } else { None };
        bound.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Source order.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "priceAsc",
            SortMode::PriceDesc => "priceDesc",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::None => "Product number",
            SortMode::PriceAsc => "Price: low to high",
            SortMode::PriceDesc => "Price: high to low",
        }
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SortMode::None),
            "priceasc" | "asc" => Ok(SortMode::PriceAsc),
            "pricedesc" | "desc" => Ok(SortMode::PriceDesc),
            other => Err(DomainError::unknown_variant("sort mode", other)),
        }
    }
}

/// The complete set of active criteria at a point in time.
///
/// Never mutated in place: the reducer returns a new value for every
/// transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_categories: BTreeSet<Category>,
    pub price_range: PriceRange,
    pub search: String,
    pub in_stock_only: bool,
    pub sort: SortMode,
    /// 1-based.
    pub current_page: usize,
}

/// The frozen initial state. `Reset` always returns a copy of this value.
pub static INITIAL_FILTER_STATE: FilterState = FilterState {
    selected_categories: BTreeSet::new(),
    price_range: PriceRange::UNBOUNDED,
    search: String::new(),
    in_stock_only: false,
    sort: SortMode::None,
    current_page: 1,
};

impl FilterState {
    pub fn initial() -> Self {
        INITIAL_FILTER_STATE.clone()
    }

    pub fn is_category_selected(&self, category: Category) -> bool {
        self.selected_categories.contains(&category)
    }

    /// Whether any criterion differs from the initial state. The current page
    /// is not a criterion.
    pub fn has_active_filters(&self) -> bool {
        let initial = &INITIAL_FILTER_STATE;
        self.selected_categories != initial.selected_categories
            || self.price_range != initial.price_range
            || self.search != initial.search
            || self.in_stock_only != initial.in_stock_only
            || self.sort != initial.sort
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::initial()
    }
}

impl ValueObject for FilterState {}
