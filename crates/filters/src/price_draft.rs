//! Uncommitted price input.
//!
//! Typing into the price fields edits a [`PriceDraft`] only. The draft reaches
//! the filter state when the user explicitly applies it, so retyping digits
//! never re-filters on every keystroke.

use serde::Serialize;

use crate::action::FilterAction;
use crate::state::PriceRange;

/// Which side of the range an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

/// Keep ASCII digits and the first decimal point; drop everything else.
pub fn sanitize_price_input(raw: &str) -> String {
    let mut seen_point = false;
    raw.chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Text currently typed into the min/max price inputs.
///
/// Both fields only ever hold sanitized text. Edits return a new draft; the
/// owner swaps it in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriceDraft {
    min: String,
    max: String,
}

impl PriceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(&self) -> &str {
        &self.min
    }

    pub fn max(&self) -> &str {
        &self.max
    }

    pub fn with_min(&self, raw: &str) -> Self {
        Self {
            min: sanitize_price_input(raw),
            max: self.max.clone(),
        }
    }

    pub fn with_max(&self, raw: &str) -> Self {
        Self {
            min: self.min.clone(),
            max: sanitize_price_input(raw),
        }
    }

    pub fn with_bound(&self, bound: PriceBound, raw: &str) -> Self {
        match bound {
            PriceBound::Min => self.with_min(raw),
            PriceBound::Max => self.with_max(raw),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }

    /// The range this draft commits to: blank min is 0, blank max is unbounded.
    pub fn to_range(&self) -> PriceRange {
        PriceRange {
            min: parse_bound(&self.min).unwrap_or(PriceRange::UNBOUNDED.min),
            max: parse_bound(&self.max).unwrap_or(PriceRange::UNBOUNDED.max),
        }
    }

    /// The action that commits this draft.
    pub fn commit(&self) -> FilterAction {
        FilterAction::SetPriceRange(self.to_range())
    }
}

// A lone "." survives sanitizing but is not a number; it counts as blank.
fn parse_bound(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
