use core::str::FromStr;

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

/// Product identifier as assigned by the data source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Fixed product category enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
    E,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::A,
        Category::B,
        Category::C,
        Category::D,
        Category::E,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
            Category::E => "E",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::unknown_variant("category", trimmed))
    }
}

/// Wire shape of a product as it appears in the data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: f64,
    in_stock: bool,
}

/// A catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: f64,
    in_stock: bool,
}

impl Product {
    /// Build a product, rejecting prices that are negative or not finite.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: f64,
        in_stock: bool,
    ) -> DomainResult<Self> {
        if !price.is_finite() {
            return Err(DomainError::validation(format!(
                "product {id}: price must be finite"
            )));
        }
        if price < 0.0 {
            return Err(DomainError::validation(format!(
                "product {id}: price must be non-negative (got {price})"
            )));
        }

        Ok(Self {
            id,
            name: name.into(),
            category,
            price,
            in_stock,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(r.id, r.name, r.category, r.price, r.in_stock)
    }
}

impl From<Product> for ProductRecord {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            price: p.price,
            in_stock: p.in_stock,
        }
    }
}
