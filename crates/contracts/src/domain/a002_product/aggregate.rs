use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-wide product identifier (e.g. "fw-001")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_in_stock() -> bool {
    true
}

/// Read-only catalog entry.
///
/// Only `price`, `color`, `size` and `brand` take part in filtering; the rest
/// is display data for the product card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// One or more colour names separated by `/`, e.g. "Black/Grey"
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<Vec<String>>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl Product {
    /// Colour names encoded in `color`, trimmed, blanks skipped
    pub fn colors(&self) -> impl Iterator<Item = &str> + '_ {
        self.color
            .as_deref()
            .into_iter()
            .flat_map(|raw| raw.split('/'))
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn sizes(&self) -> &[String] {
        self.size.as_deref().unwrap_or(&[])
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Whole-percent markdown from `original_price`, if the product is discounted
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || original <= self.price {
            return None;
        }
        Some((((original - self.price) / original) * 100.0).round() as u32)
    }
}
