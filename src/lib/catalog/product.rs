use crate::catalog::Money;
use serde::{Deserialize, Serialize};

/// A single catalog item assembled from one feed row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub picture: String,
    pub price_usd: Money,
    pub categories: Vec<String>,
}

impl Product {
    /// Assembles a product record from the raw fields of one feed row.
    ///
    /// Every scalar field is carried over verbatim, including malformed
    /// currency codes and out-of-range amounts. The categories field is split
    /// on commas, where an empty field produces no categories rather than a
    /// single empty one.
    pub fn from_row(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        picture: impl Into<String>,
        currency_code: impl Into<String>,
        categories: &str,
        units: i64,
        nanos: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            picture: picture.into(),
            price_usd: Money::new(currency_code, units, nanos),
            categories: split_categories(categories),
        }
    }
}

fn split_categories(value: &str) -> Vec<String> {
    match value.is_empty() {
        true => Vec::new(),
        false => value.split(',').map(String::from).collect(),
    }
}
