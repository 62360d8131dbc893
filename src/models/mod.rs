mod brand;
mod product;
mod user;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use brand::Brand;
pub use product::Product;
pub use user::{LoginAttempt, LoginRequest, User};

/// Catalog identifier as it appears in the data files: either a JSON number
/// or a JSON string. Serialized back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogId {
    Number(serde_json::Number),
    Text(String),
}

impl CatalogId {
    /// Compares against a raw path segment.
    ///
    /// Text ids match only the identical string. Numeric ids match when the
    /// trimmed segment parses to the same number, so `"3"` and `" 3 "` both
    /// match `3`. An empty segment counts as `0`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            CatalogId::Text(text) => text == raw,
            CatalogId::Number(number) => {
                let trimmed = raw.trim();
                let parsed = if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                };
                matches!((number.as_f64(), parsed), (Some(a), Some(b)) if a == b)
            }
        }
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogId::Number(number) => write!(f, "{number}"),
            CatalogId::Text(text) => f.write_str(text),
        }
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

/// How a `product_name` query constrains `GET /brands`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductNameFilter<'a> {
    /// Absent, or given once with an empty value.
    None,
    Exact(&'a str),
    /// Given more than once. No product name can equal a list of names.
    Repeated,
}

/// Filters for `GET /brands`, built from the raw query pairs so that a
/// repeated key never fails extraction.
#[derive(Debug, Default)]
pub struct BrandFilters {
    pub product_name: Vec<String>,
}

impl BrandFilters {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let product_name = pairs
            .into_iter()
            .filter(|(key, _)| key == "product_name")
            .map(|(_, value)| value)
            .collect();
        Self { product_name }
    }

    pub fn product_name(&self) -> ProductNameFilter<'_> {
        match self.product_name.as_slice() {
            [] => ProductNameFilter::None,
            [name] if name.is_empty() => ProductNameFilter::None,
            [name] => ProductNameFilter::Exact(name.as_str()),
            _ => ProductNameFilter::Repeated,
        }
    }
}
