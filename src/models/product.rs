use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CatalogId;

/// A sellable item. `category_id` points at a brand id but is never enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: CatalogId,
    pub name: String,
    #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CatalogId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn belongs_to(&self, brand_id: &str) -> bool {
        self.category_id
            .as_ref()
            .is_some_and(|category| category.matches(brand_id))
    }
}
