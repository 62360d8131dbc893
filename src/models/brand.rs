use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CatalogId;

/// A seller or category that products are grouped under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: CatalogId,
    pub name: String,
    /// Any other fields from the data file, echoed back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
