pub mod auth;
pub mod brands;
pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let (brands, products, users) = state.catalog.sizes();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "catalog-service",
            "brands": brands,
            "products": products,
            "users": users,
            "loaded_at": state.catalog.loaded_at().to_rfc3339(),
        })),
    )
}
