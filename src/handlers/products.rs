use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::AppState;

// ── GET /products ─────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let products = state.catalog.list_products();

    info!(count = products.len(), "Listed products");

    (StatusCode::OK, Json(serde_json::json!(products)))
}
