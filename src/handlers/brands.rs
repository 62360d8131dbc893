use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{error::AppResult, models::BrandFilters, AppState};

// ── GET /brands ───────────────────────────────────────────────────────────────

pub async fn list_brands(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let filters = BrandFilters::from_pairs(pairs);
    let listing = state.catalog.find_brands(&filters)?;

    info!(product_name = ?filters.product_name(), "Listed brands");

    Ok((StatusCode::OK, Json(serde_json::json!(listing))))
}

// ── GET /brands/:brandId/products ─────────────────────────────────────────────

pub async fn list_brand_products(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let products = state.catalog.find_products_by_brand(&brand_id)?;

    info!(brand_id = %brand_id, count = products.len(), "Listed brand products");

    Ok((StatusCode::OK, Json(serde_json::json!(products))))
}
