use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::info;

mod catalog;
mod config;
mod error;
mod handlers;
mod models;

use crate::catalog::Catalog;
use crate::config::Config;

/// Request headers browsers may send cross-origin.
const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept, X-Authentication";

/// Shared application state. The catalog is immutable once loaded, so a plain
/// `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_service=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // The listener is only bound once every data file has loaded.
    info!(dir = %config.data_dir.display(), "Loading catalog...");
    let catalog = Catalog::load(&config.data_dir).await?;

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server is listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(AllowHeaders::list([
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-authentication"),
        ]));

    Router::new()
        .route("/health", get(handlers::health))

        // ── Catalog ─────────────────────────────────────────────────────────
        .route("/brands", get(handlers::brands::list_brands))
        .route(
            "/brands/:brandId/products",
            get(handlers::brands::list_brand_products),
        )
        .route("/products", get(handlers::products::list_products))

        // ── Auth ────────────────────────────────────────────────────────────
        .route("/login", post(handlers::auth::login))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(cors)
        // CorsLayer only sends the allowed headers on preflight; the fixed
        // policy wants them on every response.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
