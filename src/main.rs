use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod config;
mod error;
mod handlers;
mod models;
mod redirect;
mod registry;
mod seed;

use crate::config::Config;
use crate::redirect::HttpsRedirect;
use crate::registry::ProductRegistry;

/// Shared application state — cheap to clone (the registry lives behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<ProductRegistry>>,
}

impl AppState {
    pub fn new(registry: ProductRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_registry=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let registry = ProductRegistry::seeded();
    info!(count = registry.len(), "Product registry seeded");

    match config.https_port {
        Some(port) => info!(https_port = port, "Redirecting plain HTTP requests to HTTPS"),
        None => warn!("HTTPS_PORT not set, HTTPS redirection is disabled"),
    }

    let app = build_router(AppState::new(registry), config.https_port);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, https_port: Option<u16>) -> Router {
    let mut router = Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Balance ─────────────────────────────────────────────────────────
        .route("/api/balance", get(handlers::get_balance))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/products/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    // ── Middleware ──────────────────────────────────────────────────────────
    if let Some(port) = https_port {
        router = router.layer(middleware::from_fn_with_state(
            HttpsRedirect::new(port),
            redirect::redirect_to_https,
        ));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
