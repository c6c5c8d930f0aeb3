use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use tracing::{debug, info};

use crate::{
    error::AppResult,
    models::{Product, UpdateProduct},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let registry = state.registry.read().await;
    debug!(count = registry.len(), "Listed products");
    Json(registry.list().to_vec())
}

// ── Create ────────────────────────────────────────────────────────────────────

/// A literal `null` body deserializes to `None` and is rejected by the
/// registry rather than by the extractor.
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<Option<Product>>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Product>)> {
    let product = state
        .registry
        .write()
        .await
        .create(payload)
        .inspect_err(|err| debug!(error = %err, "Rejected product creation"))?;

    info!(id = product.id, name = %product.name, "Created product");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, product.location())],
        Json(product),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let registry = state.registry.read().await;
    let product = registry
        .get(id)
        .inspect_err(|err| debug!(id, error = %err, "Product lookup failed"))?
        .clone();
    Ok(Json(product))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = state
        .registry
        .write()
        .await
        .update(id, payload)
        .inspect_err(|err| debug!(id, error = %err, "Rejected product update"))?;

    info!(id, name = %product.name, "Updated product");

    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<String> {
    let removed = state
        .registry
        .write()
        .await
        .delete(id)
        .inspect_err(|err| debug!(id, error = %err, "Rejected product deletion"))?;

    info!(id, name = %removed.name, "Deleted product");

    Ok(format!("Product with ID {} deleted", id))
}
