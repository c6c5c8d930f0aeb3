pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// Fixed account balance reported by `/api/balance`.
pub const BALANCE: f64 = 1500.75;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "product-registry" })))
}

pub async fn get_balance() -> Json<f64> {
    Json(BALANCE)
}
