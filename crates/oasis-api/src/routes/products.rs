//! # Products (allOf)
//!
//! Routes:
//! - POST /products/allof: validate base, inventory and shipping facets
//!   together and report derived metrics.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use oasis_schema::{Product, ProductMetrics};

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_validated;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCreated {
    pub message: String,
    pub product: Product,
    pub calculated_metrics: ProductMetrics,
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new().route("/products/allof", post(create_product))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /products/allof: accept a product satisfying all three facets.
#[utoipa::path(
    post,
    path = "/products/allof",
    request_body = Product,
    responses(
        (status = 200, description = "Product accepted", body = ProductCreated),
        (status = 400, description = "Malformed JSON", body = ErrorBody),
        (status = 422, description = "One or more facets failed", body = ErrorBody),
    ),
    tag = "products"
)]
pub async fn create_product(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProductCreated>, AppError> {
    let product: Product = extract_validated(body, "product")?;
    tracing::info!(product_id = %product.base.id, "product accepted");
    Ok(Json(ProductCreated {
        message: "Product created successfully".to_string(),
        calculated_metrics: product.metrics(),
        product,
    }))
}
