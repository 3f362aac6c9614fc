//! # Shapes (oneOf)
//!
//! Routes:
//! - POST /shapes/oneof: resolve a rectangle or a circle by `shape_type`.
//!
//! Circle `circumference` and `area` in the response are always derived
//! from `radius`.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use oasis_core::StrEnum;
use oasis_schema::{Shape, ShapeValidationDetails};

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_validated;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShapeCreated {
    pub message: String,
    pub shape: Shape,
    pub validation_details: ShapeValidationDetails,
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new().route("/shapes/oneof", post(create_shape))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /shapes/oneof: accept a shape, bare or as `{"shape": {...}}`.
#[utoipa::path(
    post,
    path = "/shapes/oneof",
    request_body = Shape,
    responses(
        (status = 200, description = "Shape accepted", body = ShapeCreated),
        (status = 400, description = "Malformed JSON", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody),
    ),
    tag = "shapes"
)]
pub async fn create_shape(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ShapeCreated>, AppError> {
    let shape: Shape = extract_validated(body, "shape")?;
    tracing::info!(shape_type = %shape.shape_type().as_str(), "shape accepted");
    Ok(Json(ShapeCreated {
        message: shape.created_message(),
        validation_details: shape.validation_details(),
        shape,
    }))
}
