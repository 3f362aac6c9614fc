//! # Pets (anyOf)
//!
//! Routes:
//! - POST /pets/anyof: resolve a cat or a dog by `petType`.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use oasis_core::StrEnum;
use oasis_schema::Pet;

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_validated;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PetCreated {
    pub message: String,
    pub pet: Pet,
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new().route("/pets/anyof", post(create_pet))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /pets/anyof: accept a pet, bare or as `{"pet": {...}}`.
#[utoipa::path(
    post,
    path = "/pets/anyof",
    request_body = Pet,
    responses(
        (status = 200, description = "Pet accepted", body = PetCreated),
        (status = 400, description = "Malformed JSON", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody),
    ),
    tag = "pets"
)]
pub async fn create_pet(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PetCreated>, AppError> {
    let pet: Pet = extract_validated(body, "pet")?;
    tracing::info!(pet_type = %pet.pet_type().as_str(), "pet accepted");
    Ok(Json(PetCreated {
        message: "Pet added successfully".to_string(),
        pet,
    }))
}
