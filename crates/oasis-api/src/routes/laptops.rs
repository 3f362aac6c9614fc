//! # Laptops (verbosity projection)
//!
//! Routes:
//! - GET /laptops/{laptop_id}?verbosity: one laptop cut to a tier.
//! - GET /laptops?verbosity&limit&offset: a window of the catalogue, each
//!   entry cut to the same tier.
//!
//! `verbosity` defaults to `regular`. It is validated before the laptop is
//! looked up, so a bad tier on an unknown id is 422, not 404.

use std::collections::HashMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Map, Value};

use oasis_core::{ErrorEntry, Loc, ObjectReader, StrEnum, ValidationErrors};
use oasis_paging::offset::slice_window;
use oasis_schema::{LaptopView, Project, Verbosity};

use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_query, non_negative, non_zero};
use crate::state::AppState;

pub const DEFAULT_LIMIT: i64 = 2;
pub const MAX_LIMIT: i64 = 100;

fn read_verbosity(fields: &ObjectReader<'_>) -> Result<Verbosity, ErrorEntry> {
    Ok(fields
        .optional_choice::<Verbosity>("verbosity")?
        .map(|f| f.into_inner())
        .unwrap_or_default())
}

#[derive(Debug)]
struct ListParams {
    verbosity: Verbosity,
    limit: usize,
    offset: usize,
}

fn list_params(query: &Map<String, Value>) -> Result<ListParams, ValidationErrors> {
    let fields = ObjectReader::for_query(query, Loc::query());
    let mut errors = ValidationErrors::new();
    let verbosity = errors.collect(read_verbosity(&fields));
    let limit = errors.collect(fields.optional_i64("limit").and_then(|limit| {
        limit
            .map(|f| f.ge(1).and_then(|f| f.le(MAX_LIMIT)))
            .transpose()
    }));
    let offset = errors.collect(
        fields
            .optional_i64("offset")
            .and_then(|offset| offset.map(|f| f.ge(0)).transpose()),
    );
    let (Some(verbosity), Some(limit), Some(offset)) = (verbosity, limit, offset) else {
        return Err(errors);
    };
    Ok(ListParams {
        verbosity,
        limit: non_zero(limit.map_or(DEFAULT_LIMIT, |f| f.into_inner())).get(),
        offset: non_negative(offset.map_or(0, |f| f.into_inner())),
    })
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/laptops", get(list_laptops))
        .route("/laptops/{laptop_id}", get(get_laptop))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /laptops/{laptop_id}: one laptop at the requested tier.
#[utoipa::path(
    get,
    path = "/laptops/{laptop_id}",
    params(
        ("laptop_id" = String, Path, description = "Laptop identifier, e.g. LP123456"),
        ("verbosity" = Option<Verbosity>, Query, description = "Response tier"),
    ),
    responses(
        (status = 200, description = "Projected laptop", body = LaptopView),
        (status = 404, description = "Laptop not found", body = ErrorBody),
        (status = 422, description = "Unknown verbosity", body = ErrorBody),
    ),
    tag = "laptops"
)]
pub async fn get_laptop(
    State(state): State<AppState>,
    Path(laptop_id): Path<String>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<LaptopView>, AppError> {
    let query = extract_query(query)?;
    let tier = read_verbosity(&ObjectReader::for_query(&query, Loc::query()))?;
    let laptop = state
        .catalog
        .laptop(&laptop_id)
        .ok_or_else(|| AppError::NotFound("Laptop not found".to_string()))?;
    tracing::debug!(%laptop_id, verbosity = tier.as_str(), "laptop projected");
    Ok(Json(laptop.project(tier)))
}

/// GET /laptops: a window of the catalogue at the requested tier.
#[utoipa::path(
    get,
    path = "/laptops",
    params(
        ("verbosity" = Option<Verbosity>, Query, description = "Response tier"),
        ("limit" = Option<i64>, Query, description = "Maximum laptops returned", minimum = 1, maximum = 100),
        ("offset" = Option<i64>, Query, description = "Laptops to skip", minimum = 0),
    ),
    responses(
        (status = 200, description = "Projected laptops", body = Vec<LaptopView>),
        (status = 422, description = "Parameter invalid", body = ErrorBody),
    ),
    tag = "laptops"
)]
pub async fn list_laptops(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Vec<LaptopView>>, AppError> {
    let query = extract_query(query)?;
    let params = list_params(&query)?;
    let views = slice_window(state.catalog.laptops(), params.offset, params.limit)
        .iter()
        .map(|laptop| laptop.project(params.verbosity))
        .collect();
    Ok(Json(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oasis_core::ErrorType;
    use serde_json::json;

    fn query(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn list_defaults() {
        let params = list_params(&Map::new()).unwrap();
        assert_eq!(params.verbosity, Verbosity::Regular);
        assert_eq!(params.limit, 2);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn all_parameter_errors_are_reported() {
        let errors = list_params(&query(json!({
            "verbosity": "full",
            "limit": "0",
            "offset": "-1"
        })))
        .unwrap_err();
        let types: Vec<ErrorType> = errors.iter().map(|e| e.error_type).collect();
        assert_eq!(
            types,
            [ErrorType::Enum, ErrorType::GreaterThanEqual, ErrorType::GreaterThanEqual]
        );
    }

    #[test]
    fn verbosity_parses_each_tier() {
        for tier in Verbosity::VARIANTS {
            let map = query(json!({"verbosity": tier.as_str()}));
            let reader = ObjectReader::for_query(&map, Loc::query());
            assert_eq!(read_verbosity(&reader).unwrap(), *tier);
        }
    }
}
