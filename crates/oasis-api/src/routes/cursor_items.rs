//! # Cursor Pagination
//!
//! Routes:
//! - GET /cursoritems?limit&cursor&direction: read up to `limit` items on
//!   one side of an opaque cursor.
//!
//! Tokens are produced by earlier responses. An undecodable token is 400;
//! a token naming no item is 404.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use oasis_core::{Loc, ObjectReader, ValidationErrors};
use oasis_paging::{cursor, CursorPage, Direction};

use crate::catalog::CursorItem;
use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_query, non_zero};
use crate::state::AppState;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Serialize, ToSchema)]
pub struct CursorItemsPage {
    pub items: Vec<CursorItem>,
    pub next_cursor: Option<String>,
    pub previous_cursor: Option<String>,
    pub total_count: usize,
}

impl From<CursorPage<CursorItem>> for CursorItemsPage {
    fn from(page: CursorPage<CursorItem>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            previous_cursor: page.previous_cursor,
            total_count: page.total_count,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct CursorParams {
    limit: NonZeroUsize,
    cursor: Option<String>,
    direction: Direction,
}

fn cursor_params(query: &Map<String, Value>) -> Result<CursorParams, ValidationErrors> {
    let fields = ObjectReader::for_query(query, Loc::query());
    let mut errors = ValidationErrors::new();
    let limit = errors.collect(fields.optional_i64("limit").and_then(|limit| {
        limit
            .map(|f| f.ge(1).and_then(|f| f.le(MAX_LIMIT)))
            .transpose()
    }));
    let cursor = errors.collect(fields.optional_str("cursor"));
    let direction = errors.collect(fields.optional_choice::<Direction>("direction"));
    let (Some(limit), Some(cursor), Some(direction)) = (limit, cursor, direction) else {
        return Err(errors);
    };
    Ok(CursorParams {
        limit: non_zero(limit.map_or(DEFAULT_LIMIT, |f| f.into_inner())),
        cursor: cursor.map(|f| f.into_inner().to_string()),
        direction: direction.map(|f| f.into_inner()).unwrap_or_default(),
    })
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new().route("/cursoritems", get(list_cursor_items))
}

// ── Handlers ────────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/cursoritems",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum items returned", minimum = 1, maximum = 100),
        ("cursor" = Option<String>, Query, description = "Token from a previous page"),
        ("direction" = Option<String>, Query, description = "`next` (default) or `previous`"),
    ),
    responses(
        (status = 200, description = "One page of items", body = CursorItemsPage),
        (status = 400, description = "Invalid cursor", body = ErrorBody),
        (status = 404, description = "Cursor not found", body = ErrorBody),
        (status = 422, description = "Parameter out of range", body = ErrorBody),
    ),
    tag = "pagination"
)]
pub async fn list_cursor_items(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<CursorItemsPage>, AppError> {
    let query = extract_query(query)?;
    let params = cursor_params(&query)?;
    let page = cursor::paginate(
        state.catalog.cursor_items(),
        params.limit,
        params.cursor.as_deref(),
        params.direction,
    )?;
    Ok(Json(page.into()))
}
