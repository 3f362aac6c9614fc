//! # Offset Pagination
//!
//! Routes:
//! - GET /offsetitems?page&size: one page of the 25 generated items.
//!
//! Both parameters are required. A page past the end is empty, not an error.

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
use oasis_paging::{offset, OffsetPage};

use crate::catalog::OffsetItem;
use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_query, non_zero};
use crate::state::AppState;

pub const MAX_PAGE_SIZE: i64 = 50;

#[derive(Debug, Serialize, ToSchema)]
pub struct OffsetItemsPage {
    pub items: Vec<OffsetItem>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
}

impl From<OffsetPage<OffsetItem>> for OffsetItemsPage {
    fn from(page: OffsetPage<OffsetItem>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            size: page.size,
            total_pages: page.total_pages,
        }
    }
}

/// Validated `page` and `size`.
fn page_params(query: &Map<String, Value>) -> Result<(NonZeroUsize, NonZeroUsize), ValidationErrors> {
    let fields = ObjectReader::for_query(query, Loc::query());
    let mut errors = ValidationErrors::new();
    let page = errors.collect(fields.required_i64("page").and_then(|f| f.ge(1)));
    let size = errors.collect(
        fields
            .required_i64("size")
            .and_then(|f| f.ge(1))
            .and_then(|f| f.le(MAX_PAGE_SIZE)),
    );
    let (Some(page), Some(size)) = (page, size) else {
        return Err(errors);
    };
    Ok((non_zero(page.into_inner()), non_zero(size.into_inner())))
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new().route("/offsetitems", get(list_offset_items))
}

// ── Handlers ────────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/offsetitems",
    params(
        ("page" = i64, Query, description = "1-based page number", minimum = 1),
        ("size" = i64, Query, description = "Items per page", minimum = 1, maximum = 50),
    ),
    responses(
        (status = 200, description = "One page of items", body = OffsetItemsPage),
        (status = 422, description = "Parameter out of range", body = ErrorBody),
    ),
    tag = "pagination"
)]
pub async fn list_offset_items(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<OffsetItemsPage>, AppError> {
    let query = extract_query(query)?;
    let (page, size) = page_params(&query)?;
    let page = offset::paginate(state.catalog.offset_items(), page, size);
    Ok(Json(page.into()))
}
