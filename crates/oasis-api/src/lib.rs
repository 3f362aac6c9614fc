//! # oasis-api: Axum API Service
//!
//! HTTP surface over the OASIS validation and pagination crates:
//!
//! | Path | Idiom |
//! |---|---|
//! | `POST /pets/anyof` | discriminated union, open variants |
//! | `POST /shapes/oneof` | discriminated union, closed variants, derived fields |
//! | `POST /products/allof` | composition of three facets |
//! | `GET /offsetitems` | page/size pagination |
//! | `GET /cursoritems` | opaque cursor pagination |
//! | `GET /laptops`, `GET /laptops/{laptop_id}` | verbosity projection |
//!
//! Plus `/health/liveness`, `/health/readiness`, `/metrics` and
//! `/openapi.json`.
//!
//! ## Error Bodies
//!
//! Every failure is `{"detail": ...}`: a list of structured entries for
//! 422, a message for 400, 404 and 500. See [`error::AppError`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Extension, Router};

use crate::middleware::metrics::{metrics_handler, metrics_middleware, ApiMetrics};
use crate::state::AppState;

/// Build the complete application router.
///
/// Health probes sit outside the metrics and tracing layers.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::pets::router())
        .merge(routes::shapes::router())
        .merge(routes::products::router())
        .merge(routes::offset_items::router())
        .merge(routes::cursor_items::router())
        .merge(routes::laptops::router())
        .merge(openapi::router())
        .route("/metrics", get(metrics_handler))
        .layer(from_fn(metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

async fn liveness() -> &'static str {
    "ok"
}

async fn readiness() -> &'static str {
    "ready"
}
