//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OASIS: OpenAPI Schema-Idiom Service",
        version = "0.1.0",
        description = "Discriminated unions (anyOf), strict variants (oneOf), facet composition (allOf), offset and cursor pagination, and verbosity-projected responses.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        // Composition
        crate::routes::pets::create_pet,
        crate::routes::shapes::create_shape,
        crate::routes::products::create_product,
        // Pagination
        crate::routes::offset_items::list_offset_items,
        crate::routes::cursor_items::list_cursor_items,
        // Projection
        crate::routes::laptops::get_laptop,
        crate::routes::laptops::list_laptops,
        // Operations
        crate::middleware::metrics::metrics_handler,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::Detail,
        oasis_core::ErrorEntry,
        oasis_core::ErrorType,
        oasis_core::LocItem,
        // Pets
        oasis_schema::Pet,
        oasis_schema::Cat,
        oasis_schema::Dog,
        oasis_schema::PetType,
        crate::routes::pets::PetCreated,
        // Shapes
        oasis_schema::Shape,
        oasis_schema::Rectangle,
        oasis_schema::Circle,
        oasis_schema::ShapeType,
        oasis_schema::ShapeMeasures,
        oasis_schema::ShapeValidationDetails,
        crate::routes::shapes::ShapeCreated,
        // Products
        oasis_schema::Product,
        oasis_schema::BaseProduct,
        oasis_schema::InventoryItem,
        oasis_schema::ShippingDetails,
        oasis_schema::ProductMetrics,
        crate::routes::products::ProductCreated,
        // Pagination
        crate::catalog::OffsetItem,
        crate::catalog::CursorItem,
        crate::routes::offset_items::OffsetItemsPage,
        crate::routes::cursor_items::CursorItemsPage,
        // Laptops
        oasis_schema::Verbosity,
        oasis_schema::LaptopMinimum,
        oasis_schema::LaptopRegular,
        oasis_schema::LaptopExtended,
        oasis_schema::LaptopView,
        // Operations
        crate::middleware::metrics::MetricsSnapshot,
    )),
    tags(
        (name = "pets", description = "anyOf: open discriminated union"),
        (name = "shapes", description = "oneOf: closed discriminated union with derived fields"),
        (name = "products", description = "allOf: three independently validated facets"),
        (name = "pagination", description = "Offset and cursor pagination"),
        (name = "laptops", description = "Verbosity-projected reads"),
        (name = "operations", description = "Service counters"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/pets/anyof",
            "/shapes/oneof",
            "/products/allof",
            "/offsetitems",
            "/cursoritems",
            "/laptops",
            "/laptops/{laptop_id}",
            "/metrics",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }

    #[test]
    fn document_registers_error_body() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.schemas.contains_key("ErrorBody"));
        assert!(components.schemas.contains_key("ErrorEntry"));
    }
}
