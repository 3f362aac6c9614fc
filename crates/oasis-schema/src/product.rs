//! # Products: Three-Facet Composition
//!
//! A [`Product`] is the conjunction of three independent facets:
//! [`BaseProduct`], [`InventoryItem`] and [`ShippingDetails`]. Each facet is
//! validated on its own against the same payload; the product is accepted
//! only when all three accept, and the errors of every failing facet are
//! reported together in facet order.
//!
//! The facets are flattened on output, so a product serializes as one
//! object holding the fields of all three.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use oasis_core::fields::float;
use oasis_core::{ErrorEntry, ObjectReader, Schema, ValidationErrors};

/// `XX123456`.
static PRODUCT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{6}$").expect("product id pattern is valid"));

/// `A-01-02`.
static WAREHOUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]-[0-9]{2}-[0-9]{2}$").expect("warehouse location pattern is valid")
});

pub const MAX_WEIGHT_KG: f64 = 1000.0;
pub const MAX_DIMENSION_CM: f64 = 300.0;

/// Identity and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BaseProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Stock keeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub stock_count: i64,
    pub warehouse_location: String,
    pub reorder_point: i64,
}

/// Physical handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShippingDetails {
    pub weight_kg: f64,
    /// Length, width, height.
    #[schema(value_type = Vec<f64>, min_items = 3, max_items = 3)]
    pub dimensions_cm: [f64; 3],
    pub fragile: bool,
}

/// A product satisfying all three facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseProduct,
    #[serde(flatten)]
    pub inventory: InventoryItem,
    #[serde(flatten)]
    pub shipping: ShippingDetails,
}

/// Figures derived from an accepted product. None are rounded.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductMetrics {
    pub volume_m3: f64,
    /// `None` when the volume underflows to zero.
    pub density_kg_m3: Option<f64>,
    pub reorder_value: f64,
}

impl Schema for BaseProduct {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let id = errors.collect(
            fields
                .required_str("id")
                .and_then(|f| f.matches(&PRODUCT_ID_RE)),
        );
        let name = errors.collect(
            fields
                .required_str("name")
                .and_then(|f| f.min_len(1))
                .and_then(|f| f.max_len(100)),
        );
        let price = errors.collect(fields.required_f64("price").and_then(|f| f.gt(0.0)));

        let (Some(id), Some(name), Some(price)) = (id, name, price) else {
            return Err(errors);
        };
        Ok(Self {
            id: id.into_inner().to_string(),
            name: name.into_inner().to_string(),
            price: price.into_inner(),
        })
    }
}

impl Schema for InventoryItem {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let stock_count = errors.collect(fields.required_i64("stock_count").and_then(|f| f.ge(0)));
        let warehouse_location = errors.collect(
            fields
                .required_str("warehouse_location")
                .and_then(|f| f.matches(&WAREHOUSE_RE)),
        );
        let reorder_point =
            errors.collect(fields.required_i64("reorder_point").and_then(|f| f.ge(0)));

        let (Some(stock_count), Some(warehouse_location), Some(reorder_point)) =
            (stock_count, warehouse_location, reorder_point)
        else {
            return Err(errors);
        };
        Ok(Self {
            stock_count: stock_count.into_inner(),
            warehouse_location: warehouse_location.into_inner().to_string(),
            reorder_point: reorder_point.into_inner(),
        })
    }
}

fn dimensions(fields: &ObjectReader<'_>) -> Result<[f64; 3], ValidationErrors> {
    let tuple = fields
        .required_tuple("dimensions_cm")
        .and_then(|f| f.exact_len(3))?;

    let mut errors = ValidationErrors::new();
    let mut dims = [0.0; 3];
    for (slot, (loc, raw)) in dims.iter_mut().zip(tuple.elements()) {
        let checked = float(loc, raw)
            .and_then(|f| f.gt(0.0))
            .and_then(|f| f.le(MAX_DIMENSION_CM));
        if let Some(value) = errors.collect(checked) {
            *slot = value.into_inner();
        }
    }
    errors.into_result(dims)
}

fn fragile(fields: &ObjectReader<'_>) -> Result<bool, ErrorEntry> {
    Ok(fields
        .optional_bool("fragile")?
        .is_some_and(|f| f.into_inner()))
}

impl Schema for ShippingDetails {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let weight_kg = errors.collect(
            fields
                .required_f64("weight_kg")
                .and_then(|f| f.gt(0.0))
                .and_then(|f| f.le(MAX_WEIGHT_KG)),
        );
        let dimensions_cm = errors.absorb(dimensions(fields));
        let fragile = errors.collect(fragile(fields));

        let (Some(weight_kg), Some(dimensions_cm), Some(fragile)) =
            (weight_kg, dimensions_cm, fragile)
        else {
            return Err(errors);
        };
        Ok(Self {
            weight_kg: weight_kg.into_inner(),
            dimensions_cm,
            fragile,
        })
    }
}

impl Schema for Product {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let base = errors.absorb(BaseProduct::from_fields(fields));
        let inventory = errors.absorb(InventoryItem::from_fields(fields));
        let shipping = errors.absorb(ShippingDetails::from_fields(fields));

        let (Some(base), Some(inventory), Some(shipping)) = (base, inventory, shipping) else {
            return Err(errors);
        };
        Ok(Self {
            base,
            inventory,
            shipping,
        })
    }
}

impl Product {
    pub fn volume_m3(&self) -> f64 {
        let [length, width, height] = self.shipping.dimensions_cm;
        length * width * height / 1_000_000.0
    }

    pub fn metrics(&self) -> ProductMetrics {
        let volume_m3 = self.volume_m3();
        ProductMetrics {
            volume_m3,
            density_kg_m3: (volume_m3 > 0.0).then(|| self.shipping.weight_kg / volume_m3),
            reorder_value: self.inventory.reorder_point as f64 * self.base.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oasis_core::{ErrorType, Loc};
    use serde_json::{json, Value};

    fn valid_payload() -> Value {
        json!({
            "id": "AB123456",
            "name": "Desk Lamp",
            "price": 25.5,
            "stock_count": 10,
            "warehouse_location": "A-01-02",
            "reorder_point": 4,
            "weight_kg": 1.5,
            "dimensions_cm": [30, 20, 10]
        })
    }

    #[test]
    fn valid_product_flattens_facets() {
        let product = Product::validate(&valid_payload(), Loc::body()).unwrap();
        assert!(!product.shipping.fragile);
        let out = serde_json::to_value(&product).unwrap();
        assert_eq!(out["id"], "AB123456");
        assert_eq!(out["warehouse_location"], "A-01-02");
        assert_eq!(out["dimensions_cm"], json!([30.0, 20.0, 10.0]));
        assert_eq!(out["fragile"], false);
    }

    #[test]
    fn metrics_are_unrounded() {
        let product = Product::validate(&valid_payload(), Loc::body()).unwrap();
        let metrics = product.metrics();
        assert_eq!(metrics.volume_m3, 30.0 * 20.0 * 10.0 / 1_000_000.0);
        assert_eq!(metrics.density_kg_m3, Some(1.5 / metrics.volume_m3));
        assert_eq!(metrics.reorder_value, 4.0 * 25.5);
    }

    #[test]
    fn errors_from_every_facet_are_merged() {
        let mut payload = valid_payload();
        payload["id"] = json!("bad");
        payload["stock_count"] = json!(-1);
        payload["weight_kg"] = json!(0);
        let errors = Product::validate(&payload, Loc::body()).unwrap_err();
        let locs: Vec<String> = errors.iter().map(|e| e.loc.to_string()).collect();
        assert_eq!(locs, vec!["body.id", "body.stock_count", "body.weight_kg"]);
    }

    #[test]
    fn dimension_elements_are_checked_individually() {
        let mut payload = valid_payload();
        payload["dimensions_cm"] = json!([30, 301, "x"]);
        let errors = Product::validate(&payload, Loc::body()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.entries()[0].loc.to_string(), "body.dimensions_cm.1");
        assert_eq!(errors.entries()[0].error_type, ErrorType::LessThanEqual);
        assert_eq!(errors.entries()[1].loc.to_string(), "body.dimensions_cm.2");
        assert_eq!(errors.entries()[1].error_type, ErrorType::FloatParsing);
    }

    #[test]
    fn wrong_arity_is_reported_once() {
        let mut payload = valid_payload();
        payload["dimensions_cm"] = json!([30, 20]);
        let errors = Product::validate(&payload, Loc::body()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.entries()[0].error_type, ErrorType::TooShort);
    }

    #[test]
    fn empty_payload_reports_every_required_field() {
        let errors = Product::validate(&json!({}), Loc::body()).unwrap_err();
        assert_eq!(errors.len(), 8);
        assert!(errors.iter().all(|e| e.error_type == ErrorType::Missing));
    }

    #[test]
    fn vanishing_volume_has_no_density() {
        let mut payload = valid_payload();
        payload["dimensions_cm"] = json!([1e-200, 1e-200, 1e-200]);
        let product = Product::validate(&payload, Loc::body()).unwrap();
        let metrics = product.metrics();
        assert_eq!(metrics.volume_m3, 0.0);
        assert_eq!(metrics.density_kg_m3, None);
        let out = serde_json::to_value(&metrics).unwrap();
        assert_eq!(out["density_kg_m3"], Value::Null);
        assert_eq!(out["reorder_value"], json!(102.0));
    }
}
