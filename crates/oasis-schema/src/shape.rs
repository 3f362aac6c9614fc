//! # Shapes: Closed Discriminated Union
//!
//! A shape is a [`Rectangle`] or a [`Circle`], selected by `shape_type`.
//! Unlike pets, both variants are closed: a field the variant does not
//! declare fails with `extra_forbidden`.
//!
//! Validation runs in two stages. The variant stage checks each field and
//! reports every failure under `<loc>.<tag>.<field>`. Only when it passes
//! does the shape stage apply the cross-field rules (aspect ratio, maximum
//! area), reported once at the shape's own location.
//!
//! A circle's `circumference` and `area` are always derived from `radius`.
//! Values sent by the client are accepted as keys and otherwise ignored.

use std::f64::consts::PI;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use oasis_core::{
    union, DiscriminatedUnion, ErrorEntry, ObjectReader, Schema, StrEnum, ValidationErrors,
};

/// `#RRGGBB`.
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("color pattern is valid"));

pub const MAX_SIDE: f64 = 1000.0;
pub const MAX_RADIUS: f64 = 500.0;
pub const MAX_ASPECT_RATIO: f64 = 10.0;
pub const MAX_CIRCLE_AREA: f64 = 785_000.0;
const MAX_DECIMALS: usize = 2;

/// The `shape_type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Circle,
}

impl StrEnum for ShapeType {
    const VARIANTS: &'static [Self] = &[Self::Rectangle, Self::Circle];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rectangle {
    pub color: Option<String>,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// As supplied by the client; never derived.
    pub aspect_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Circle {
    pub color: Option<String>,
    pub name: String,
    pub radius: f64,
    pub circumference: f64,
    pub area: f64,
}

impl Circle {
    /// A circle with its derived properties computed from `radius`.
    pub fn from_radius(color: Option<String>, name: String, radius: f64) -> Self {
        Self {
            color,
            name,
            radius,
            circumference: 2.0 * PI * radius,
            area: PI * radius * radius,
        }
    }
}

/// A validated shape, serialized with its `shape_type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "shape_type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

/// Variant-specific figures reported alongside an accepted shape.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ShapeMeasures {
    Rectangle { aspect_ratio: Option<f64>, area: f64 },
    Circle { circumference: f64, area: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ShapeValidationDetails {
    pub valid_color: bool,
    pub dimensions_within_limits: bool,
    #[serde(flatten)]
    pub measures: ShapeMeasures,
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Rectangle(_) => ShapeType::Rectangle,
            Self::Circle(_) => ShapeType::Circle,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Rectangle(r) => r.color.as_deref(),
            Self::Circle(c) => c.color.as_deref(),
        }
    }

    /// e.g. `"Circle created successfully"`.
    pub fn created_message(&self) -> String {
        let label = match self.shape_type() {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Circle => "Circle",
        };
        format!("{label} created successfully")
    }

    pub fn validation_details(&self) -> ShapeValidationDetails {
        let measures = match self {
            Self::Rectangle(r) => ShapeMeasures::Rectangle {
                aspect_ratio: r.aspect_ratio,
                area: round_to(r.width * r.height, 2),
            },
            Self::Circle(c) => ShapeMeasures::Circle {
                circumference: c.circumference,
                area: c.area,
            },
        };
        ShapeValidationDetails {
            valid_color: self.color().map_or(true, |color| color.starts_with('#')),
            dimensions_within_limits: true,
            measures,
        }
    }

    /// Cross-field rules that only apply once every field is valid.
    fn check_proportions(&self) -> Result<(), &'static str> {
        match self {
            Self::Rectangle(r) => {
                let ratio = r.width.max(r.height) / r.width.min(r.height);
                if ratio > MAX_ASPECT_RATIO {
                    return Err("Rectangle aspect ratio cannot exceed 10:1");
                }
            }
            Self::Circle(c) => {
                if c.area > MAX_CIRCLE_AREA {
                    return Err("Circle area exceeds maximum allowed size");
                }
            }
        }
        Ok(())
    }
}

fn shape_color(fields: &ObjectReader<'_>) -> Result<Option<String>, ErrorEntry> {
    Ok(fields
        .optional_str("color")?
        .map(|f| f.matches(&COLOR_RE))
        .transpose()?
        .map(|f| f.into_inner().to_string()))
}

fn shape_name(fields: &ObjectReader<'_>) -> Result<String, ErrorEntry> {
    fields
        .required_str("name")
        .and_then(|f| f.min_len(1))
        .and_then(|f| f.max_len(50))
        .map(|f| f.into_inner().to_string())
}

fn dimension(fields: &ObjectReader<'_>, name: &str, max: f64) -> Result<f64, ErrorEntry> {
    fields
        .required_f64(name)
        .and_then(|f| f.gt(0.0))
        .and_then(|f| f.le(max))
        .and_then(|f| f.max_decimal_places(MAX_DECIMALS))
        .map(|f| f.into_inner())
}

const RECTANGLE_FIELDS: &[&str] = &["shape_type", "color", "name", "width", "height", "aspect_ratio"];
const CIRCLE_FIELDS: &[&str] = &["shape_type", "color", "name", "radius", "circumference", "area"];

impl Schema for Rectangle {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let color = errors.collect(shape_color(fields));
        let name = errors.collect(shape_name(fields));
        let width = errors.collect(dimension(fields, "width", MAX_SIDE));
        let height = errors.collect(dimension(fields, "height", MAX_SIDE));
        let aspect_ratio = errors.collect(
            fields
                .optional_f64("aspect_ratio")
                .map(|f| f.map(|f| f.into_inner())),
        );
        errors.extend(fields.forbid_extra(RECTANGLE_FIELDS));

        match (color, name, width, height, aspect_ratio) {
            (Some(color), Some(name), Some(width), Some(height), Some(aspect_ratio))
                if errors.is_empty() =>
            {
                Ok(Self {
                    color,
                    name,
                    width,
                    height,
                    aspect_ratio,
                })
            }
            _ => Err(errors),
        }
    }
}

impl Schema for Circle {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let color = errors.collect(shape_color(fields));
        let name = errors.collect(shape_name(fields));
        let radius = errors.collect(dimension(fields, "radius", MAX_RADIUS));
        errors.extend(fields.forbid_extra(CIRCLE_FIELDS));

        match (color, name, radius) {
            (Some(color), Some(name), Some(radius)) if errors.is_empty() => {
                Ok(Self::from_radius(color, name, radius))
            }
            _ => Err(errors),
        }
    }
}

impl DiscriminatedUnion for Shape {
    type Tag = ShapeType;
    const DISCRIMINATOR: &'static str = "shape_type";

    fn validate_variant(tag: ShapeType, fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        match tag {
            ShapeType::Rectangle => Rectangle::from_fields(fields).map(Self::Rectangle),
            ShapeType::Circle => Circle::from_fields(fields).map(Self::Circle),
        }
    }
}

impl Schema for Shape {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let shape: Shape = union::resolve(fields)?;
        shape.check_proportions().map_err(|reason| {
            ErrorEntry::value_error(fields.loc().clone(), fields.to_value(), reason)
        })?;
        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oasis_core::{ErrorType, Loc};
    use serde_json::json;

    fn validate(payload: serde_json::Value) -> Result<Shape, ValidationErrors> {
        Shape::validate(&payload, Loc::body().child("shape"))
    }

    #[test]
    fn negative_radius_is_greater_than_zero_violation() {
        let errors = validate(json!({"shape_type": "circle", "name": "c", "radius": -10})).unwrap_err();
        assert_eq!(errors.len(), 1);
        let entry = &errors.entries()[0];
        assert_eq!(entry.error_type, ErrorType::GreaterThan);
        assert_eq!(entry.loc.to_string(), "body.shape.circle.radius");
        assert_eq!(entry.ctx_value("gt"), Some(&json!(0)));
        assert_eq!(entry.input, json!(-10));
    }

    #[test]
    fn zero_width_is_rejected() {
        let errors = validate(json!({"shape_type": "rectangle", "name": "r", "width": 0, "height": 5}))
            .unwrap_err();
        assert_eq!(errors.entries()[0].error_type, ErrorType::GreaterThan);
    }

    #[test]
    fn circle_derives_properties_ignoring_client_values() {
        let shape = validate(json!({
            "shape_type": "circle",
            "name": "c",
            "radius": 2,
            "area": 1,
            "circumference": 1
        }))
        .unwrap();
        let Shape::Circle(circle) = &shape else {
            panic!("expected a circle");
        };
        assert_eq!(circle.area, PI * 4.0);
        assert_eq!(circle.circumference, 4.0 * PI);
    }

    #[test]
    fn closed_variants_reject_extra_fields() {
        let errors = validate(json!({
            "shape_type": "circle",
            "name": "c",
            "radus": -10
        }))
        .unwrap_err();
        let types: Vec<ErrorType> = errors.iter().map(|e| e.error_type).collect();
        assert_eq!(types, vec![ErrorType::Missing, ErrorType::ExtraForbidden]);
        assert_eq!(errors.entries()[1].loc.to_string(), "body.shape.circle.radus");
    }

    #[test]
    fn rectangle_keeps_client_aspect_ratio() {
        let shape = validate(json!({
            "shape_type": "rectangle",
            "name": "r",
            "width": 4,
            "height": 2
        }))
        .unwrap();
        let details = serde_json::to_value(shape.validation_details()).unwrap();
        assert_eq!(
            details,
            json!({
                "valid_color": true,
                "dimensions_within_limits": true,
                "aspect_ratio": null,
                "area": 8.0
            })
        );
    }

    #[test]
    fn narrow_rectangle_fails_cross_field_check() {
        let errors = validate(json!({
            "shape_type": "rectangle",
            "name": "strip",
            "width": 1000,
            "height": 5
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        let entry = &errors.entries()[0];
        assert_eq!(entry.error_type, ErrorType::ValueError);
        assert_eq!(entry.loc.to_string(), "body.shape");
        assert_eq!(entry.msg, "Value error, Rectangle aspect ratio cannot exceed 10:1");
    }

    #[test]
    fn oversized_circle_fails_cross_field_check() {
        let errors = validate(json!({"shape_type": "circle", "name": "big", "radius": 499.99}))
            .unwrap_err();
        assert_eq!(errors.entries()[0].msg, "Value error, Circle area exceeds maximum allowed size");
    }

    #[test]
    fn color_and_name_rules() {
        let errors = validate(json!({
            "shape_type": "circle",
            "color": "red",
            "name": "",
            "radius": 1.234
        }))
        .unwrap_err();
        let types: Vec<ErrorType> = errors.iter().map(|e| e.error_type).collect();
        assert_eq!(
            types,
            vec![
                ErrorType::StringPatternMismatch,
                ErrorType::StringTooShort,
                ErrorType::ValueError
            ]
        );
    }

    #[test]
    fn created_message_names_variant() {
        let shape = validate(json!({"shape_type": "circle", "name": "c", "radius": 1})).unwrap();
        assert_eq!(shape.created_message(), "Circle created successfully");
        assert_eq!(serde_json::to_value(&shape).unwrap()["shape_type"], "circle");
    }
}
