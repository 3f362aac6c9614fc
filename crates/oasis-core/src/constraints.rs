//! # Field Constraints
//!
//! Chainable checks on a read [`Field`]. Each check consumes the field and
//! returns it unchanged on success, so a field declaration reads as one
//! expression:
//!
//! ```
//! # use oasis_core::{Loc, ObjectReader};
//! # let map = serde_json::json!({"radius": 5.0});
//! # let map = map.as_object().unwrap();
//! let reader = ObjectReader::new(map, Loc::body());
//! let radius = reader
//!     .required_f64("radius")
//!     .and_then(|f| f.gt(0.0))
//!     .and_then(|f| f.le(500.0))
//!     .and_then(|f| f.max_decimal_places(2));
//! assert!(radius.is_ok());
//! ```

use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::error::{bound_value, ErrorEntry, ErrorType};
use crate::fields::Field;

/// A value that can be compared against a numeric bound.
pub trait Numeric: Copy + PartialOrd + fmt::Display {
    fn as_f64(self) -> f64;
}

impl Numeric for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

impl Numeric for i64 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

fn bound_text<T: Numeric>(bound: T) -> String {
    bound_value(bound.as_f64()).to_string()
}

impl<'a, T: Numeric> Field<'a, T> {
    /// Strictly greater than `bound`.
    pub fn gt(self, bound: T) -> Result<Self, ErrorEntry> {
        if *self.value() > bound {
            return Ok(self);
        }
        Err(self
            .reject(
                ErrorType::GreaterThan,
                format!("Input should be greater than {}", bound_text(bound)),
            )
            .with_ctx("gt", bound_value(bound.as_f64())))
    }

    /// Greater than or equal to `bound`.
    pub fn ge(self, bound: T) -> Result<Self, ErrorEntry> {
        if *self.value() >= bound {
            return Ok(self);
        }
        Err(self
            .reject(
                ErrorType::GreaterThanEqual,
                format!(
                    "Input should be greater than or equal to {}",
                    bound_text(bound)
                ),
            )
            .with_ctx("ge", bound_value(bound.as_f64())))
    }

    /// Less than or equal to `bound`.
    pub fn le(self, bound: T) -> Result<Self, ErrorEntry> {
        if *self.value() <= bound {
            return Ok(self);
        }
        Err(self
            .reject(
                ErrorType::LessThanEqual,
                format!(
                    "Input should be less than or equal to {}",
                    bound_text(bound)
                ),
            )
            .with_ctx("le", bound_value(bound.as_f64())))
    }
}

/// Digits after the decimal point in the shortest round-trip rendering.
pub fn decimal_places(value: f64) -> usize {
    if !value.is_finite() || value.fract() == 0.0 {
        return 0;
    }
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}

impl<'a> Field<'a, f64> {
    /// At most `places` digits after the decimal point.
    pub fn max_decimal_places(self, places: usize) -> Result<Self, ErrorEntry> {
        if decimal_places(*self.value()) <= places {
            return Ok(self);
        }
        let reason = format!("Maximum {places} decimal places allowed");
        Err(ErrorEntry::value_error(
            self.loc().clone(),
            self.raw().clone(),
            &reason,
        ))
    }
}

impl<'a> Field<'a, &'a str> {
    fn char_len(&self) -> usize {
        self.value().chars().count()
    }

    /// At least `min` characters.
    pub fn min_len(self, min: usize) -> Result<Self, ErrorEntry> {
        if self.char_len() >= min {
            return Ok(self);
        }
        let unit = if min == 1 { "character" } else { "characters" };
        Err(self
            .reject(
                ErrorType::StringTooShort,
                format!("String should have at least {min} {unit}"),
            )
            .with_ctx("min_length", min))
    }

    /// At most `max` characters.
    pub fn max_len(self, max: usize) -> Result<Self, ErrorEntry> {
        if self.char_len() <= max {
            return Ok(self);
        }
        let unit = if max == 1 { "character" } else { "characters" };
        Err(self
            .reject(
                ErrorType::StringTooLong,
                format!("String should have at most {max} {unit}"),
            )
            .with_ctx("max_length", max))
    }

    /// The whole string matches `pattern`. Anchor the pattern yourself.
    pub fn matches(self, pattern: &Regex) -> Result<Self, ErrorEntry> {
        if pattern.is_match(self.value()) {
            return Ok(self);
        }
        Err(self
            .reject(
                ErrorType::StringPatternMismatch,
                format!("String should match pattern '{}'", pattern.as_str()),
            )
            .with_ctx("pattern", pattern.as_str()))
    }
}

impl<'a> Field<'a, &'a [Value]> {
    /// Exactly `len` elements.
    pub fn exact_len(self, len: usize) -> Result<Self, ErrorEntry> {
        let actual = self.value().len();
        if actual == len {
            return Ok(self);
        }
        let unit = if len == 1 { "item" } else { "items" };
        let entry = if actual < len {
            self.reject(
                ErrorType::TooShort,
                format!("Tuple should have at least {len} {unit} after validation, not {actual}"),
            )
            .with_ctx("min_length", len)
        } else {
            self.reject(
                ErrorType::TooLong,
                format!("Tuple should have at most {len} {unit} after validation, not {actual}"),
            )
            .with_ctx("max_length", len)
        };
        Err(entry
            .with_ctx("field_type", "Tuple")
            .with_ctx("actual_length", actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Loc;
    use serde_json::json;

    fn float_field(raw: &Value) -> Field<'_, f64> {
        crate::fields::float(Loc::body().child("x"), raw).unwrap()
    }

    #[test]
    fn gt_reports_integral_bound() {
        let raw = json!(-10);
        let err = float_field(&raw).gt(0.0).unwrap_err();
        assert_eq!(err.error_type, ErrorType::GreaterThan);
        assert_eq!(err.msg, "Input should be greater than 0");
        assert_eq!(err.ctx_value("gt"), Some(&json!(0)));
        assert_eq!(err.input, json!(-10));
    }

    #[test]
    fn gt_rejects_equal_value() {
        let raw = json!(0);
        assert!(float_field(&raw).gt(0.0).is_err());
    }

    #[test]
    fn le_and_ge_are_inclusive() {
        let raw = json!(1000);
        assert!(float_field(&raw).le(1000.0).is_ok());
        assert!(float_field(&raw).ge(1000.0).is_ok());
        let over = json!(1000.5);
        let err = float_field(&over).le(1000.0).unwrap_err();
        assert_eq!(err.error_type, ErrorType::LessThanEqual);
        assert_eq!(err.msg, "Input should be less than or equal to 1000");
    }

    #[test]
    fn integer_bounds() {
        let raw = json!(0);
        let field = crate::fields::integer(Loc::query().child("page"), &raw).unwrap();
        let err = field.ge(1).unwrap_err();
        assert_eq!(err.ctx_value("ge"), Some(&json!(1)));
        assert_eq!(err.loc.to_string(), "query.page");
    }

    #[test]
    fn decimal_places_counts_rendered_digits() {
        assert_eq!(decimal_places(10.0), 0);
        assert_eq!(decimal_places(10.25), 2);
        assert_eq!(decimal_places(10.255), 3);
        assert_eq!(decimal_places(0.1 + 0.2), 17);
    }

    #[test]
    fn too_many_decimals_is_value_error() {
        let raw = json!(5.123);
        let err = float_field(&raw).max_decimal_places(2).unwrap_err();
        assert_eq!(err.error_type, ErrorType::ValueError);
        assert_eq!(err.msg, "Value error, Maximum 2 decimal places allowed");
    }

    #[test]
    fn string_lengths_count_characters() {
        let raw = json!("");
        let field = crate::fields::string(Loc::body().child("name"), &raw).unwrap();
        let err = field.min_len(1).unwrap_err();
        assert_eq!(err.msg, "String should have at least 1 character");
        assert_eq!(err.ctx_value("min_length"), Some(&json!(1)));

        let raw = json!("ééé");
        let field = crate::fields::string(Loc::body().child("name"), &raw).unwrap();
        assert!(field.max_len(3).is_ok());
    }

    #[test]
    fn pattern_mismatch_names_pattern() {
        let pattern = Regex::new(r"^[A-Z]{3}-\d{6}$").unwrap();
        let raw = json!("abc-1");
        let field = crate::fields::string(Loc::body().child("sku"), &raw).unwrap();
        let err = field.matches(&pattern).unwrap_err();
        assert_eq!(err.error_type, ErrorType::StringPatternMismatch);
        assert_eq!(err.ctx_value("pattern"), Some(&json!(r"^[A-Z]{3}-\d{6}$")));
    }

    #[test]
    fn tuple_length_mismatch() {
        let raw = json!([1, 2]);
        let field = crate::fields::tuple(Loc::body().child("dims"), &raw).unwrap();
        let err = field.exact_len(3).unwrap_err();
        assert_eq!(err.error_type, ErrorType::TooShort);
        assert_eq!(
            err.msg,
            "Tuple should have at least 3 items after validation, not 2"
        );
        assert_eq!(err.ctx_value("actual_length"), Some(&json!(2)));

        let raw = json!([1, 2, 3, 4]);
        let field = crate::fields::tuple(Loc::body().child("dims"), &raw).unwrap();
        assert_eq!(field.exact_len(3).unwrap_err().error_type, ErrorType::TooLong);
    }
}
