//! # Payload Field Reader
//!
//! [`ObjectReader`] reads typed fields out of a JSON object and reports the
//! presence and type failures as [`ErrorEntry`] values located under the
//! reader's [`Loc`]. Successful reads yield a [`Field`], which carries the
//! location and the raw input so that later constraint checks (see
//! [`crate::constraints`]) can report failures in the same shape.
//!
//! Coercion is lax in the way an HTTP query string requires: numeric and
//! boolean fields also accept their string spellings (`"10"`, `"true"`).
//! Optional fields treat an explicit `null` the same as an absent key.

use serde_json::{Map, Value};

use crate::choice::StrEnum;
use crate::error::{ErrorEntry, ErrorType, Loc, LocItem, ValidationErrors};

/// Where the object being read came from. Decides what a `missing`
/// entry reports as its `input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Body,
    Query,
}

/// Typed, location-aware reader over one JSON object.
#[derive(Debug, Clone)]
pub struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    loc: Loc,
    source: Source,
}

impl<'a> ObjectReader<'a> {
    /// Reader over a request body object.
    pub fn new(object: &'a Map<String, Value>, loc: Loc) -> Self {
        Self {
            object,
            loc,
            source: Source::Body,
        }
    }

    /// Reader over query parameters. Missing parameters report a `null` input.
    pub fn for_query(object: &'a Map<String, Value>, loc: Loc) -> Self {
        Self {
            object,
            loc,
            source: Source::Query,
        }
    }

    /// Reader over an arbitrary value, which must be an object.
    pub fn from_value(value: &'a Value, loc: Loc) -> Result<Self, ValidationErrors> {
        match value {
            Value::Object(object) => Ok(Self::new(object, loc)),
            other => Err(ErrorEntry::model_attributes_type(loc, other.clone()).into()),
        }
    }

    /// A reader over the same object, located one segment deeper.
    ///
    /// Union variants use this to place their field errors under the tag.
    pub fn nested(&self, segment: impl Into<LocItem>) -> Self {
        Self {
            object: self.object,
            loc: self.loc.child(segment),
            source: self.source,
        }
    }

    pub fn loc(&self) -> &Loc {
        &self.loc
    }

    pub fn object(&self) -> &'a Map<String, Value> {
        self.object
    }

    /// The whole object as an owned value, for use as an error `input`.
    pub fn to_value(&self) -> Value {
        Value::Object(self.object.clone())
    }

    pub fn field_loc(&self, name: &str) -> Loc {
        self.loc.child(name)
    }

    /// Raw lookup, `null` included.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.object.get(name)
    }

    fn missing(&self, name: &str) -> ErrorEntry {
        let input = match self.source {
            Source::Body => self.to_value(),
            Source::Query => Value::Null,
        };
        ErrorEntry::missing(self.field_loc(name), input)
    }

    fn required<T>(
        &self,
        name: &str,
        convert: impl FnOnce(Loc, &'a Value) -> Result<Field<'a, T>, ErrorEntry>,
    ) -> Result<Field<'a, T>, ErrorEntry> {
        match self.object.get(name) {
            Some(raw) => convert(self.field_loc(name), raw),
            None => Err(self.missing(name)),
        }
    }

    fn optional<T>(
        &self,
        name: &str,
        convert: impl FnOnce(Loc, &'a Value) -> Result<Field<'a, T>, ErrorEntry>,
    ) -> Result<Option<Field<'a, T>>, ErrorEntry> {
        match self.object.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => convert(self.field_loc(name), raw).map(Some),
        }
    }

    pub fn required_str(&self, name: &str) -> Result<Field<'a, &'a str>, ErrorEntry> {
        self.required(name, string)
    }

    pub fn optional_str(&self, name: &str) -> Result<Option<Field<'a, &'a str>>, ErrorEntry> {
        self.optional(name, string)
    }

    pub fn required_f64(&self, name: &str) -> Result<Field<'a, f64>, ErrorEntry> {
        self.required(name, float)
    }

    pub fn optional_f64(&self, name: &str) -> Result<Option<Field<'a, f64>>, ErrorEntry> {
        self.optional(name, float)
    }

    pub fn required_i64(&self, name: &str) -> Result<Field<'a, i64>, ErrorEntry> {
        self.required(name, integer)
    }

    pub fn optional_i64(&self, name: &str) -> Result<Option<Field<'a, i64>>, ErrorEntry> {
        self.optional(name, integer)
    }

    pub fn required_bool(&self, name: &str) -> Result<Field<'a, bool>, ErrorEntry> {
        self.required(name, boolean)
    }

    pub fn optional_bool(&self, name: &str) -> Result<Option<Field<'a, bool>>, ErrorEntry> {
        self.optional(name, boolean)
    }

    pub fn required_tuple(&self, name: &str) -> Result<Field<'a, &'a [Value]>, ErrorEntry> {
        self.required(name, tuple)
    }

    pub fn optional_choice<T: StrEnum>(
        &self,
        name: &str,
    ) -> Result<Option<Field<'a, T>>, ErrorEntry> {
        self.optional(name, choice::<T>)
    }

    /// Reject every key not named in `allowed`, in object order.
    pub fn forbid_extra(&self, allowed: &[&str]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (key, value) in self.object {
            if !allowed.contains(&key.as_str()) {
                errors.push(ErrorEntry::extra_forbidden(
                    self.field_loc(key),
                    value.clone(),
                ));
            }
        }
        errors
    }
}

/// A successfully read value together with where it came from.
#[derive(Debug, Clone)]
pub struct Field<'a, T> {
    loc: Loc,
    raw: &'a Value,
    value: T,
}

impl<'a, T> Field<'a, T> {
    pub fn new(loc: Loc, raw: &'a Value, value: T) -> Self {
        Self { loc, raw, value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn loc(&self) -> &Loc {
        &self.loc
    }

    /// The input exactly as received.
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<'a, U> {
        Field {
            loc: self.loc,
            raw: self.raw,
            value: f(self.value),
        }
    }

    /// Build an entry for this field with its location and raw input.
    pub fn reject(&self, error_type: ErrorType, msg: impl Into<String>) -> ErrorEntry {
        ErrorEntry::new(error_type, self.loc.clone(), msg, self.raw.clone())
    }
}

impl<'a> Field<'a, &'a [Value]> {
    /// Each element with its indexed location.
    pub fn elements(&self) -> impl Iterator<Item = (Loc, &'a Value)> + '_ {
        let items: &'a [Value] = self.value;
        items
            .iter()
            .enumerate()
            .map(move |(index, raw)| (self.loc.child(index), raw))
    }
}

fn type_error(error_type: ErrorType, loc: Loc, raw: &Value, msg: &str) -> ErrorEntry {
    ErrorEntry::new(error_type, loc, msg, raw.clone())
}

/// Read a string.
pub fn string(loc: Loc, raw: &Value) -> Result<Field<'_, &str>, ErrorEntry> {
    match raw {
        Value::String(s) => Ok(Field::new(loc, raw, s.as_str())),
        _ => Err(type_error(
            ErrorType::StringType,
            loc,
            raw,
            "Input should be a valid string",
        )),
    }
}

/// Read a number, accepting numeric strings.
pub fn float(loc: Loc, raw: &Value) -> Result<Field<'_, f64>, ErrorEntry> {
    match raw {
        Value::Number(n) => match n.as_f64() {
            Some(v) => Ok(Field::new(loc, raw, v)),
            None => Err(type_error(
                ErrorType::FloatType,
                loc,
                raw,
                "Input should be a valid number",
            )),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(Field::new(loc, raw, v)),
            Err(_) => Err(type_error(
                ErrorType::FloatParsing,
                loc,
                raw,
                "Input should be a valid number, unable to parse string as a number",
            )),
        },
        _ => Err(type_error(
            ErrorType::FloatType,
            loc,
            raw,
            "Input should be a valid number",
        )),
    }
}

/// Read an integer, accepting integral floats and integer strings.
pub fn integer(loc: Loc, raw: &Value) -> Result<Field<'_, i64>, ErrorEntry> {
    match raw {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(Field::new(loc, raw, v));
            }
            match n.as_f64() {
                Some(v) if v.fract() != 0.0 => Err(type_error(
                    ErrorType::IntFromFloat,
                    loc,
                    raw,
                    "Input should be a valid integer, got a number with a fractional part",
                )),
                Some(v) if v.abs() < i64::MAX as f64 => Ok(Field::new(loc, raw, v as i64)),
                _ => Err(type_error(
                    ErrorType::IntType,
                    loc,
                    raw,
                    "Input should be a valid integer",
                )),
            }
        }
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(v) => Ok(Field::new(loc, raw, v)),
            Err(_) => Err(type_error(
                ErrorType::IntParsing,
                loc,
                raw,
                "Input should be a valid integer, unable to parse string as an integer",
            )),
        },
        _ => Err(type_error(
            ErrorType::IntType,
            loc,
            raw,
            "Input should be a valid integer",
        )),
    }
}

/// Read a boolean, accepting the usual string and 0/1 spellings.
pub fn boolean(loc: Loc, raw: &Value) -> Result<Field<'_, bool>, ErrorEntry> {
    const UNINTERPRETABLE: &str = "Input should be a valid boolean, unable to interpret input";
    match raw {
        Value::Bool(b) => Ok(Field::new(loc, raw, *b)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(Field::new(loc, raw, true)),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(Field::new(loc, raw, false)),
            _ => Err(type_error(ErrorType::BoolParsing, loc, raw, UNINTERPRETABLE)),
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Ok(Field::new(loc, raw, true)),
            Some(0) => Ok(Field::new(loc, raw, false)),
            _ => Err(type_error(ErrorType::BoolParsing, loc, raw, UNINTERPRETABLE)),
        },
        _ => Err(type_error(
            ErrorType::BoolType,
            loc,
            raw,
            "Input should be a valid boolean",
        )),
    }
}

/// Read a fixed-arity sequence.
pub fn tuple(loc: Loc, raw: &Value) -> Result<Field<'_, &[Value]>, ErrorEntry> {
    match raw {
        Value::Array(items) => Ok(Field::new(loc, raw, items.as_slice())),
        _ => Err(type_error(
            ErrorType::TupleType,
            loc,
            raw,
            "Input should be a valid tuple",
        )),
    }
}

/// Read one literal of a closed set.
pub fn choice<T: StrEnum>(loc: Loc, raw: &Value) -> Result<Field<'_, T>, ErrorEntry> {
    match raw.as_str().and_then(T::parse_str) {
        Some(variant) => Ok(Field::new(loc, raw, variant)),
        None => {
            let expected = T::expected_choice();
            Err(ErrorEntry::new(
                ErrorType::Enum,
                loc,
                format!("Input should be {expected}"),
                raw.clone(),
            )
            .with_ctx("expected", expected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn missing_body_field_reports_enclosing_object() {
        let map = object(json!({"name": "Rex"}));
        let reader = ObjectReader::new(&map, Loc::body());
        let err = reader.required_f64("width").unwrap_err();
        assert_eq!(err.error_type, ErrorType::Missing);
        assert_eq!(err.loc.to_string(), "body.width");
        assert_eq!(err.input, json!({"name": "Rex"}));
    }

    #[test]
    fn missing_query_field_reports_null() {
        let map = object(json!({}));
        let reader = ObjectReader::for_query(&map, Loc::query());
        let err = reader.required_i64("page").unwrap_err();
        assert_eq!(err.error_type, ErrorType::Missing);
        assert_eq!(err.input, Value::Null);
    }

    #[test]
    fn optional_null_is_absent() {
        let map = object(json!({"color": null}));
        let reader = ObjectReader::new(&map, Loc::body());
        assert!(reader.optional_str("color").unwrap().is_none());
        assert!(reader.optional_str("other").unwrap().is_none());
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let map = object(json!({"page": "3", "ratio": "1.5", "flag": "yes"}));
        let reader = ObjectReader::for_query(&map, Loc::query());
        assert_eq!(reader.required_i64("page").unwrap().into_inner(), 3);
        assert_eq!(reader.required_f64("ratio").unwrap().into_inner(), 1.5);
        assert!(reader.required_bool("flag").unwrap().into_inner());
    }

    #[test]
    fn type_failures_use_specific_types() {
        let map = object(json!({
            "a": "abc",
            "b": 2.5,
            "c": true,
            "d": "maybe",
            "e": 7,
            "f": {"x": 1},
        }));
        let reader = ObjectReader::new(&map, Loc::body());
        assert_eq!(reader.required_i64("a").unwrap_err().error_type, ErrorType::IntParsing);
        assert_eq!(reader.required_i64("b").unwrap_err().error_type, ErrorType::IntFromFloat);
        assert_eq!(reader.required_f64("c").unwrap_err().error_type, ErrorType::FloatType);
        assert_eq!(reader.required_bool("d").unwrap_err().error_type, ErrorType::BoolParsing);
        assert_eq!(reader.required_str("e").unwrap_err().error_type, ErrorType::StringType);
        assert_eq!(reader.required_tuple("f").unwrap_err().error_type, ErrorType::TupleType);
    }

    #[test]
    fn integral_float_reads_as_integer() {
        let map = object(json!({"n": 4.0}));
        let reader = ObjectReader::new(&map, Loc::body());
        assert_eq!(reader.required_i64("n").unwrap().into_inner(), 4);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let payload = json!([1, 2, 3]);
        let errors = ObjectReader::from_value(&payload, Loc::body()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.entries()[0].error_type, ErrorType::ModelAttributesType);
        assert_eq!(errors.entries()[0].input, payload);
    }

    #[test]
    fn forbid_extra_lists_each_unknown_key() {
        let map = object(json!({"name": "x", "radus": -10, "extra": true}));
        let reader = ObjectReader::new(&map, Loc::body());
        let errors = reader.forbid_extra(&["name", "radius"]);
        let locs: Vec<String> = errors.iter().map(|e| e.loc.to_string()).collect();
        assert_eq!(locs, vec!["body.radus", "body.extra"]);
        assert!(errors.iter().all(|e| e.error_type == ErrorType::ExtraForbidden));
    }

    #[test]
    fn missing_echoes_object_in_payload_order() {
        let map = object(json!({"zeta": 1, "alpha": 2}));
        let reader = ObjectReader::new(&map, Loc::body());
        let err = reader.required_str("name").unwrap_err();
        assert_eq!(
            serde_json::to_string(&err.input).unwrap(),
            r#"{"zeta":1,"alpha":2}"#
        );
    }

    #[test]
    fn nested_reader_extends_location() {
        let map = object(json!({}));
        let reader = ObjectReader::new(&map, Loc::body()).nested("circle");
        let err = reader.required_f64("radius").unwrap_err();
        assert_eq!(err.loc.to_string(), "body.circle.radius");
    }

    #[test]
    fn tuple_elements_are_indexed() {
        let map = object(json!({"dims": [1, 2, 3]}));
        let reader = ObjectReader::new(&map, Loc::body());
        let dims = reader.required_tuple("dims").unwrap();
        let locs: Vec<String> = dims.elements().map(|(loc, _)| loc.to_string()).collect();
        assert_eq!(locs, vec!["body.dims.0", "body.dims.1", "body.dims.2"]);
    }
}
