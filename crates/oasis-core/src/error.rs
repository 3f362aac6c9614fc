//! # Error Types: Structured Validation Errors
//!
//! Every field-level failure is reported as an [`ErrorEntry`] with the wire
//! shape `{type, loc, msg, input, ctx?}`. Entries are accumulated into a
//! [`ValidationErrors`] list in the order the fields were checked; the list
//! is never truncated to the first failure.
//!
//! ## Design
//!
//! - `type` strings are fixed by [`ErrorType`]; each maps to exactly one
//!   broad [`ErrorCategory`].
//! - `loc` is an ordered path of object keys and array indices.
//! - Numeric `ctx` bounds are emitted as JSON integers when integral, so
//!   `{"gt": 0}` is never rendered as `{"gt": 0.0}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

/// One segment of a [`Loc`] path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LocItem {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for LocItem {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Ordered location of a value inside a request.
///
/// Body values are rooted at `"body"`, query parameters at `"query"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loc(Vec<LocItem>);

impl Loc {
    /// An empty location.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Location of the request body.
    pub fn body() -> Self {
        Self(vec![LocItem::from("body")])
    }

    /// Location of the query string.
    pub fn query() -> Self {
        Self(vec![LocItem::from("query")])
    }

    /// Location of the path parameters.
    pub fn path() -> Self {
        Self(vec![LocItem::from("path")])
    }

    /// Return a new location one segment deeper.
    pub fn child(&self, item: impl Into<LocItem>) -> Self {
        let mut items = self.0.clone();
        items.push(item.into());
        Self(items)
    }

    /// The path segments, outermost first.
    pub fn items(&self) -> &[LocItem] {
        &self.0
    }

    /// The innermost segment, if any.
    pub fn last(&self) -> Option<&LocItem> {
        self.0.last()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Broad classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A required field is absent.
    MissingField,
    /// A value has the wrong JSON type or cannot be coerced.
    TypeMismatch,
    /// A numeric or length bound is violated.
    RangeViolation,
    /// A string does not match its pattern.
    PatternViolation,
    /// A union discriminator is absent or names no known variant.
    UnknownDiscriminator,
    /// A value is not one of a closed set of literals.
    InvalidEnumValue,
    /// A closed schema received an undeclared field.
    ExtraField,
    /// A cross-field rule rejected an otherwise well-formed value.
    ValueError,
    /// A pagination cursor could not be decoded.
    InvalidCursor,
    /// A pagination cursor refers to an item that does not exist.
    CursorNotFound,
}

/// Wire-level error type, serialized as the `type` field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Missing,
    ModelAttributesType,
    StringType,
    FloatType,
    FloatParsing,
    IntType,
    IntParsing,
    IntFromFloat,
    BoolType,
    BoolParsing,
    TupleType,
    GreaterThan,
    GreaterThanEqual,
    LessThanEqual,
    StringTooShort,
    StringTooLong,
    TooShort,
    TooLong,
    StringPatternMismatch,
    UnionTagNotFound,
    UnionTagInvalid,
    Enum,
    ExtraForbidden,
    ValueError,
}

impl ErrorType {
    /// The `type` string as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::ModelAttributesType => "model_attributes_type",
            Self::StringType => "string_type",
            Self::FloatType => "float_type",
            Self::FloatParsing => "float_parsing",
            Self::IntType => "int_type",
            Self::IntParsing => "int_parsing",
            Self::IntFromFloat => "int_from_float",
            Self::BoolType => "bool_type",
            Self::BoolParsing => "bool_parsing",
            Self::TupleType => "tuple_type",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanEqual => "greater_than_equal",
            Self::LessThanEqual => "less_than_equal",
            Self::StringTooShort => "string_too_short",
            Self::StringTooLong => "string_too_long",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::StringPatternMismatch => "string_pattern_mismatch",
            Self::UnionTagNotFound => "union_tag_not_found",
            Self::UnionTagInvalid => "union_tag_invalid",
            Self::Enum => "enum",
            Self::ExtraForbidden => "extra_forbidden",
            Self::ValueError => "value_error",
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            Self::Missing => ErrorCategory::MissingField,
            Self::ModelAttributesType
            | Self::StringType
            | Self::FloatType
            | Self::FloatParsing
            | Self::IntType
            | Self::IntParsing
            | Self::IntFromFloat
            | Self::BoolType
            | Self::BoolParsing
            | Self::TupleType => ErrorCategory::TypeMismatch,
            Self::GreaterThan
            | Self::GreaterThanEqual
            | Self::LessThanEqual
            | Self::StringTooShort
            | Self::StringTooLong
            | Self::TooShort
            | Self::TooLong => ErrorCategory::RangeViolation,
            Self::StringPatternMismatch => ErrorCategory::PatternViolation,
            Self::UnionTagNotFound | Self::UnionTagInvalid => ErrorCategory::UnknownDiscriminator,
            Self::Enum => ErrorCategory::InvalidEnumValue,
            Self::ExtraForbidden => ErrorCategory::ExtraField,
            Self::ValueError => ErrorCategory::ValueError,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single structured validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEntry {
    /// Machine-readable failure type.
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    /// Path to the offending value.
    #[schema(value_type = Vec<LocItem>)]
    pub loc: Loc,
    /// Human-readable message.
    pub msg: String,
    /// The offending input as received.
    #[schema(value_type = Object)]
    pub input: Value,
    /// Constraint parameters, when the failure has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub ctx: Option<Map<String, Value>>,
}

impl ErrorEntry {
    pub fn new(error_type: ErrorType, loc: Loc, msg: impl Into<String>, input: Value) -> Self {
        Self {
            error_type,
            loc,
            msg: msg.into(),
            input,
            ctx: None,
        }
    }

    /// Attach one `ctx` parameter.
    pub fn with_ctx(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.ctx
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    /// A required field is absent. `input` is the enclosing object
    /// (or `null` for query parameters).
    pub fn missing(loc: Loc, input: Value) -> Self {
        Self::new(ErrorType::Missing, loc, "Field required", input)
    }

    /// A closed schema received an undeclared field.
    pub fn extra_forbidden(loc: Loc, input: Value) -> Self {
        Self::new(
            ErrorType::ExtraForbidden,
            loc,
            "Extra inputs are not permitted",
            input,
        )
    }

    /// The input is not an object with fields.
    pub fn model_attributes_type(loc: Loc, input: Value) -> Self {
        Self::new(
            ErrorType::ModelAttributesType,
            loc,
            "Input should be a valid dictionary or object to extract fields from",
            input,
        )
    }

    /// A cross-field rule rejected the value.
    pub fn value_error(loc: Loc, input: Value, reason: &str) -> Self {
        Self::new(
            ErrorType::ValueError,
            loc,
            format!("Value error, {reason}"),
            input,
        )
        .with_ctx("error", reason)
    }

    pub fn category(&self) -> ErrorCategory {
        self.error_type.category()
    }

    /// Look up a `ctx` parameter.
    pub fn ctx_value(&self, key: &str) -> Option<&Value> {
        self.ctx.as_ref().and_then(|ctx| ctx.get(key))
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.loc, self.msg, self.error_type)
    }
}

/// Render a numeric bound as JSON, preferring an integer when the value
/// has no fractional part.
pub fn bound_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

/// Ordered, untruncated list of validation failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("{}", render(.entries))]
pub struct ValidationErrors {
    entries: Vec<ErrorEntry>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding exactly one entry.
    pub fn single(entry: ErrorEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    pub fn push(&mut self, entry: ErrorEntry) {
        self.entries.push(entry);
    }

    /// Append every entry of `other`, preserving order.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }

    /// Record the error of a failed check and pass through the success value.
    pub fn collect<T>(&mut self, result: Result<T, ErrorEntry>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(entry) => {
                self.push(entry);
                None
            }
        }
    }

    /// Like [`collect`](Self::collect), for checks that can fail with
    /// several entries at once.
    pub fn absorb<T>(&mut self, result: Result<T, ValidationErrors>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.extend(errors);
                None
            }
        }
    }

    /// `Ok(value)` when no entries were recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.entries.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ErrorEntry> {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorEntry> {
        self.entries.iter()
    }
}

impl From<ErrorEntry> for ValidationErrors {
    fn from(entry: ErrorEntry) -> Self {
        Self::single(entry)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// `N validation error(s)` followed by one indented line per entry.
fn render(entries: &[ErrorEntry]) -> String {
    let count = entries.len();
    let mut text = format!(
        "{count} validation error{}",
        if count == 1 { "" } else { "s" }
    );
    for entry in entries {
        text.push_str(&format!("\n  {entry}"));
    }
    text
}
