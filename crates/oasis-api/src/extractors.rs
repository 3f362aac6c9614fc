//! # Request Extraction & Validation
//!
//! Handlers receive bodies as raw JSON and query strings as raw string
//! maps, then validate them with an [`oasis_core::Schema`] or an
//! [`ObjectReader`]. Body errors are located under `"body"`, query errors
//! under `"query"`.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use serde_json::{Map, Value};

use oasis_core::{Loc, Schema};

use crate::error::AppError;

/// Extract a JSON body, mapping malformed JSON to [`AppError::BadRequest`].
pub fn extract_json(result: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Strip an optional single-key envelope such as `{"pet": {...}}`.
///
/// Returns the value to validate and its location. An object whose only
/// key is `envelope` is unwrapped and the key is added to the location;
/// anything else is validated as sent.
pub fn unwrap_envelope<'a>(body: &'a Value, envelope: &str) -> (&'a Value, Loc) {
    if let Value::Object(map) = body {
        if map.len() == 1 {
            if let Some(inner) = map.get(envelope) {
                return (inner, Loc::body().child(envelope));
            }
        }
    }
    (body, Loc::body())
}

/// Extract a JSON body and validate it as `T`, bare or enveloped.
pub fn extract_validated<T: Schema>(
    result: Result<Json<Value>, JsonRejection>,
    envelope: &str,
) -> Result<T, AppError> {
    let body = extract_json(result)?;
    let (payload, loc) = unwrap_envelope(&body, envelope);
    Ok(T::validate(payload, loc)?)
}

/// Extract query parameters as a JSON object of strings, ready for an
/// [`oasis_core::ObjectReader::for_query`] reader.
pub fn extract_query(
    result: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Map<String, Value>, AppError> {
    let Query(params) = result.map_err(|err| AppError::BadRequest(err.body_text()))?;
    Ok(query_object(params))
}

pub fn query_object(params: HashMap<String, String>) -> Map<String, Value> {
    params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Convert a value already checked to be `>= 1`.
pub fn non_zero(value: i64) -> NonZeroUsize {
    NonZeroUsize::new(usize::try_from(value).unwrap_or(usize::MAX)).unwrap_or(NonZeroUsize::MIN)
}

/// Convert a value already checked to be `>= 0`.
pub fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}
