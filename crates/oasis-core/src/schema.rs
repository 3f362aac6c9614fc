//! The [`Schema`] trait: build a typed value from a payload or fail with
//! every field error found.

use serde_json::Value;

use crate::error::{Loc, ValidationErrors};
use crate::fields::ObjectReader;

/// A type that can be validated out of a JSON object.
///
/// Implementations read every field before failing, so a payload with three
/// bad fields yields three entries.
pub trait Schema: Sized {
    /// Build from an object reader positioned at this value's location.
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors>;

    /// Validate an arbitrary payload located at `loc`.
    fn validate(payload: &Value, loc: Loc) -> Result<Self, ValidationErrors> {
        let fields = ObjectReader::from_value(payload, loc)?;
        Self::from_fields(&fields)
    }
}
