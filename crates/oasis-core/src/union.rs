//! # Discriminated Unions
//!
//! A discriminated union selects exactly one variant schema from the value
//! of a tag field. The tag is read first; when it is absent or unknown the
//! payload fails with a single `union_tag_not_found` or `union_tag_invalid`
//! entry and no variant is tried. Otherwise the selected variant validates
//! the same object with its errors located under the tag, e.g.
//! `body.circle.radius`.

use serde_json::Value;

use crate::choice::StrEnum;
use crate::error::{ErrorEntry, ErrorType, ValidationErrors};
use crate::fields::ObjectReader;

/// A sum type whose variant is chosen by a string tag field.
pub trait DiscriminatedUnion: Sized {
    /// The closed set of tag literals.
    type Tag: StrEnum;

    /// Name of the tag field.
    const DISCRIMINATOR: &'static str;

    /// Validate the variant named by `tag`. `fields` is already nested
    /// under the tag literal.
    fn validate_variant(
        tag: Self::Tag,
        fields: &ObjectReader<'_>,
    ) -> Result<Self, ValidationErrors>;
}

/// Read the tag of `fields` for union `U`.
pub fn read_tag<U: DiscriminatedUnion>(fields: &ObjectReader<'_>) -> Result<U::Tag, ErrorEntry> {
    let discriminator = format!("'{}'", U::DISCRIMINATOR);
    let raw = match fields.get(U::DISCRIMINATOR) {
        None | Some(Value::Null) => {
            return Err(ErrorEntry::new(
                ErrorType::UnionTagNotFound,
                fields.loc().clone(),
                format!("Unable to extract tag using discriminator {discriminator}"),
                fields.to_value(),
            )
            .with_ctx("discriminator", discriminator));
        }
        Some(raw) => raw,
    };

    if let Some(tag) = raw.as_str().and_then(U::Tag::parse_str) {
        return Ok(tag);
    }

    let tag_text = match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let expected = U::Tag::expected_list();
    Err(ErrorEntry::new(
        ErrorType::UnionTagInvalid,
        fields.loc().clone(),
        format!(
            "Input tag '{tag_text}' found using {discriminator} does not match any of the expected tags: {expected}"
        ),
        fields.to_value(),
    )
    .with_ctx("discriminator", discriminator)
    .with_ctx("tag", tag_text)
    .with_ctx("expected_tags", expected))
}

/// Select and validate the variant of `U` named by the tag.
pub fn resolve<U: DiscriminatedUnion>(fields: &ObjectReader<'_>) -> Result<U, ValidationErrors> {
    let tag = read_tag::<U>(fields)?;
    U::validate_variant(tag, &fields.nested(tag.as_str()))
}
