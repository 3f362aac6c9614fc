//! # Pets: Open Discriminated Union
//!
//! A pet is either a [`Cat`] or a [`Dog`], selected by `petType`. Both
//! variants are open: fields they do not declare are ignored and never
//! echoed back, so a dog never carries a `favoriteToy`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use oasis_core::{
    union, DiscriminatedUnion, ErrorEntry, ObjectReader, Schema, StrEnum, ValidationErrors,
};

/// The `petType` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Cat,
    Dog,
}

impl StrEnum for PetType {
    const VARIANTS: &'static [Self] = &[Self::Cat, Self::Dog];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    pub name: String,
    pub favorite_toy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dog {
    pub name: String,
    pub breed: Option<String>,
}

/// A validated pet, serialized with its `petType` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "petType", rename_all = "lowercase")]
pub enum Pet {
    Cat(Cat),
    Dog(Dog),
}

impl Pet {
    pub fn pet_type(&self) -> PetType {
        match self {
            Self::Cat(_) => PetType::Cat,
            Self::Dog(_) => PetType::Dog,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Cat(cat) => &cat.name,
            Self::Dog(dog) => &dog.name,
        }
    }
}

fn pet_name(fields: &ObjectReader<'_>) -> Result<String, ErrorEntry> {
    fields
        .required_str("name")
        .and_then(|f| f.min_len(1))
        .map(|f| f.into_inner().to_string())
}

fn optional_text(fields: &ObjectReader<'_>, name: &str) -> Result<Option<String>, ErrorEntry> {
    Ok(fields
        .optional_str(name)?
        .map(|f| f.into_inner().to_string()))
}

impl Schema for Cat {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.collect(pet_name(fields));
        let favorite_toy = errors.collect(optional_text(fields, "favoriteToy"));
        let (Some(name), Some(favorite_toy)) = (name, favorite_toy) else {
            return Err(errors);
        };
        Ok(Self { name, favorite_toy })
    }
}

impl Schema for Dog {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.collect(pet_name(fields));
        let breed = errors.collect(optional_text(fields, "breed"));
        let (Some(name), Some(breed)) = (name, breed) else {
            return Err(errors);
        };
        Ok(Self { name, breed })
    }
}

impl DiscriminatedUnion for Pet {
    type Tag = PetType;
    const DISCRIMINATOR: &'static str = "petType";

    fn validate_variant(tag: PetType, fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        match tag {
            PetType::Cat => Cat::from_fields(fields).map(Self::Cat),
            PetType::Dog => Dog::from_fields(fields).map(Self::Dog),
        }
    }
}

impl Schema for Pet {
    fn from_fields(fields: &ObjectReader<'_>) -> Result<Self, ValidationErrors> {
        union::resolve(fields)
    }
}
