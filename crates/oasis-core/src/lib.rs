//! # oasis-core: Validation Primitives for OASIS
//!
//! This crate defines the building blocks every schema in the workspace is
//! written with. It knows nothing about HTTP or about any particular payload;
//! it has no internal crate dependencies, only `serde`, `serde_json`, `regex`
//! and `utoipa` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Errors are data.** A failure is an [`ErrorEntry`] with a fixed wire
//!    shape, not a string. Entries accumulate in [`ValidationErrors`]; a
//!    payload is never rejected on its first bad field alone.
//!
//! 2. **Every read knows its location.** [`ObjectReader`] threads a [`Loc`]
//!    through each field, and each [`Field`] carries it into the constraint
//!    checks in [`constraints`].
//!
//! 3. **Unions dispatch on the tag first.** [`union::resolve`] reads the
//!    discriminator before any variant field, so an unknown tag is reported
//!    once instead of as one failure per variant.
//!
//! ## Crate Policy
//!
//! - No `.unwrap()` outside tests.
//! - No I/O, no async, no global state.

pub mod choice;
pub mod constraints;
pub mod error;
pub mod fields;
pub mod schema;
pub mod union;

// Re-export primary types at crate root for ergonomic imports.
pub use choice::StrEnum;
pub use constraints::{decimal_places, Numeric};
pub use error::{
    bound_value, ErrorCategory, ErrorEntry, ErrorType, Loc, LocItem, ValidationErrors,
};
pub use fields::{Field, ObjectReader};
pub use schema::Schema;
pub use union::DiscriminatedUnion;
