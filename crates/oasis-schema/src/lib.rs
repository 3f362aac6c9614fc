//! # oasis-schema: Entity Schemas
//!
//! The validated entities served by the OASIS API, each built on the
//! primitives in `oasis-core`.
//!
//! ## Responsibilities
//!
//! - **Open union:** [`Pet`] (`anyOf`-style; undeclared fields ignored).
//! - **Closed union:** [`Shape`] (`oneOf`-style; undeclared fields rejected,
//!   derived circle properties, cross-field proportion rules).
//! - **Composition:** [`Product`] (`allOf`-style; three independent facets).
//! - **Projection:** [`LaptopExtended`] cut down to a [`Verbosity`] tier.
//!
//! Every schema implements [`oasis_core::Schema`], so callers validate a
//! payload with `Pet::validate(&payload, Loc::body())`.

pub mod laptop;
pub mod pet;
pub mod product;
pub mod shape;
pub mod verbosity;

// Re-export primary types.
pub use laptop::{sample_catalogue, LaptopExtended, LaptopMinimum, LaptopRegular, LaptopView};
pub use pet::{Cat, Dog, Pet, PetType};
pub use product::{BaseProduct, InventoryItem, Product, ProductMetrics, ShippingDetails};
pub use shape::{
    Circle, Rectangle, Shape, ShapeMeasures, ShapeType, ShapeValidationDetails,
};
pub use verbosity::{Project, Verbosity};
