//! # API Route Modules
//!
//! - `pets`: anyOf discriminated union, open variants.
//! - `shapes`: oneOf discriminated union, closed variants, derived fields.
//! - `products`: allOf composition of three independent facets.
//! - `offset_items`: page/size pagination.
//! - `cursor_items`: opaque-cursor pagination in both directions.
//! - `laptops`: verbosity-projected single and list reads.

pub mod cursor_items;
pub mod laptops;
pub mod offset_items;
pub mod pets;
pub mod products;
pub mod shapes;
