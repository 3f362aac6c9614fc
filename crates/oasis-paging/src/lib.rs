//! # oasis-paging: Pagination Engines
//!
//! Two ways to walk an immutable, ordered sequence:
//!
//! - [`offset`]: 1-based `page` and `size`, with `total_pages` reported.
//! - [`cursor`]: opaque tokens naming an item, read `next` or `previous`
//!   from it. Stable under ties because the order is `(created_at, id)`.
//!
//! Both engines take already-validated parameters (`NonZeroUsize` sizes);
//! range checks on raw query input belong to the caller. Neither engine
//! copies more than the returned window.

pub mod cursor;
pub mod offset;

// Re-export primary types.
pub use cursor::{CursorError, CursorKey, CursorKeyed, CursorPage, Direction};
pub use offset::OffsetPage;
