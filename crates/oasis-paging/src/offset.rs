//! Page/size offset pagination.
//!
//! Pages are 1-based. `total_pages = ceil(total / size)`; a page past the
//! end is not an error, it is simply empty.

use std::num::NonZeroUsize;

use serde::Serialize;

/// One page of an offset-paginated sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
}

pub fn total_pages(total: usize, size: NonZeroUsize) -> usize {
    total.div_ceil(size.get())
}

/// `items[offset .. offset + limit]`, clamped to the sequence.
pub fn slice_window<T>(items: &[T], offset: usize, limit: usize) -> &[T] {
    let start = offset.min(items.len());
    let end = offset.saturating_add(limit).min(items.len());
    &items[start..end]
}

/// Page `page` of `items` at `size` items per page.
pub fn paginate<T: Clone>(items: &[T], page: NonZeroUsize, size: NonZeroUsize) -> OffsetPage<T> {
    let offset = (page.get() - 1).saturating_mul(size.get());
    OffsetPage {
        items: slice_window(items, offset, size.get()).to_vec(),
        total: items.len(),
        page: page.get(),
        size: size.get(),
        total_pages: total_pages(items.len(), size),
    }
}
