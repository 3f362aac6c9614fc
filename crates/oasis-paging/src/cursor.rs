//! # Cursor Pagination
//!
//! A cursor is an opaque token naming one item of a sequence ordered by
//! [`CursorKey`] (`created_at`, then `id`). The token is the JSON record
//! `{"created_at": <RFC 3339>, "id": <u64>}` in URL-safe base64 without
//! padding.
//!
//! Paging `next` from a cursor returns the items strictly after it;
//! paging `previous` returns the items strictly before it, still in
//! ascending order. Without a cursor, `next` starts at the head and
//! `previous` ends at the tail.

use std::num::NonZeroUsize;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use oasis_core::{ErrorCategory, StrEnum};

/// Position of an item in a cursor-paginated sequence.
///
/// Field order defines the sort: `created_at` first, `id` breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CursorKey {
    pub created_at: DateTime<Utc>,
    pub id: u64,
}

/// Items that can be addressed by a cursor.
pub trait CursorKeyed {
    fn cursor_key(&self) -> CursorKey;
}

impl CursorKeyed for CursorKey {
    fn cursor_key(&self) -> CursorKey {
        *self
    }
}

/// Errors from decoding or resolving a cursor.
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    /// The token is not base64, or does not decode to a cursor record.
    #[error("Invalid cursor")]
    InvalidCursor,

    /// The token is well formed but names no item in the sequence.
    #[error("Cursor not found")]
    CursorNotFound,

    /// A key could not be serialized into a token.
    #[error("cursor encoding failed: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl CursorError {
    /// The broad category, when the error is the caller's fault.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::InvalidCursor => Some(ErrorCategory::InvalidCursor),
            Self::CursorNotFound => Some(ErrorCategory::CursorNotFound),
            Self::Encoding(_) => None,
        }
    }
}

/// Which side of the cursor to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Next,
    Previous,
}

impl StrEnum for Direction {
    const VARIANTS: &'static [Self] = &[Self::Next, Self::Previous];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

pub fn encode(key: &CursorKey) -> Result<String, CursorError> {
    let json = serde_json::to_vec(key).map_err(CursorError::Encoding)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token. Trailing `=` padding is tolerated.
pub fn decode(token: &str) -> Result<CursorKey, CursorError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim_end_matches('='))
        .map_err(|_| CursorError::InvalidCursor)?;
    serde_json::from_slice(&bytes).map_err(|_| CursorError::InvalidCursor)
}

/// One page of a cursor-paginated sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
    pub previous_cursor: Option<String>,
    pub total_count: usize,
}

/// Sort into cursor order. Stable.
pub fn sort_by_cursor<T: CursorKeyed>(items: &mut [T]) {
    items.sort_by_key(T::cursor_key);
}

/// Index of the item named by `key`. `items` must be in cursor order.
fn locate<T: CursorKeyed>(items: &[T], key: &CursorKey) -> Result<usize, CursorError> {
    items
        .binary_search_by(|item| item.cursor_key().cmp(key))
        .map_err(|_| CursorError::CursorNotFound)
}

/// Read up to `limit` items from `items` (in cursor order) on the
/// `direction` side of `cursor`.
pub fn paginate<T: CursorKeyed + Clone>(
    items: &[T],
    limit: NonZeroUsize,
    cursor: Option<&str>,
    direction: Direction,
) -> Result<CursorPage<T>, CursorError> {
    let boundary = match cursor {
        Some(token) => Some(locate(items, &decode(token)?)?),
        None => None,
    };

    let total = items.len();
    let (start, end) = match direction {
        Direction::Next => {
            let start = boundary.map_or(0, |index| index + 1);
            (start, start.saturating_add(limit.get()).min(total))
        }
        Direction::Previous => {
            let end = boundary.unwrap_or(total);
            (end.saturating_sub(limit.get()), end)
        }
    };

    let window = &items[start..end];
    let next_cursor = match window.last() {
        Some(last) if end < total => Some(encode(&last.cursor_key())?),
        _ => None,
    };
    let previous_cursor = match window.first() {
        Some(first) if start > 0 => Some(encode(&first.cursor_key())?),
        _ => None,
    };

    Ok(CursorPage {
        items: window.to_vec(),
        next_cursor,
        previous_cursor,
        total_count: total,
    })
}
