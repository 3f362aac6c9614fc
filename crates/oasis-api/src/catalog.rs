//! # Datasets
//!
//! The immutable sequences the read endpoints page over. Built once at
//! startup and shared behind an `Arc`.
//!
//! - 25 offset items, `Item 1` to `Item 25`.
//! - A configurable number of cursor items starting 2024-01-01 UTC, one
//!   minute apart in pairs, so every second item shares its neighbour's
//!   `created_at` and ordering falls back to `id`.
//! - The bundled laptop catalogue.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use oasis_paging::cursor::sort_by_cursor;
use oasis_paging::{CursorKey, CursorKeyed};
use oasis_schema::{sample_catalogue, LaptopExtended};

pub const OFFSET_ITEM_COUNT: u64 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OffsetItem {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CursorItem {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CursorKeyed for CursorItem {
    fn cursor_key(&self) -> CursorKey {
        CursorKey {
            created_at: self.created_at,
            id: self.id,
        }
    }
}

/// All datasets served by the API.
#[derive(Debug, Clone)]
pub struct Catalog {
    offset_items: Vec<OffsetItem>,
    cursor_items: Vec<CursorItem>,
    laptops: Vec<LaptopExtended>,
}

impl Catalog {
    pub fn build(cursor_items: usize) -> Self {
        Self {
            offset_items: offset_dataset(),
            cursor_items: cursor_dataset(cursor_items),
            laptops: sample_catalogue(),
        }
    }

    pub fn offset_items(&self) -> &[OffsetItem] {
        &self.offset_items
    }

    /// In cursor order.
    pub fn cursor_items(&self) -> &[CursorItem] {
        &self.cursor_items
    }

    pub fn laptops(&self) -> &[LaptopExtended] {
        &self.laptops
    }

    pub fn laptop(&self, id: &str) -> Option<&LaptopExtended> {
        self.laptops.iter().find(|laptop| laptop.id() == id)
    }
}

fn offset_dataset() -> Vec<OffsetItem> {
    (1..=OFFSET_ITEM_COUNT)
        .map(|id| OffsetItem {
            id,
            name: format!("Item {id}"),
        })
        .collect()
}

fn cursor_dataset(count: usize) -> Vec<CursorItem> {
    let epoch = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    let mut items: Vec<CursorItem> = (1..=count as u64)
        .rev()
        .map(|id| CursorItem {
            id,
            name: format!("Cursor Item {id}"),
            created_at: epoch + Duration::minutes(((id - 1) / 2) as i64),
        })
        .collect();
    sort_by_cursor(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_items_are_numbered_from_one() {
        let catalog = Catalog::build(0);
        let items = catalog.offset_items();
        assert_eq!(items.len(), 25);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[24].id, 25);
    }

    #[test]
    fn cursor_items_are_sorted_with_ties() {
        let catalog = Catalog::build(50);
        let items = catalog.cursor_items();
        assert_eq!(items.len(), 50);
        assert!(items
            .windows(2)
            .all(|pair| pair[0].cursor_key() < pair[1].cursor_key()));
        assert_eq!(items[0].created_at, items[1].created_at);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn laptop_lookup_by_id() {
        let catalog = Catalog::build(0);
        assert!(catalog.laptop("LP789101").is_some());
        assert!(catalog.laptop("LP000000").is_none());
        assert_eq!(catalog.laptops().len(), 4);
    }
}
