//! # Storage Layer
//!
//! The [`RecordStore`] trait is the whole contract between brewlog and its
//! datastore: insert one row and get it back, select rows with a filter and an
//! ordering, delete one row by id. Anything that can do that (a hosted
//! database client, a file, a map in memory) can back the catalog.
//!
//! The store, not the application, owns the data rules a managed database
//! would enforce:
//! - ids and `created_at` are assigned on insert
//! - ids are unique per table
//! - an order's `shop_id` must name an existing shop
//! - deleting a shop removes its orders
//!
//! ## Implementations
//!
//! Both are a [`TableStore`] over a [`backend::StorageBackend`]:
//!
//! - [`fs::FileStore`]: production, one JSON file per table in a data directory
//!   ```text
//!   <data_dir>/
//!   ├── shops.json     # coffee_shops rows
//!   ├── orders.json    # coffee_entries rows
//!   └── config.json    # BrewConfig
//!   ```
//! - [`memory::InMemoryStore`]: tests; can simulate write failures

use crate::error::{Result, StoreError};
use crate::model::{NewOrder, NewShop, Order, Shop};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod table_store;

pub use table_store::TableStore;

/// Sort order for shop listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopOrdering {
    /// Most recently added first.
    #[default]
    Newest,
    Oldest,
    /// Alphabetical, case-insensitive.
    Name,
}

impl ShopOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopOrdering::Newest => "newest",
            ShopOrdering::Oldest => "oldest",
            ShopOrdering::Name => "name",
        }
    }
}

impl FromStr for ShopOrdering {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(ShopOrdering::Newest),
            "oldest" => Ok(ShopOrdering::Oldest),
            "name" => Ok(ShopOrdering::Name),
            other => Err(format!(
                "unknown shop order '{}' (expected newest, oldest or name)",
                other
            )),
        }
    }
}

impl fmt::Display for ShopOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and ordering for a shop select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopQuery {
    pub id: Option<Uuid>,
    pub ordering: ShopOrdering,
}

impl ShopQuery {
    pub fn all(ordering: ShopOrdering) -> Self {
        Self { id: None, ordering }
    }

    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

/// Filter for an order select.
///
/// Results are always ordered by `date_tried` descending (undated last), then
/// by `created_at` descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub id: Option<Uuid>,
    pub shop_id: Option<Uuid>,
}

impl OrderQuery {
    pub fn for_shop(shop_id: Uuid) -> Self {
        Self {
            id: None,
            shop_id: Some(shop_id),
        }
    }
}

/// Table-level access to the catalog's datastore.
pub trait RecordStore {
    /// Insert a shop and return the stored row.
    fn insert_shop(&mut self, shop: &NewShop) -> Result<Shop>;

    /// Insert an order and return the stored row.
    /// Fails when `shop_id` is malformed or names no shop.
    fn insert_order(&mut self, order: &NewOrder) -> Result<Order>;

    fn select_shops(&self, query: &ShopQuery) -> Result<Vec<Shop>>;

    fn select_orders(&self, query: &OrderQuery) -> Result<Vec<Order>>;

    /// Delete a shop and its orders, returning the removed shop row.
    fn delete_shop(&mut self, id: &str) -> Result<Shop>;

    /// Delete an order, returning the removed row.
    fn delete_order(&mut self, id: &str) -> Result<Order>;
}

/// Parses a row id the way a database would, rejecting malformed text.
pub fn parse_id(raw: &str) -> std::result::Result<Uuid, StoreError> {
    Uuid::parse_str(raw.trim()).map_err(|_| StoreError::InvalidId(raw.to_string()))
}
