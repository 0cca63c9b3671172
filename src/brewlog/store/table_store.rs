use super::backend::StorageBackend;
use super::{OrderQuery, RecordStore, ShopOrdering, ShopQuery, parse_id};
use crate::error::{Result, StoreError, Table};
use crate::model::{NewOrder, NewShop, Order, Shop};
use chrono::Utc;
use std::cmp::Reverse;
use tracing::debug;
use uuid::Uuid;

pub struct TableStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> TableStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    fn fresh_id<T>(rows: &[T], table: Table, id_of: impl Fn(&T) -> Uuid) -> Result<Uuid> {
        let id = Uuid::new_v4();
        if rows.iter().any(|row| id_of(row) == id) {
            return Err(StoreError::DuplicateId { table, id }.into());
        }
        Ok(id)
    }
}

impl<B: StorageBackend> RecordStore for TableStore<B> {
    fn insert_shop(&mut self, new: &NewShop) -> Result<Shop> {
        let mut shops = self.backend.load_shops()?;
        let id = Self::fresh_id(&shops, Table::Shops, |s| s.id)?;
        let shop = Shop::from_new(new, id, Utc::now());
        shops.push(shop.clone());
        self.backend.save_shops(&shops)?;
        debug!(table = %Table::Shops, %id, "inserted row");
        Ok(shop)
    }

    fn insert_order(&mut self, new: &NewOrder) -> Result<Order> {
        let shop_id = parse_id(&new.shop_id)?;
        let shops = self.backend.load_shops()?;
        if !shops.iter().any(|s| s.id == shop_id) {
            return Err(StoreError::MissingShop(shop_id).into());
        }

        let mut orders = self.backend.load_orders()?;
        let id = Self::fresh_id(&orders, Table::Orders, |o| o.id)?;
        let order = Order::from_new(new, id, shop_id, Utc::now());
        orders.push(order.clone());
        self.backend.save_orders(&orders)?;
        debug!(table = %Table::Orders, %id, %shop_id, "inserted row");
        Ok(order)
    }

    fn select_shops(&self, query: &ShopQuery) -> Result<Vec<Shop>> {
        let mut shops: Vec<Shop> = self
            .backend
            .load_shops()?
            .into_iter()
            .filter(|s| query.id.is_none_or(|id| s.id == id))
            .collect();

        match query.ordering {
            ShopOrdering::Newest => shops.sort_by_key(|s| Reverse(s.created_at)),
            ShopOrdering::Oldest => shops.sort_by_key(|s| s.created_at),
            ShopOrdering::Name => shops.sort_by_key(|s| s.name.to_lowercase()),
        }
        Ok(shops)
    }

    fn select_orders(&self, query: &OrderQuery) -> Result<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .backend
            .load_orders()?
            .into_iter()
            .filter(|o| query.id.is_none_or(|id| o.id == id))
            .filter(|o| query.shop_id.is_none_or(|id| o.shop_id == id))
            .collect();

        // Dated entries first, newest date first.
        orders.sort_by_key(|o| {
            (
                o.date_tried.is_none(),
                Reverse(o.date_tried),
                Reverse(o.created_at),
            )
        });
        Ok(orders)
    }

    fn delete_shop(&mut self, id: &str) -> Result<Shop> {
        let id = parse_id(id)?;
        let mut shops = self.backend.load_shops()?;
        let pos = shops
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound {
                table: Table::Shops,
                id,
            })?;
        let removed = shops.remove(pos);

        // Orders go first: a failed shop write then leaves a childless shop,
        // never orders pointing at a missing one.
        let orders = self.backend.load_orders()?;
        let before = orders.len();
        let kept: Vec<Order> = orders.into_iter().filter(|o| o.shop_id != id).collect();
        if kept.len() != before {
            self.backend.save_orders(&kept)?;
            debug!(%id, cascaded = before - kept.len(), "removed orders of deleted shop");
        }
        self.backend.save_shops(&shops)?;

        debug!(table = %Table::Shops, %id, "deleted row");
        Ok(removed)
    }

    fn delete_order(&mut self, id: &str) -> Result<Order> {
        let id = parse_id(id)?;
        let mut orders = self.backend.load_orders()?;
        let pos = orders
            .iter()
            .position(|o| o.id == id)
            .ok_or(StoreError::NotFound {
                table: Table::Orders,
                id,
            })?;
        let removed = orders.remove(pos);
        self.backend.save_orders(&orders)?;
        debug!(table = %Table::Orders, %id, "deleted row");
        Ok(removed)
    }
}
