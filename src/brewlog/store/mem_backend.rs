use super::backend::StorageBackend;
use crate::error::{Result, StoreError};
use crate::model::{Order, Shop};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since brewlog is single-threaded.
pub struct MemBackend {
    shops: RefCell<Vec<Shop>>,
    orders: RefCell<Vec<Order>>,
    simulated_write_error: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            shops: RefCell::new(Vec::new()),
            orders: RefCell::new(Vec::new()),
            simulated_write_error: RefCell::new(None),
            writes: Cell::new(0),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with `message` (`None` to stop).
    /// An empty message simulates a store error that carries no text.
    pub fn set_simulated_write_error(&self, message: Option<&str>) {
        *self.simulated_write_error.borrow_mut() = message.map(str::to_string);
    }

    /// Number of successful table writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn check_write(&self) -> Result<()> {
        if let Some(message) = self.simulated_write_error.borrow().as_ref() {
            return Err(StoreError::Backend(message.clone()).into());
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_shops(&self) -> Result<Vec<Shop>> {
        Ok(self.shops.borrow().clone())
    }

    fn save_shops(&self, shops: &[Shop]) -> Result<()> {
        self.check_write()?;
        *self.shops.borrow_mut() = shops.to_vec();
        Ok(())
    }

    fn load_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.borrow().clone())
    }

    fn save_orders(&self, orders: &[Order]) -> Result<()> {
        self.check_write()?;
        *self.orders.borrow_mut() = orders.to_vec();
        Ok(())
    }
}
