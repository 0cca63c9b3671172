use super::backend::StorageBackend;
use crate::error::{BrewError, Result};
use crate::model::{Order, Shop};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SHOPS_FILE: &str = "shops.json";
pub const ORDERS_FILE: &str = "orders.json";

/// Filesystem backend: each table is a pretty-printed JSON array in `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BrewError::Io)?;
        }
        Ok(())
    }

    fn load_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(BrewError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<T> = serde_json::from_str(&content).map_err(BrewError::Serialization)?;
        debug!(path = %path.display(), rows = rows.len(), "loaded table");
        Ok(rows)
    }

    /// Writes to a sibling temp file, then renames over the table.
    fn save_table<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.root.join(file);
        let tmp = self.root.join(format!(".{}.tmp", file));
        let content = serde_json::to_string_pretty(rows).map_err(BrewError::Serialization)?;
        fs::write(&tmp, content).map_err(BrewError::Io)?;
        fs::rename(&tmp, &path).map_err(BrewError::Io)?;
        debug!(path = %path.display(), rows = rows.len(), "saved table");
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_shops(&self) -> Result<Vec<Shop>> {
        self.load_table(SHOPS_FILE)
    }

    fn save_shops(&self, shops: &[Shop]) -> Result<()> {
        self.save_table(SHOPS_FILE, shops)
    }

    fn load_orders(&self) -> Result<Vec<Order>> {
        self.load_table(ORDERS_FILE)
    }

    fn save_orders(&self, orders: &[Order]) -> Result<()> {
        self.save_table(ORDERS_FILE, orders)
    }
}
