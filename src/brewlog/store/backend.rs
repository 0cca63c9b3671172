use crate::error::Result;
use crate::model::{Order, Shop};

/// Raw table I/O.
///
/// A backend only knows how to load and save whole tables;
/// [`TableStore`](super::TableStore) layers ids, filtering, ordering and
/// referential rules on top. Methods take `&self`: backends handle their own interior mutability.
pub trait StorageBackend {
    /// Load every shop row. A table that was never written is empty.
    fn load_shops(&self) -> Result<Vec<Shop>>;

    /// Replace the shop table.
    /// MUST be atomic so a failed write never leaves half a table behind.
    fn save_shops(&self, shops: &[Shop]) -> Result<()>;

    fn load_orders(&self) -> Result<Vec<Order>>;

    fn save_orders(&self, orders: &[Order]) -> Result<()>;
}
