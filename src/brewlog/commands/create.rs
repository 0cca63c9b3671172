use crate::error::Result;
use crate::input::{OrderInput, ShopInput};
use crate::model::{Order, Shop};
use crate::shape::{shape_order, shape_shop};
use crate::store::RecordStore;

/// Shapes the input and inserts one shop. The store is untouched when shaping fails.
pub fn shop<S: RecordStore>(store: &mut S, input: &ShopInput) -> Result<Shop> {
    let shaped = shape_shop(input)?;
    store.insert_shop(&shaped)
}

/// Shapes the input and inserts one order. The store is untouched when shaping fails.
pub fn order<S: RecordStore>(store: &mut S, input: &OrderInput) -> Result<Order> {
    let shaped = shape_order(input)?;
    store.insert_order(&shaped)
}
