use super::ShopDetail;
use crate::error::{Result, StoreError, Table};
use crate::model::{Order, Shop};
use crate::store::{OrderQuery, RecordStore, ShopOrdering, ShopQuery, parse_id};

pub fn shops<S: RecordStore>(store: &S, ordering: ShopOrdering) -> Result<Vec<Shop>> {
    store.select_shops(&ShopQuery::all(ordering))
}

pub fn shop<S: RecordStore>(store: &S, id: &str) -> Result<Shop> {
    let id = parse_id(id)?;
    store
        .select_shops(&ShopQuery::by_id(id))?
        .into_iter()
        .next()
        .ok_or_else(|| {
            StoreError::NotFound {
                table: Table::Shops,
                id,
            }
            .into()
        })
}

pub fn orders<S: RecordStore>(store: &S, shop_id: &str) -> Result<Vec<Order>> {
    let shop_id = parse_id(shop_id)?;
    store.select_orders(&OrderQuery::for_shop(shop_id))
}

/// Shop plus its orders, newest tasting first. Two selects, as the detail page does.
pub fn shop_detail<S: RecordStore>(store: &S, id: &str) -> Result<ShopDetail> {
    let shop = shop(store, id)?;
    let orders = store.select_orders(&OrderQuery::for_shop(shop.id))?;
    Ok(ShopDetail { shop, orders })
}
