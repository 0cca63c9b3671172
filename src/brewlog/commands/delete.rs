use crate::error::Result;
use crate::model::{Order, Shop};
use crate::store::RecordStore;

/// Removes a shop by id. Its orders go with it (the store cascades).
pub fn shop<S: RecordStore>(store: &mut S, id: &str) -> Result<Shop> {
    store.delete_shop(id)
}

pub fn order<S: RecordStore>(store: &mut S, id: &str) -> Result<Order> {
    store.delete_order(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::{OrderQuery, ShopQuery};

    #[test]
    fn deletes_order_and_keeps_shop() {
        let mut fixture = StoreFixture::new()
            .with_shop("A")
            .with_order("Latte")
            .with_order("Mocha");
        let latte = fixture.orders[0].clone();

        let removed = order(&mut fixture.store, &latte.id.to_string()).unwrap();
        assert_eq!(removed.id, latte.id);

        let left = fixture.store.select_orders(&OrderQuery::default()).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].coffee_name, "Mocha");
        assert_eq!(
            fixture.store.select_shops(&ShopQuery::default()).unwrap().len(),
            1
        );
    }

    #[test]
    fn deleting_shop_removes_its_orders() {
        let mut fixture = StoreFixture::new().with_shop("A").with_order("Latte");
        let id = fixture.shops[0].id.to_string();
        shop(&mut fixture.store, &id).unwrap();
        assert!(
            fixture
                .store
                .select_orders(&OrderQuery::default())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn deleting_twice_fails() {
        let mut fixture = StoreFixture::new().with_shop("A").with_order("Latte");
        let id = fixture.orders[0].id.to_string();
        order(&mut fixture.store, &id).unwrap();
        assert!(order(&mut fixture.store, &id).is_err());
    }
}
