use super::mem_backend::MemBackend;
use super::table_store::TableStore;

pub type InMemoryStore = TableStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        TableStore::with_backend(MemBackend::new())
    }

    /// The backend, for simulating failures and counting writes.
    pub fn backend(&self) -> &MemBackend {
        &self.backend
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{NewOrder, NewShop, Order, Shop};
    use crate::store::RecordStore;

    pub fn new_shop(name: &str) -> NewShop {
        NewShop {
            name: name.to_string(),
            address: None,
            seating_level: None,
            vibe: Vec::new(),
            good_for_work: false,
            photo_url: None,
        }
    }

    pub fn new_order(shop: &Shop, coffee: &str) -> NewOrder {
        NewOrder {
            shop_id: shop.id.to_string(),
            coffee_name: coffee.to_string(),
            strength_level: None,
            price: None,
            rating: None,
            tasting_notes: None,
            photo_url: None,
            date_tried: None,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub shops: Vec<Shop>,
        pub orders: Vec<Order>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                shops: Vec::new(),
                orders: Vec::new(),
            }
        }

        pub fn with_shop(mut self, name: &str) -> Self {
            let shop = self.store.insert_shop(&new_shop(name)).unwrap();
            self.shops.push(shop);
            self
        }

        /// Adds an order to the most recently added shop.
        pub fn with_order(mut self, coffee: &str) -> Self {
            let shop = self.shops.last().expect("fixture needs a shop first");
            let order = self.store.insert_order(&new_order(shop, coffee)).unwrap();
            self.orders.push(order);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{StoreFixture, new_order, new_shop};
    use super::*;
    use crate::error::{BrewError, StoreError, Table};
    use crate::store::{OrderQuery, RecordStore, ShopOrdering, ShopQuery};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn insert_assigns_identity() {
        let mut store = InMemoryStore::new();
        let a = store.insert_shop(&new_shop("A")).unwrap();
        let b = store.insert_shop(&new_shop("B")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "A");
        assert!(b.created_at >= a.created_at);
    }

    #[test]
    fn shops_order_by_created_and_name() {
        let fixture = StoreFixture::new()
            .with_shop("beta")
            .with_shop("Alpha")
            .with_shop("gamma");

        let newest = fixture
            .store
            .select_shops(&ShopQuery::all(ShopOrdering::Newest))
            .unwrap();
        let oldest = fixture
            .store
            .select_shops(&ShopQuery::all(ShopOrdering::Oldest))
            .unwrap();
        assert_eq!(newest.len(), 3);
        assert_eq!(newest.first().map(|s| s.created_at), oldest.last().map(|s| s.created_at));

        let by_name = fixture
            .store
            .select_shops(&ShopQuery::all(ShopOrdering::Name))
            .unwrap();
        let names: Vec<_> = by_name.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn select_shop_by_id() {
        let fixture = StoreFixture::new().with_shop("A").with_shop("B");
        let target = fixture.shops[1].id;
        let found = fixture.store.select_shops(&ShopQuery::by_id(target)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "B");

        let none = fixture
            .store
            .select_shops(&ShopQuery::by_id(Uuid::new_v4()))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn order_requires_existing_shop() {
        let mut fixture = StoreFixture::new().with_shop("A");
        let mut order = new_order(&fixture.shops[0], "Latte");

        let ghost = Uuid::new_v4();
        order.shop_id = ghost.to_string();
        let err = fixture.store.insert_order(&order).unwrap_err();
        assert!(matches!(err, BrewError::Store(StoreError::MissingShop(id)) if id == ghost));

        order.shop_id = "s1".into();
        let err = fixture.store.insert_order(&order).unwrap_err();
        assert!(matches!(err, BrewError::Store(StoreError::InvalidId(_))));
    }

    #[test]
    fn orders_filter_by_shop_and_sort_by_date() {
        let mut fixture = StoreFixture::new()
            .with_shop("A")
            .with_order("undated")
            .with_shop("B")
            .with_order("other shop");
        let shop_a = fixture.shops[0].clone();

        for (coffee, day) in [("older", 1), ("newer", 20)] {
            let mut order = new_order(&shop_a, coffee);
            order.date_tried = NaiveDate::from_ymd_opt(2024, 5, day);
            fixture.store.insert_order(&order).unwrap();
        }

        let orders = fixture
            .store
            .select_orders(&OrderQuery::for_shop(shop_a.id))
            .unwrap();
        let names: Vec<_> = orders.iter().map(|o| o.coffee_name.as_str()).collect();
        assert_eq!(names, vec!["newer", "older", "undated"]);
    }

    #[test]
    fn delete_shop_cascades_to_orders() {
        let mut fixture = StoreFixture::new()
            .with_shop("A")
            .with_order("Latte")
            .with_order("Mocha")
            .with_shop("B")
            .with_order("Flat white");
        let shop_a = fixture.shops[0].id;

        let removed = fixture.store.delete_shop(&shop_a.to_string()).unwrap();
        assert_eq!(removed.name, "A");

        let remaining = fixture.store.select_orders(&OrderQuery::default()).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].coffee_name, "Flat white");
    }

    #[test]
    fn delete_missing_rows_is_not_found() {
        let mut store = InMemoryStore::new();
        let id = Uuid::new_v4();
        let err = store.delete_order(&id.to_string()).unwrap_err();
        assert!(matches!(
            err,
            BrewError::Store(StoreError::NotFound {
                table: Table::Orders,
                ..
            })
        ));
        assert!(store.delete_shop("not-a-uuid").is_err());
    }

    #[test]
    fn delete_order_returns_row() {
        let mut fixture = StoreFixture::new().with_shop("A").with_order("Latte");
        let order = fixture.orders[0].clone();
        let removed = fixture.store.delete_order(&order.id.to_string()).unwrap();
        assert_eq!(removed, order);
        assert!(
            fixture
                .store
                .select_orders(&OrderQuery::default())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn simulated_write_error_surfaces_message() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulated_write_error(Some("disk full"));
        let err = store.insert_shop(&new_shop("A")).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(store.backend().write_count(), 0);

        store.backend().set_simulated_write_error(None);
        store.insert_shop(&new_shop("A")).unwrap();
        assert_eq!(store.backend().write_count(), 1);
    }
}
