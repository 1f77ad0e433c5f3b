//! Fixtures shared by unit tests.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use shopfront_core::{Category, Price, Product, ProductId};

use crate::catalog::Catalog;
use crate::store::{KeyValueStore, MemoryStore, Storage, StoreError};

pub fn product(id: i32, name: &str, category: &str, price: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: Category::parse(category).unwrap(),
        price: Price::from_whole(price),
        original_price: Price::from_whole(price * 2),
        discount: 50,
        rating: 4.5,
        badge: "New".to_string(),
        description: format!("{name} description"),
        image: format!("img-{id}"),
    }
}

/// Five products across categories `A` and `B`.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        product(1, "Lamp", "A", 300),
        product(2, "Chair", "B", 100),
        product(3, "Desk", "A", 200),
        product(4, "Rug", "B", 50),
        product(5, "Vase", "A", 100),
    ])
    .unwrap()
}

pub fn logged_in_storage() -> Storage {
    let storage = Storage::in_memory();
    storage.set_logged_in(true).unwrap();
    storage
}

/// A memory store whose writes to chosen keys fail. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FlakyStore {
    data: Rc<MemoryStore>,
    failing: Rc<RefCell<HashSet<String>>>,
}

impl FlakyStore {
    /// Make every later `set` or `remove` of `key` fail.
    pub fn fail_writes_to(&self, key: &str) {
        self.failing.borrow_mut().insert(key.to_string());
    }

    fn check(&self, key: &str) -> Result<(), StoreError> {
        if self.failing.borrow().contains(key) {
            return Err(StoreError::Backend(format!("write to {key} refused")));
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.data.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check(key)?;
        self.data.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check(key)?;
        self.data.remove(key)
    }
}

/// Logged-in storage whose durable side is a [`FlakyStore`].
pub fn flaky_storage() -> (Storage, FlakyStore) {
    let durable = FlakyStore::default();
    let storage = Storage::new(durable.clone(), MemoryStore::new());
    storage.set_logged_in(true).unwrap();
    (storage, durable)
}
