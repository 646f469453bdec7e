//! Fixtures shared by the unit tests in this crate.

use uuid::Uuid;

use crate::in_memory::InMemoryBaseItemDatabase;
use crate::model::BaseItem;
use crate::BaseItemDatabase;

pub fn base_item() -> BaseItem {
    let id = Uuid::new_v4().to_string();
    let name = format!("item-{}", &id[..8]);
    let quantity = (Uuid::new_v4().as_u128() % 100) as i32;
    BaseItem::new(id, name, quantity)
}

pub fn base_items(count: usize) -> Vec<BaseItem> {
    (0..count).map(|_| base_item()).collect()
}

pub fn cleared_database() -> InMemoryBaseItemDatabase {
    let db = InMemoryBaseItemDatabase::new();
    db.clear();
    db
}

pub fn database_with_items(count: usize) -> (InMemoryBaseItemDatabase, Vec<BaseItem>) {
    let db = cleared_database();
    let items = base_items(count);
    for item in &items {
        db.create(item.clone()).unwrap();
    }
    (db, items)
}
