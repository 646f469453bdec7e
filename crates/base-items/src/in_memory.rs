use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shoppinglist_core::{BaseItemId, StoreError, StoreResult};

use crate::database::BaseItemDatabase;
use crate::model::BaseItem;

/// In-memory base item store.
///
/// Every operation performs at most one map mutation under the write lock, so
/// the map is consistent even after a panicking holder; poisoned locks are
/// recovered rather than reported.
#[derive(Debug, Default)]
pub struct InMemoryBaseItemDatabase {
    items: RwLock<HashMap<BaseItemId, BaseItem>>,
}

impl InMemoryBaseItemDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<BaseItemId, BaseItem>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<BaseItemId, BaseItem>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BaseItemDatabase for InMemoryBaseItemDatabase {
    fn clear(&self) {
        self.write_guard().clear();
    }

    fn create(&self, item: BaseItem) -> StoreResult<()> {
        let mut items = self.write_guard();
        if items.contains_key(&item.id) {
            tracing::debug!(id = %item.id, "create rejected: id already stored");
            return Err(StoreError::AlreadyExists(item.id));
        }
        items.insert(item.id.clone(), item);
        Ok(())
    }

    fn read(&self, id: &BaseItemId) -> StoreResult<BaseItem> {
        self.read_guard()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn read_all(&self) -> Vec<BaseItem> {
        self.read_guard().values().cloned().collect()
    }

    fn update(&self, item: BaseItem) -> StoreResult<()> {
        let mut items = self.write_guard();
        match items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item;
                Ok(())
            }
            None => {
                tracing::debug!(id = %item.id, "update rejected: id not stored");
                Err(StoreError::NotFound(item.id))
            }
        }
    }

    fn delete(&self, id: &BaseItemId) -> StoreResult<()> {
        match self.write_guard().remove(id) {
            Some(_) => Ok(()),
            None => {
                tracing::debug!(%id, "delete rejected: id not stored");
                Err(StoreError::NotFound(id.clone()))
            }
        }
    }
}
