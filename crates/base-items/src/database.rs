//! Base item storage abstraction.

use std::sync::Arc;

use shoppinglist_core::{BaseItemId, StoreResult};

use crate::model::BaseItem;

/// Keyed base item storage.
///
/// Implementations own id uniqueness and existence checks and contain no
/// business logic.
pub trait BaseItemDatabase: Send + Sync {
    /// Remove every stored item.
    fn clear(&self);

    /// Insert a new item. Fails with `AlreadyExists` if the id is taken.
    fn create(&self, item: BaseItem) -> StoreResult<()>;

    /// Fetch a single item. Fails with `NotFound` if absent.
    fn read(&self, id: &BaseItemId) -> StoreResult<BaseItem>;

    /// All stored items, in no particular order.
    fn read_all(&self) -> Vec<BaseItem>;

    /// Fetch several items, in the order of `ids`.
    ///
    /// All-or-nothing: the first missing id fails the whole call with
    /// `NotFound`. Each id is read independently, so concurrent writers may
    /// interleave between reads.
    fn read_many(&self, ids: &[BaseItemId]) -> StoreResult<Vec<BaseItem>> {
        ids.iter().map(|id| self.read(id)).collect()
    }

    /// Replace an existing item wholesale. Fails with `NotFound` if absent.
    fn update(&self, item: BaseItem) -> StoreResult<()>;

    /// Remove an item. Fails with `NotFound` if absent.
    fn delete(&self, id: &BaseItemId) -> StoreResult<()>;
}

impl<S> BaseItemDatabase for Arc<S>
where
    S: BaseItemDatabase + ?Sized,
{
    fn clear(&self) {
        (**self).clear()
    }

    fn create(&self, item: BaseItem) -> StoreResult<()> {
        (**self).create(item)
    }

    fn read(&self, id: &BaseItemId) -> StoreResult<BaseItem> {
        (**self).read(id)
    }

    fn read_all(&self) -> Vec<BaseItem> {
        (**self).read_all()
    }

    fn read_many(&self, ids: &[BaseItemId]) -> StoreResult<Vec<BaseItem>> {
        (**self).read_many(ids)
    }

    fn update(&self, item: BaseItem) -> StoreResult<()> {
        (**self).update(item)
    }

    fn delete(&self, id: &BaseItemId) -> StoreResult<()> {
        (**self).delete(id)
    }
}
