//! Base item provider: request shaping over a `BaseItemDatabase`.

use std::sync::Arc;

use shoppinglist_core::{BaseItemId, StoreResult};

use crate::database::BaseItemDatabase;
use crate::model::{BaseItem, CreateRequest};

/// Operations exposed to callers such as the HTTP layer.
///
/// Store errors are propagated unchanged.
pub trait BaseItemProvider: Send + Sync {
    fn clear(&self);

    /// Create an item with a freshly generated id and return it.
    fn create(&self, request: CreateRequest) -> StoreResult<BaseItem>;

    fn read(&self, id: &BaseItemId) -> StoreResult<BaseItem>;

    fn read_all(&self) -> Vec<BaseItem>;

    fn read_many(&self, ids: &[BaseItemId]) -> StoreResult<Vec<BaseItem>>;

    fn update(&self, item: BaseItem) -> StoreResult<()>;

    fn delete(&self, id: &BaseItemId) -> StoreResult<()>;
}

impl<P> BaseItemProvider for Arc<P>
where
    P: BaseItemProvider + ?Sized,
{
    fn clear(&self) {
        (**self).clear()
    }

    fn create(&self, request: CreateRequest) -> StoreResult<BaseItem> {
        (**self).create(request)
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

/// Provider backed by any `BaseItemDatabase`.
#[derive(Debug, Clone)]
pub struct DefaultBaseItemProvider<D> {
    database: D,
}

impl<D> DefaultBaseItemProvider<D>
where
    D: BaseItemDatabase,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    #[cfg(test)]
    pub(crate) fn database(&self) -> &D {
        &self.database
    }
}

impl<D> BaseItemProvider for DefaultBaseItemProvider<D>
where
    D: BaseItemDatabase,
{
    fn clear(&self) {
        self.database.clear();
        tracing::info!("base items cleared");
    }

    fn create(&self, request: CreateRequest) -> StoreResult<BaseItem> {
        let item = BaseItem::new(
            BaseItemId::generate(),
            request.name,
            request.min_required_quantity_in_stock,
        );

        self.database.create(item.clone())?;
        tracing::info!(id = %item.id, name = %item.name, "base item created");
        Ok(item)
    }

    fn read(&self, id: &BaseItemId) -> StoreResult<BaseItem> {
        tracing::debug!(%id, "reading base item");
        self.database.read(id)
    }

    fn read_all(&self) -> Vec<BaseItem> {
        tracing::debug!("reading all base items");
        self.database.read_all()
    }

    fn read_many(&self, ids: &[BaseItemId]) -> StoreResult<Vec<BaseItem>> {
        tracing::debug!(count = ids.len(), "reading base items by id");
        self.database.read_many(ids)
    }

    fn update(&self, item: BaseItem) -> StoreResult<()> {
        let id = item.id.clone();
        self.database.update(item)?;
        tracing::info!(%id, "base item updated");
        Ok(())
    }

    fn delete(&self, id: &BaseItemId) -> StoreResult<()> {
        self.database.delete(id)?;
        tracing::info!(%id, "base item deleted");
        Ok(())
    }
}
