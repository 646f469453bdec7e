//! Constructors for the trait objects the service is wired from.

use std::sync::Arc;

use crate::database::BaseItemDatabase;
use crate::in_memory::InMemoryBaseItemDatabase;
use crate::provider::{BaseItemProvider, DefaultBaseItemProvider};

/// A fresh, empty in-memory store.
pub fn database() -> Arc<dyn BaseItemDatabase> {
    InMemoryBaseItemDatabase::arc()
}

/// A provider over `database`.
pub fn provider(database: Arc<dyn BaseItemDatabase>) -> Arc<dyn BaseItemProvider> {
    Arc::new(DefaultBaseItemProvider::new(database))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CreateRequest;

    #[test]
    fn database_starts_empty() {
        assert!(database().read_all().is_empty());
    }

    #[test]
    fn databases_are_independent() {
        let a = database();
        let b = database();
        let p = provider(Arc::clone(&a));

        let created = p.create(CreateRequest::new("Milk", 2)).unwrap();

        assert_eq!(a.read(&created.id).unwrap(), created);
        assert!(b.read(&created.id).unwrap_err().is_not_found());
    }

    #[test]
    fn provider_shares_the_given_database() {
        let db = database();
        let p = provider(Arc::clone(&db));

        let created = p.create(CreateRequest::new("Eggs", 6)).unwrap();
        db.delete(&created.id).unwrap();

        assert!(p.read(&created.id).unwrap_err().is_not_found());
    }
}
