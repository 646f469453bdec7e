use std::sync::Arc;

use shoppinglist_base_items::{factory, BaseItemDatabase, BaseItemProvider};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub base_items: Arc<dyn BaseItemProvider>,
}

impl AppServices {
    pub fn new(base_items: Arc<dyn BaseItemProvider>) -> Self {
        Self { base_items }
    }

    /// Services over an existing store (lets tests seed or inspect it).
    pub fn with_database(database: Arc<dyn BaseItemDatabase>) -> Self {
        Self::new(factory::provider(database))
    }
}

/// Default wiring: a fresh in-memory store behind the default provider.
pub fn build_services() -> AppServices {
    AppServices::with_database(factory::database())
}
