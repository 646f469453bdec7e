//! Base items module (shopping-list staples).
//!
//! Layering, leaf-first:
//! - `model`: the `BaseItem` record and the `CreateRequest` input
//! - `database`: keyed storage enforcing id uniqueness/existence
//! - `provider`: id generation on create, pass-through for everything else
//! - `factory`: constructors returning the trait objects the HTTP layer wires up

pub mod database;
pub mod factory;
pub mod in_memory;
pub mod model;
pub mod provider;

#[cfg(test)]
pub(crate) mod test_data;

pub use database::BaseItemDatabase;
pub use in_memory::InMemoryBaseItemDatabase;
pub use model::{BaseItem, CreateRequest};
pub use provider::{BaseItemProvider, DefaultBaseItemProvider};

pub use shoppinglist_core::{BaseItemId, StoreError, StoreResult, UserId};
