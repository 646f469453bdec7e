//! `shoppinglist-core`: shared building blocks for the shopping list service.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{StoreError, StoreResult};
pub use id::{BaseItemId, UserId};
