//! Store error model.

use thiserror::Error;

use crate::id::BaseItemId;

/// Result type used by stores and the providers layered over them.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Only existence and uniqueness failures exist; callers (e.g. the HTTP layer)
/// decide how to represent them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An entry with this identifier is already stored.
    #[error("already exists: {0}")]
    AlreadyExists(BaseItemId),

    /// No entry with this identifier is stored.
    #[error("not found: {0}")]
    NotFound(BaseItemId),
}

impl StoreError {
    pub fn already_exists(id: impl Into<BaseItemId>) -> Self {
        Self::AlreadyExists(id.into())
    }

    pub fn not_found(id: impl Into<BaseItemId>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}
