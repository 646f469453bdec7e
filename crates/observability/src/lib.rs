//! Tracing and logging setup shared by the service binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{init, init_with_default, DEFAULT_FILTER};
