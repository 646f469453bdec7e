use axum::Router;

pub mod base_items;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new().nest("/api/baseitem", base_items::router())
}
