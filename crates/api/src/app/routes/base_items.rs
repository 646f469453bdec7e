use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use shoppinglist_base_items::{BaseItem, BaseItemId, BaseItemProvider, CreateRequest};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_base_items).post(create_base_item).put(update_base_item))
        .route("/:id", get(get_base_item).delete(delete_base_item))
}

pub async fn list_base_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.base_items.read_all();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_base_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.base_items.read(&BaseItemId::new(id)) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_base_item(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<CreateRequest>,
) -> axum::response::Response {
    let item = match services.base_items.create(body) {
        Ok(item) => item,
        Err(e) => return errors::store_error_to_response(e),
    };

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), item.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(item)).into_response()
}

pub async fn update_base_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<BaseItem>,
) -> axum::response::Response {
    match services.base_items.update(body) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_base_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.base_items.delete(&BaseItemId::new(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
