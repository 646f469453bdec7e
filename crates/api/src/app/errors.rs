use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shoppinglist_core::StoreError;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match &err {
        StoreError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        StoreError::AlreadyExists(_) => {
            json_error(StatusCode::CONFLICT, "already_exists", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
