use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use despensa_core::remove_item;

#[utoipa::path(
    delete,
    path = "/api/shopping-list/{id}",
    tag = "shopping_list",
    params(
        ("id" = String, Path, description = "Shopping list item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match remove_item(state.shopping.as_ref(), &id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => ErrorResponse::response(StatusCode::NOT_FOUND, "Item not found"),
        Err(e) => store_failure("Failed to delete item", e),
    }
}
