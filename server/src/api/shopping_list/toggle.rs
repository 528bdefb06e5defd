use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use despensa_core::{toggle_item as toggle, ShoppingItem};

#[utoipa::path(
    post,
    path = "/api/shopping-list/{id}/toggle",
    tag = "shopping_list",
    params(
        ("id" = String, Path, description = "Shopping list item ID")
    ),
    responses(
        (status = 200, description = "Item toggled", body = ShoppingItem),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn toggle_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match toggle(state.shopping.as_ref(), &id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::NOT_FOUND, "Item not found"),
        Err(e) => store_failure("Failed to update item", e),
    }
}
