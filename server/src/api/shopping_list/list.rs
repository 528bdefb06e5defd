use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::ShoppingList;

#[utoipa::path(
    get,
    path = "/api/shopping-list",
    tag = "shopping_list",
    responses(
        (status = 200, description = "The shopping list", body = ShoppingList),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_items(State(state): State<AppState>) -> impl IntoResponse {
    match state.shopping.get_shopping_list().await {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => store_failure("Failed to load shopping list", e),
    }
}
