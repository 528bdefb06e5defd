use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use despensa_core::clear_all_items;

#[utoipa::path(
    delete,
    path = "/api/shopping-list",
    tag = "shopping_list",
    responses(
        (status = 204, description = "List emptied and clear time recorded"),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn clear_all(State(state): State<AppState>) -> impl IntoResponse {
    match clear_all_items(state.shopping.as_ref()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_failure("Failed to clear shopping list", e),
    }
}
