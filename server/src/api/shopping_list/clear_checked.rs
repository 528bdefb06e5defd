use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::clear_checked_items;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClearCheckedResponse {
    pub deleted_count: usize,
}

#[utoipa::path(
    delete,
    path = "/api/shopping-list/clear-checked",
    tag = "shopping_list",
    responses(
        (status = 200, description = "Checked items cleared", body = ClearCheckedResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn clear_checked(State(state): State<AppState>) -> impl IntoResponse {
    match clear_checked_items(state.shopping.as_ref()).await {
        Ok(deleted_count) => (
            StatusCode::OK,
            Json(ClearCheckedResponse { deleted_count }),
        )
            .into_response(),
        Err(e) => store_failure("Failed to clear checked items", e),
    }
}
