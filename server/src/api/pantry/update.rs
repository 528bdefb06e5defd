use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use despensa_core::{set_pantry_item_category, PantryCategory, PantryItem};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePantryItemRequest {
    pub category: PantryCategory,
}

#[utoipa::path(
    put,
    path = "/api/pantry/{id}",
    tag = "pantry",
    params(
        ("id" = String, Path, description = "Pantry item ID")
    ),
    request_body = UpdatePantryItemRequest,
    responses(
        (status = 200, description = "Item updated", body = PantryItem),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_pantry_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePantryItemRequest>,
) -> impl IntoResponse {
    match set_pantry_item_category(state.pantry.as_ref(), &id, request.category).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::NOT_FOUND, "Item not found"),
        Err(e) => store_failure("Failed to update pantry item", e),
    }
}
