use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::{add_pantry_item, PantryCategory, PantryItem};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePantryItemRequest {
    pub name: String,
    pub category: PantryCategory,
    pub quantity: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/pantry",
    tag = "pantry",
    request_body = CreatePantryItemRequest,
    responses(
        (status = 201, description = "Item added", body = PantryItem),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 409, description = "Pantry already has an item with this name", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_pantry_item(
    State(state): State<AppState>,
    Json(request): Json<CreatePantryItemRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return ErrorResponse::response(StatusCode::BAD_REQUEST, "Item name is required");
    }

    match add_pantry_item(
        state.pantry.as_ref(),
        &request.name,
        request.category,
        request.quantity.as_deref(),
    )
    .await
    {
        Ok(Some(item)) => (StatusCode::CREATED, Json(item)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::CONFLICT, "Item already in pantry"),
        Err(e) => store_failure("Failed to add pantry item", e),
    }
}
