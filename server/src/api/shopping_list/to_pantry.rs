use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use despensa_core::{move_shopping_item_to_pantry, PantryItem};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MoveToPantryResponse {
    /// False when the pantry already had an item with this name
    pub added: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantry_item: Option<PantryItem>,
}

/// Record a shopping list item as on hand. The item stays on the list.
#[utoipa::path(
    post,
    path = "/api/shopping-list/{id}/to-pantry",
    tag = "shopping_list",
    params(
        ("id" = String, Path, description = "Shopping list item ID")
    ),
    responses(
        (status = 200, description = "Pantry updated", body = MoveToPantryResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn move_to_pantry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let list = match state.shopping.get_shopping_list().await {
        Ok(list) => list,
        Err(e) => return store_failure("Failed to load shopping list", e),
    };

    let Some(item) = list.items.into_iter().find(|i| i.id == id) else {
        return ErrorResponse::response(StatusCode::NOT_FOUND, "Item not found");
    };

    match move_shopping_item_to_pantry(state.pantry.as_ref(), &item.text).await {
        Ok(pantry_item) => (
            StatusCode::OK,
            Json(MoveToPantryResponse {
                added: pantry_item.is_some(),
                pantry_item,
            }),
        )
            .into_response(),
        Err(e) => store_failure("Failed to update pantry", e),
    }
}
