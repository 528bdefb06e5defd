use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::{add_manual_item, ShoppingItem};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShoppingListItemRequest {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/api/shopping-list",
    tag = "shopping_list",
    request_body = CreateShoppingListItemRequest,
    responses(
        (status = 201, description = "Item created", body = ShoppingItem),
        (status = 400, description = "Blank text", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateShoppingListItemRequest>,
) -> impl IntoResponse {
    match add_manual_item(state.shopping.as_ref(), &request.text).await {
        Ok(Some(item)) => (StatusCode::CREATED, Json(item)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::BAD_REQUEST, "Item text is required"),
        Err(e) => store_failure("Failed to create shopping list item", e),
    }
}
