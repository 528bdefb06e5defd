use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::{add_ingredients_to_shopping_list, MergeCounts};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_exclude_pantry() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddIngredientsRequest {
    /// Ingredient block: one per line, or comma-separated
    pub ingredients: String,
    /// Recipe recorded as the source of every merged line
    pub recipe_name: String,
    /// Skip ingredients the pantry already stocks
    #[serde(default = "default_exclude_pantry")]
    pub exclude_pantry: bool,
}

#[utoipa::path(
    post,
    path = "/api/shopping-list/ingredients",
    tag = "shopping_list",
    request_body = AddIngredientsRequest,
    responses(
        (status = 200, description = "Ingredients merged", body = MergeCounts),
        (status = 400, description = "Missing recipe name", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn add_ingredients(
    State(state): State<AppState>,
    Json(request): Json<AddIngredientsRequest>,
) -> impl IntoResponse {
    let recipe_name = request.recipe_name.trim();
    if recipe_name.is_empty() {
        return ErrorResponse::response(StatusCode::BAD_REQUEST, "Recipe name is required");
    }

    match add_ingredients_to_shopping_list(
        state.shopping.as_ref(),
        state.pantry.as_ref(),
        &request.ingredients,
        recipe_name,
        request.exclude_pantry,
    )
    .await
    {
        Ok(counts) => (StatusCode::OK, Json(counts)).into_response(),
        Err(e) => store_failure("Failed to add ingredients", e),
    }
}
