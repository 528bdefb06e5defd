use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::{NewRecipe, Recipe};

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = NewRecipe,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<NewRecipe>,
) -> impl IntoResponse {
    match despensa_core::create_recipe(state.recipes.as_ref(), request).await {
        Ok(Some(recipe)) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::BAD_REQUEST, "Title is required"),
        Err(e) => store_failure("Failed to create recipe", e),
    }
}
