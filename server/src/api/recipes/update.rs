use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use despensa_core::{Recipe, RecipeUpdate};

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipeUpdate,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RecipeUpdate>,
) -> impl IntoResponse {
    if request
        .title
        .as_deref()
        .is_some_and(|title| title.trim().is_empty())
    {
        return ErrorResponse::response(StatusCode::BAD_REQUEST, "Title cannot be empty");
    }

    match despensa_core::update_recipe(state.recipes.as_ref(), &id, request).await {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::NOT_FOUND, "Recipe not found"),
        Err(e) => store_failure("Failed to update recipe", e),
    }
}
