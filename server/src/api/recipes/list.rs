use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use despensa_core::{search_recipes, Recipe};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Case-insensitive text matched against title and ingredients
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<Recipe>,
}

/// List recipes, newest first, optionally filtered by `q`
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Matching recipes", body = ListRecipesResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    match state.recipes.list_recipes().await {
        Ok(recipes) => {
            let recipes = search_recipes(recipes, params.q.as_deref().unwrap_or_default());
            (StatusCode::OK, Json(ListRecipesResponse { recipes })).into_response()
        }
        Err(e) => store_failure("Failed to list recipes", e),
    }
}
