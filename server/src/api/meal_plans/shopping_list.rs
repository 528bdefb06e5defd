use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use despensa_core::{generate_shopping_list_from_plan, PlanShoppingSummary};

/// Merge the ingredients of every recipe in the plan into the shopping list
#[utoipa::path(
    post,
    path = "/api/meal-plans/{id}/shopping-list",
    tag = "meal_plans",
    params(
        ("id" = String, Path, description = "Meal plan ID")
    ),
    responses(
        (status = 200, description = "Shopping list updated", body = PlanShoppingSummary),
        (status = 404, description = "Meal plan not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn generate_shopping_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let plan = match state.meal_plans.get_meal_plan_by_id(&id).await {
        Ok(Some(plan)) => plan,
        Ok(None) => return ErrorResponse::response(StatusCode::NOT_FOUND, "Meal plan not found"),
        Err(e) => return store_failure("Failed to get meal plan", e),
    };

    match generate_shopping_list_from_plan(
        &plan,
        state.recipes.as_ref(),
        state.shopping.as_ref(),
        state.pantry.as_ref(),
    )
    .await
    {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => store_failure("Failed to generate shopping list", e),
    }
}
