use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use despensa_core::MealPlan;

#[utoipa::path(
    get,
    path = "/api/meal-plans/{id}",
    tag = "meal_plans",
    params(
        ("id" = String, Path, description = "Meal plan ID")
    ),
    responses(
        (status = 200, description = "Meal plan", body = MealPlan),
        (status = 404, description = "Meal plan not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.meal_plans.get_meal_plan_by_id(&id).await {
        Ok(Some(plan)) => (StatusCode::OK, Json(plan)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::NOT_FOUND, "Meal plan not found"),
        Err(e) => store_failure("Failed to get meal plan", e),
    }
}
