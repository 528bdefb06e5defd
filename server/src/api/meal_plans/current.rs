use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::MealPlan;

/// The most recently created meal plan
#[utoipa::path(
    get,
    path = "/api/meal-plans/current",
    tag = "meal_plans",
    responses(
        (status = 200, description = "Current meal plan", body = MealPlan),
        (status = 404, description = "No meal plan yet", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_current_meal_plan(State(state): State<AppState>) -> impl IntoResponse {
    match state.meal_plans.get_current_meal_plan().await {
        Ok(Some(plan)) => (StatusCode::OK, Json(plan)).into_response(),
        Ok(None) => ErrorResponse::response(StatusCode::NOT_FOUND, "No meal plan"),
        Err(e) => store_failure("Failed to load current meal plan", e),
    }
}
