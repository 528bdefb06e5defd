use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use despensa_core::{plan_calendar, WeekDay};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MealPlanDaysResponse {
    pub days: Vec<WeekDay>,
}

/// Calendar view of a plan: every day with its lunch and dinner
#[utoipa::path(
    get,
    path = "/api/meal-plans/{id}/days",
    tag = "meal_plans",
    params(
        ("id" = String, Path, description = "Meal plan ID")
    ),
    responses(
        (status = 200, description = "Plan days", body = MealPlanDaysResponse),
        (status = 404, description = "Meal plan not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_meal_plan_days(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.meal_plans.get_meal_plan_by_id(&id).await {
        Ok(Some(plan)) => {
            let days = plan_calendar(&plan, Utc::now().date_naive());
            (StatusCode::OK, Json(MealPlanDaysResponse { days })).into_response()
        }
        Ok(None) => ErrorResponse::response(StatusCode::NOT_FOUND, "Meal plan not found"),
        Err(e) => store_failure("Failed to get meal plan", e),
    }
}
