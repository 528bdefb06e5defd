use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use despensa_core::{create_empty_meal_plan, MealPlan, MealPlanError};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMealPlanRequest {
    pub name: String,
    /// First day of the plan (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Between 1 and 52
    pub num_weeks: u32,
}

#[utoipa::path(
    post,
    path = "/api/meal-plans",
    tag = "meal_plans",
    request_body = CreateMealPlanRequest,
    responses(
        (status = 201, description = "Meal plan created", body = MealPlan),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_meal_plan(
    State(state): State<AppState>,
    Json(request): Json<CreateMealPlanRequest>,
) -> impl IntoResponse {
    let name = request.name.trim();
    if name.is_empty() {
        return ErrorResponse::response(StatusCode::BAD_REQUEST, "Name is required");
    }

    let plan = match create_empty_meal_plan(name, request.start_date, request.num_weeks) {
        Ok(plan) => plan,
        Err(MealPlanError::InvalidRange(message)) => {
            return ErrorResponse::response(StatusCode::BAD_REQUEST, &message)
        }
        Err(e) => return store_failure("Failed to create meal plan", e),
    };

    match state.meal_plans.save_meal_plan(&plan).await {
        Ok(()) => {
            tracing::info!(plan_id = %plan.id, weeks = request.num_weeks, "meal plan created");
            (StatusCode::CREATED, Json(plan)).into_response()
        }
        Err(e) => store_failure("Failed to create meal plan", e),
    }
}
