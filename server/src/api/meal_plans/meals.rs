use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use despensa_core::{add_meal_to_day, remove_meal_from_day, MealPlanError, MealType, PlannedMeal};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddMealRequest {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: String,
    pub recipe_title: String,
}

fn meal_plan_failure(message: &str, err: MealPlanError) -> Response {
    match err {
        MealPlanError::NotFound(_) => {
            ErrorResponse::response(StatusCode::NOT_FOUND, "Meal plan not found")
        }
        MealPlanError::InvalidRange(reason) => {
            ErrorResponse::response(StatusCode::BAD_REQUEST, &reason)
        }
        MealPlanError::Store(e) => store_failure(message, e),
    }
}

/// Put a recipe in a lunch or dinner slot, replacing what was there
#[utoipa::path(
    post,
    path = "/api/meal-plans/{id}/meals",
    tag = "meal_plans",
    params(
        ("id" = String, Path, description = "Meal plan ID")
    ),
    request_body = AddMealRequest,
    responses(
        (status = 201, description = "Meal planned", body = PlannedMeal),
        (status = 404, description = "Meal plan not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn add_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddMealRequest>,
) -> impl IntoResponse {
    match add_meal_to_day(
        state.meal_plans.as_ref(),
        &id,
        request.date,
        request.meal_type,
        &request.recipe_id,
        &request.recipe_title,
    )
    .await
    {
        Ok(meal) => (StatusCode::CREATED, Json(meal)).into_response(),
        Err(e) => meal_plan_failure("Failed to add meal", e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/meal-plans/{id}/meals/{meal_id}",
    tag = "meal_plans",
    params(
        ("id" = String, Path, description = "Meal plan ID"),
        ("meal_id" = String, Path, description = "Planned meal ID")
    ),
    responses(
        (status = 204, description = "Meal removed"),
        (status = 404, description = "Meal plan not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn remove_meal(
    State(state): State<AppState>,
    Path((id, meal_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match remove_meal_from_day(state.meal_plans.as_ref(), &id, &meal_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => meal_plan_failure("Failed to remove meal", e),
    }
}
