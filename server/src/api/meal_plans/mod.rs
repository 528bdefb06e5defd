pub mod create;
pub mod current;
pub mod days;
pub mod get;
pub mod meals;
pub mod shopping_list;

use crate::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/meal-plans endpoints (mounted at /api/meal-plans)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create_meal_plan))
        .route("/current", get(current::get_current_meal_plan))
        .route("/{id}", get(get::get_meal_plan))
        .route("/{id}/days", get(days::get_meal_plan_days))
        .route("/{id}/meals", post(meals::add_meal))
        .route("/{id}/meals/{meal_id}", delete(meals::remove_meal))
        .route(
            "/{id}/shopping-list",
            post(shopping_list::generate_shopping_list),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_meal_plan,
        current::get_current_meal_plan,
        get::get_meal_plan,
        days::get_meal_plan_days,
        meals::add_meal,
        meals::remove_meal,
        shopping_list::generate_shopping_list
    ),
    components(schemas(
        despensa_core::MealPlan,
        despensa_core::PlannedMeal,
        despensa_core::MealType,
        despensa_core::WeekDay,
        despensa_core::PlanShoppingSummary,
        create::CreateMealPlanRequest,
        days::MealPlanDaysResponse,
        meals::AddMealRequest,
    ))
)]
pub struct ApiDoc;
