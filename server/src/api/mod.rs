pub mod meal_plans;
pub mod pantry;
pub mod recipes;
pub mod shopping_list;


use crate::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::Serialize;
use std::fmt;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn response(status: StatusCode, error: &str) -> Response {
        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
            .into_response()
    }
}

/// Log a store failure and answer 500 with a short message.
pub fn store_failure(message: &str, err: impl fmt::Display) -> Response {
    tracing::error!("{}: {}", message, err);
    ErrorResponse::response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// All API routes, before state is attached.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/shopping-list", shopping_list::router())
        .nest("/api/pantry", pantry::router())
        .nest("/api/recipes", recipes::router())
        .nest("/api/meal-plans", meal_plans::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Despensa", description = "Recipes, pantry, meal plans and the shopping list"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        shopping_list::ApiDoc::openapi(),
        pantry::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        meal_plans::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
