use crate::api::{store_failure, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use despensa_core::Pantry;

#[utoipa::path(
    get,
    path = "/api/pantry",
    tag = "pantry",
    responses(
        (status = 200, description = "Pantry contents", body = Pantry),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_pantry(State(state): State<AppState>) -> impl IntoResponse {
    match state.pantry.get_pantry().await {
        Ok(pantry) => (StatusCode::OK, Json(pantry)).into_response(),
        Err(e) => store_failure("Failed to load pantry", e),
    }
}
