pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::{get, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/pantry endpoints (mounted at /api/pantry)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_pantry).post(create::create_pantry_item))
        .route(
            "/{id}",
            put(update::update_pantry_item).delete(delete::delete_pantry_item),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_pantry,
        create::create_pantry_item,
        update::update_pantry_item,
        delete::delete_pantry_item
    ),
    components(schemas(
        despensa_core::Pantry,
        despensa_core::PantryItem,
        despensa_core::PantryCategory,
        create::CreatePantryItemRequest,
        update::UpdatePantryItemRequest,
    ))
)]
pub struct ApiDoc;
