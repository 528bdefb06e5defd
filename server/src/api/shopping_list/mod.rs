pub mod add_ingredients;
pub mod clear_all;
pub mod clear_checked;
pub mod create;
pub mod delete;
pub mod list;
pub mod to_pantry;
pub mod toggle;

use crate::AppState;
use axum::routing::{delete as delete_method, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/shopping-list endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_items)
                .post(create::create_item)
                .delete(clear_all::clear_all),
        )
        .route("/ingredients", post(add_ingredients::add_ingredients))
        .route(
            "/clear-checked",
            delete_method(clear_checked::clear_checked),
        )
        .route("/{id}", delete_method(delete::delete_item))
        .route("/{id}/toggle", post(toggle::toggle_item))
        .route("/{id}/to-pantry", post(to_pantry::move_to_pantry))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_items,
        create::create_item,
        add_ingredients::add_ingredients,
        toggle::toggle_item,
        delete::delete_item,
        clear_checked::clear_checked,
        clear_all::clear_all,
        to_pantry::move_to_pantry
    ),
    components(schemas(
        despensa_core::ShoppingList,
        despensa_core::ShoppingItem,
        despensa_core::MergeCounts,
        create::CreateShoppingListItemRequest,
        add_ingredients::AddIngredientsRequest,
        clear_checked::ClearCheckedResponse,
        to_pantry::MoveToPantryResponse,
    ))
)]
pub struct ApiDoc;
