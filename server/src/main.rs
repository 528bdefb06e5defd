mod api;
mod config;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use despensa_core::{JsonFileStore, MealPlanStore, PantryStore, RecipeStore, ShoppingListStore};
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

use config::ServerConfig;

/// Document stores shared by every handler.
pub struct Stores {
    pub shopping: Arc<dyn ShoppingListStore>,
    pub pantry: Arc<dyn PantryStore>,
    pub recipes: Arc<dyn RecipeStore>,
    pub meal_plans: Arc<dyn MealPlanStore>,
}

impl Stores {
    /// Serve every document kind from one store.
    pub fn shared<S>(store: S) -> Self
    where
        S: ShoppingListStore + PantryStore + RecipeStore + MealPlanStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            shopping: store.clone(),
            pantry: store.clone(),
            recipes: store.clone(),
            meal_plans: store,
        }
    }
}

/// Application state shared across all handlers
pub type AppState = Arc<Stores>;

fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the full application: API routes, Swagger UI and request tracing.
pub fn app(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .merge(api::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi()
            .to_pretty_json()
            .expect("OpenAPI spec serializes");
        println!("{}", spec);
        return;
    }

    init_telemetry();

    let config = ServerConfig::from_env();
    let store = JsonFileStore::from_config(&config.store);
    tracing::info!("Using data directory {}", store.data_dir().display());

    let state: AppState = Arc::new(Stores::shared(store));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", config.bind_addr, e));

    tracing::info!(
        "Server listening on {}",
        listener
            .local_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| config.bind_addr.clone())
    );
    tracing::info!("Swagger UI available at /swagger-ui/");

    axum::serve(listener, app(state))
        .await
        .expect("Server error");
}
