//! Route configuration module.

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{health_handler, place_order_handler, readiness_handler};
use crate::api::openapi::ApiDoc;
use crate::api::state::AppState;

/// Creates and configures all application routes.
///
/// # Routes
///
/// ## Health Check Routes
/// - `GET /health` - Liveness probe
/// - `GET /ready` - Readiness probe
///
/// ## API Routes
/// - `POST /api/order` - Submit an order
///
/// ## Documentation Routes
/// - `GET /docs` - Swagger UI
/// - `GET /api-docs/openapi.json` - OpenAPI document
pub fn create_routes(state: AppState) -> Router {
    // Order API routes
    let api_routes = Router::new().route("/order", post(place_order_handler));

    // Main router
    Router::new()
        // Health check routes
        .route("/health", get(health_handler))
        .route("/ready", get(readiness_handler))
        // API routes
        .nest("/api", api_routes)
        // Shared state
        .with_state(state)
        // API documentation
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
