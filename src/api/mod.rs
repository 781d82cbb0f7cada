//! API module.
//!
//! Contains HTTP handlers, routes, schemas, and shared state.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod state;

// These types are used in integration tests
#[allow(unused_imports)]
pub use handlers::{HealthResponse, ReadinessResponse};
pub use routes::create_routes;
pub use state::AppState;
