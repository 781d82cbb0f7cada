//! HTTP request handler module.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::schemas::{validate_price, OrderRequest, ORDER_PLACED_MESSAGE};
use crate::api::state::AppState;
use crate::error::{AppError, AppResult, ValidationErrorExt};
use crate::models::{NewOrder, OrderRepository};
use crate::utils::gen_order_number;

/// Order submission handler.
///
/// Validates the request, verifies stock with the inventory service,
/// and persists the order with a server-generated order number.
///
/// # Route
///
/// `POST /api/order`
#[utoipa::path(
    post,
    path = "/api/order",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order placed", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid order payload"),
        (status = 409, description = "Requested SKU is not in stock"),
        (status = 503, description = "Inventory service unavailable")
    ),
    tag = "Orders"
)]
pub async fn place_order_handler(
    State(state): State<AppState>,
    Json(req_body): Json<OrderRequest>,
) -> AppResult<(StatusCode, &'static str)> {
    // 1. Validation
    req_body.validate().map_err(|e| e.to_validation_error())?;
    validate_price(req_body.price)?;

    // 2. Verify stock with the inventory service
    let in_stock = state
        .inventory
        .is_in_stock(&req_body.sku_code, req_body.quantity)
        .await?;

    if !in_stock {
        return Err(AppError::OutOfStock(req_body.sku_code));
    }

    // 3. Persist the order with a server-generated order number
    let new_order = NewOrder {
        order_number: gen_order_number(),
        sku_code: req_body.sku_code,
        price: req_body.price,
        quantity: req_body.quantity,
    };

    let order = OrderRepository::create(&state.db, &new_order).await?;

    tracing::info!(
        order_id = order.id,
        order_number = %order.order_number,
        sku_code = %order.sku_code,
        quantity = order.quantity,
        "Order placed"
    );

    Ok((StatusCode::CREATED, ORDER_PLACED_MESSAGE))
}

/// Health check response.
#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe handler.
///
/// Returns OK if the server is running. Used for Kubernetes liveness probe.
///
/// # Route
///
/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running")
    ),
    tag = "System"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check response.
#[derive(serde::Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Readiness probe handler.
///
/// Checks database connectivity. Used for Kubernetes readiness probe.
///
/// # Route
///
/// `GET /ready`
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service ready"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "System"
)]
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    // Check database connection
    let db_ok = sqlx::query("SELECT 1").fetch_one(&state.db).await.is_ok();

    let response = ReadinessResponse {
        status: if db_ok { "ok" } else { "degraded" },
        database: if db_ok { "connected" } else { "disconnected" },
    };

    if db_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
