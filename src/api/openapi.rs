//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::api::schemas::OrderRequest;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "0.1.0",
        description = "Order intake API with inventory verification."
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::api::handlers::place_order_handler,
        crate::api::handlers::health_handler,
        crate::api::handlers::readiness_handler,
    ),
    components(
        schemas(
            OrderRequest,
        )
    ),
    tags(
        (name = "Orders", description = "Order submission"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Order Service API");
        assert_eq!(spec.info.version, "0.1.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        let json_str = json.unwrap();
        assert!(json_str.contains("Order Service API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/order"));
        assert!(paths.paths.contains_key("/health"));
        assert!(paths.paths.contains_key("/ready"));
    }

    #[test]
    fn test_order_request_schema_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.schemas.contains_key("OrderRequest"));
    }
}
