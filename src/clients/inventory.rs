//! Inventory service client module.
//!
//! Typed HTTP binding for the downstream inventory service.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::config::APP_CONFIG;
use crate::error::AppResult;

/// Client for the inventory service stock-check endpoint.
///
/// Wraps a pooled `reqwest` client with timeouts and pre-configured
/// headers. Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    /// Creates a client for the given inventory service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(APP_CONFIG.inventory_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(60))
            .default_headers(default_headers)
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the `INVENTORY_SERVICE_URL` configuration.
    pub fn from_config() -> Self {
        Self::new(APP_CONFIG.inventory_service_url.clone())
    }

    /// Checks whether the given SKU is available at the requested quantity.
    ///
    /// Issues `GET /api/inventory?skuCode=<sku>&quantity=<n>` and decodes
    /// the boolean response body. Non-2xx responses and transport failures
    /// surface as `AppError::Inventory`.
    pub async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> AppResult<bool> {
        let url = format!("{}/api/inventory", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("skuCode", sku_code.to_string()),
                ("quantity", quantity.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let in_stock = response.json::<bool>().await?;

        tracing::debug!(
            sku_code = %sku_code,
            quantity = quantity,
            in_stock = in_stock,
            "Inventory check completed"
        );

        Ok(in_stock)
    }
}
