//! Request/response schema module.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Response body returned when an order is accepted.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully";

/// Order submission request structure.
///
/// Uses validator for validation rules. `id` and `orderNumber` may be
/// supplied by clients but are ignored; both are server-assigned.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Client-supplied identifier (ignored)
    #[serde(default)]
    pub id: Option<i64>,

    /// Client-supplied order number (ignored, server-generated)
    #[serde(default)]
    pub order_number: Option<String>,

    /// Product SKU code (required)
    #[validate(length(min = 1, message = "SKU code is required"))]
    #[schema(example = "samsung_tv_2024")]
    pub sku_code: String,

    /// Unit price (required, must be greater than zero)
    pub price: Decimal,

    /// Quantity to order (required, at least 1)
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 10)]
    pub quantity: i32,
}

/// Validates an order price.
///
/// # Validation Rules
///
/// - Must be strictly greater than zero
pub fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Price must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    // ============ validate_price tests ============

    #[test]
    fn test_validate_price_positive() {
        assert!(validate_price(Decimal::from(1)).is_ok());
        assert!(validate_price(Decimal::from(5000)).is_ok());
        assert!(validate_price(Decimal::new(1, 2)).is_ok()); // 0.01
    }

    #[test]
    fn test_validate_price_zero() {
        let result = validate_price(Decimal::ZERO);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_price_negative() {
        let result = validate_price(Decimal::from(-1));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_price_large_value() {
        assert!(validate_price(Decimal::from(i64::MAX)).is_ok());
    }

    // ============ OrderRequest tests ============

    #[test]
    fn test_order_request_deserialize_minimal() {
        let json = r#"{"skuCode": "samsung_tv_2024", "price": 5000, "quantity": 10}"#;
        let req: OrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.sku_code, "samsung_tv_2024");
        assert_eq!(req.price, Decimal::from(5000));
        assert_eq!(req.quantity, 10);
        assert!(req.id.is_none());
        assert!(req.order_number.is_none());
    }

    #[test]
    fn test_order_request_deserialize_full() {
        let json = r#"{
            "id": 7,
            "orderNumber": "client-supplied",
            "skuCode": "iphone_15",
            "price": "999.99",
            "quantity": 1
        }"#;
        let req: OrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, Some(7));
        assert_eq!(req.order_number, Some("client-supplied".to_string()));
        assert_eq!(req.price, Decimal::new(99_999, 2));
    }

    #[test]
    fn test_order_request_deserialize_rejects_missing_sku() {
        let json = r#"{"price": 5000, "quantity": 10}"#;
        let result = serde_json::from_str::<OrderRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_request_deserialize_rejects_missing_price() {
        let json = r#"{"skuCode": "samsung_tv_2024", "quantity": 10}"#;
        let result = serde_json::from_str::<OrderRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_request_validate_ok() {
        let req = OrderRequest {
            id: None,
            order_number: None,
            sku_code: "samsung_tv_2024".to_string(),
            price: Decimal::from(5000),
            quantity: 10,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_order_request_validate_empty_sku() {
        let req = OrderRequest {
            id: None,
            order_number: None,
            sku_code: String::new(),
            price: Decimal::from(5000),
            quantity: 10,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_order_request_validate_zero_quantity() {
        let req = OrderRequest {
            id: None,
            order_number: None,
            sku_code: "samsung_tv_2024".to_string(),
            price: Decimal::from(5000),
            quantity: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_order_request_validate_negative_quantity() {
        let req = OrderRequest {
            id: None,
            order_number: None,
            sku_code: "samsung_tv_2024".to_string(),
            price: Decimal::from(5000),
            quantity: -5,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_order_request_clone() {
        let req = OrderRequest {
            id: Some(1),
            order_number: None,
            sku_code: "pixel_9".to_string(),
            price: Decimal::from(799),
            quantity: 2,
        };
        let cloned = req.clone();
        assert_eq!(req.sku_code, cloned.sku_code);
        assert_eq!(req.price, cloned.price);
        assert_eq!(req.quantity, cloned.quantity);
    }

    #[test]
    fn test_order_request_debug() {
        let req = OrderRequest {
            id: None,
            order_number: None,
            sku_code: "galaxy_s25".to_string(),
            price: Decimal::from(1099),
            quantity: 1,
        };
        let debug_str = format!("{req:?}");
        assert!(debug_str.contains("OrderRequest"));
        assert!(debug_str.contains("galaxy_s25"));
    }

    #[test]
    fn test_order_request_price_from_decimal_string() {
        let json = r#"{"skuCode": "sku", "price": "12.34", "quantity": 1}"#;
        let req: OrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.price, Decimal::new(1234, 2));
    }

    // ============ ORDER_PLACED_MESSAGE tests ============

    #[test]
    fn test_order_placed_message_exact_wording() {
        assert_eq!(ORDER_PLACED_MESSAGE, "Order placed successfully");
    }
}
