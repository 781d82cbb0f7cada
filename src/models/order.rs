//! Order model module.
//!
//! Contains the order entity and repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppResult;

/// Order entity persisted in the `t_orders` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub sku_code: String,
    pub price: Decimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Struct for creating a new order record.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub sku_code: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// Order repository for database operations.
pub struct OrderRepository;

impl OrderRepository {
    /// Inserts a new order and returns the persisted row.
    pub async fn create(pool: &sqlx::PgPool, new_order: &NewOrder) -> AppResult<Order> {
        let order = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO t_orders (order_number, sku_code, price, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, order_number, sku_code, price, quantity, created_at, updated_at
            ",
        )
        .bind(&new_order.order_number)
        .bind(&new_order.sku_code)
        .bind(new_order.price)
        .bind(new_order.quantity)
        .fetch_one(pool)
        .await?;

        Ok(order)
    }
}
