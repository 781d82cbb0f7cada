//! Order number generation module.

use uuid::Uuid;

/// Generates a globally unique order number.
#[must_use]
pub fn gen_order_number() -> String {
    Uuid::new_v4().to_string()
}
