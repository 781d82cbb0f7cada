//! Application state module.
//!
//! Contains shared state for database and downstream service clients.

use sqlx::PgPool;

use crate::clients::InventoryClient;

/// Shared application state.
///
/// This struct holds references to shared resources like the database
/// pool and the inventory service client that handlers need access to.
#[derive(Clone)]
pub struct AppState {
    /// `PostgreSQL` connection pool
    pub db: PgPool,
    /// Inventory service client
    pub inventory: InventoryClient,
}

impl AppState {
    /// Creates a new `AppState` instance.
    #[must_use]
    pub const fn new(db: PgPool, inventory: InventoryClient) -> Self {
        Self { db, inventory }
    }
}
