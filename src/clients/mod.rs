//! Outbound service clients.

pub mod inventory;

pub use inventory::InventoryClient;
