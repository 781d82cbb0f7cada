//! Model module.
//!
//! Contains domain entities and repository pattern for data access.

pub mod order;

pub use order::*;
