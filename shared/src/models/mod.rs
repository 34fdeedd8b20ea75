//! Data models
//!
//! Shared between the directory client and any API consumer.
//! All IDs are `String` (backend uses Mongo-style object IDs, so
//! deserialization accepts `_id` as an alias for `id`).

pub mod department;
pub mod employee;
pub mod role;

// Re-exports
pub use department::*;
pub use employee::*;
pub use role::*;
