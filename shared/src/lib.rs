//! Shared types for the employee directory
//!
//! Data models and API payload types used across the directory crates.
//! All wire formats follow the backend's camelCase JSON conventions.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
