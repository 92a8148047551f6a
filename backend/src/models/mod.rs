//! Database models for the Weather Forecast Service
//!
//! Re-exports the forecast schema types from the shared crate

pub use shared::models::*;
