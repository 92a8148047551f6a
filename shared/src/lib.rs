//! Shared types and models for the Weather Forecast Service
//!
//! This crate contains the forecast schema, input types, validation rules
//! and seed-data generation shared between the backend and its test suites.

pub mod models;
pub mod seed;
pub mod types;
pub mod validation;

pub use models::*;
pub use seed::*;
pub use types::*;
pub use validation::*;
