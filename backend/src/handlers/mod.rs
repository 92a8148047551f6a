//! HTTP handlers for the Weather Forecast Service

pub mod forecast;
pub mod health;

pub use forecast::*;
pub use health::*;
