//! Domain models for the Weather Forecast Service

mod forecast;

pub use forecast::*;
