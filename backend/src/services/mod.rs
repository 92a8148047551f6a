//! Business logic services for the Weather Forecast Service

pub mod forecast;

pub use forecast::ForecastService;
