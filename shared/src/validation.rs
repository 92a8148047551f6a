//! Validation utilities for the Weather Forecast Service
//!
//! Range checks applied at the API boundary, before anything reaches the
//! database.

use rust_decimal::Decimal;

use crate::models::{CreateForecastInput, UpdateForecastInput};

/// Forecast window length used when the caller does not ask for one
pub const DEFAULT_FORECAST_DAYS: i64 = 7;

/// Longest forecast window a single read may request
pub const MAX_FORECAST_DAYS: i64 = 30;

// ============================================================================
// Forecast Field Validations
// ============================================================================

/// Validate humidity is a percentage in 0-100
pub fn validate_humidity(humidity: i32) -> Result<(), &'static str> {
    if humidity < 0 || humidity > 100 {
        return Err("Humidity must be between 0 and 100");
    }
    Ok(())
}

/// Validate wind speed is non-negative
pub fn validate_wind_speed(wind_speed: Decimal) -> Result<(), &'static str> {
    if wind_speed < Decimal::ZERO {
        return Err("Wind speed cannot be negative");
    }
    Ok(())
}

/// Validate every range-constrained field of a create input
pub fn validate_create_input(input: &CreateForecastInput) -> Result<(), &'static str> {
    validate_humidity(input.humidity)?;
    validate_wind_speed(input.wind_speed)?;
    Ok(())
}

/// Validate only the fields present in a partial update input
pub fn validate_update_input(input: &UpdateForecastInput) -> Result<(), &'static str> {
    if let Some(humidity) = input.humidity {
        validate_humidity(humidity)?;
    }
    if let Some(wind_speed) = input.wind_speed {
        validate_wind_speed(wind_speed)?;
    }
    Ok(())
}

// ============================================================================
// Query Validations
// ============================================================================

/// Validate a forecast window length is between 1 and 30 days
pub fn validate_forecast_days(days: i64) -> Result<(), &'static str> {
    if days < 1 {
        return Err("Days must be at least 1");
    }
    if days > MAX_FORECAST_DAYS {
        return Err("Days cannot exceed 30");
    }
    Ok(())
}
