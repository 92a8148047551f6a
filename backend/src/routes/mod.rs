//! Route definitions for the Weather Forecast Service

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Fixed-city weather
        .nest("/weather", weather_routes())
        // Forecast management
        .nest("/forecasts", forecast_routes())
}

/// Fixed-city weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/city", get(handlers::get_city_weather))
        .route("/seed", post(handlers::seed_city_weather))
}

/// Forecast management routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::get_forecasts).post(handlers::create_forecast),
        )
        .route("/:forecast_id", put(handlers::update_forecast))
}
