//! HTTP handlers for weather forecast endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{CreateForecastInput, ForecastQuery, UpdateForecastInput, WeatherForecast};
use crate::services::ForecastService;
use crate::AppState;

/// Get every stored forecast for the configured city
pub async fn get_city_weather(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WeatherForecast>>> {
    let service = ForecastService::new(state.db);
    let forecasts = service.city_weather(&state.config.weather.city).await?;
    Ok(Json(forecasts))
}

/// Replace the configured city's forecasts with fresh demo data
pub async fn seed_city_weather(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WeatherForecast>>> {
    let service = ForecastService::new(state.db);
    let forecasts = service
        .seed_city_weather(&state.config.weather.city)
        .await?;
    Ok(Json(forecasts))
}

/// Create a forecast
pub async fn create_forecast(
    State(state): State<AppState>,
    Json(input): Json<CreateForecastInput>,
) -> AppResult<(StatusCode, Json<WeatherForecast>)> {
    let service = ForecastService::new(state.db);
    let forecast = service.create_forecast(input).await?;
    Ok((StatusCode::CREATED, Json(forecast)))
}

/// Get upcoming forecasts, optionally filtered by city, windowed by days
pub async fn get_forecasts(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<Vec<WeatherForecast>>> {
    let service = ForecastService::new(state.db);
    let forecasts = service.list_forecasts(query).await?;
    Ok(Json(forecasts))
}

/// Partially update a forecast by id
pub async fn update_forecast(
    State(state): State<AppState>,
    Path(forecast_id): Path<i32>,
    Json(input): Json<UpdateForecastInput>,
) -> AppResult<Json<WeatherForecast>> {
    let service = ForecastService::new(state.db);
    let forecast = service.update_forecast(forecast_id, input).await?;
    Ok(Json(forecast))
}
