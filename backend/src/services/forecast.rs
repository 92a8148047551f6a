//! Forecast service for weather forecast storage and retrieval

use chrono::{Local, NaiveDate};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{CreateForecastInput, ForecastQuery, UpdateForecastInput, WeatherForecast};
use shared::seed::city_seed_forecasts;
use shared::types::DateRange;
use shared::validation::{validate_forecast_days, validate_humidity, validate_wind_speed};

/// Forecast service for querying and mutating weather forecasts
#[derive(Clone)]
pub struct ForecastService {
    db: PgPool,
}

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get every stored forecast for a city, exact name match
    pub async fn city_weather(&self, city: &str) -> AppResult<Vec<WeatherForecast>> {
        let forecasts = sqlx::query_as::<_, WeatherForecast>(
            r#"
            SELECT id, city, date, temperature_high, temperature_low, condition,
                   description, humidity, wind_speed, created_at, updated_at
            FROM weather_forecasts
            WHERE city = $1
            "#,
        )
        .bind(city)
        .fetch_all(&self.db)
        .await?;

        Ok(forecasts)
    }

    /// Get upcoming forecasts inside the requested window, earliest first
    pub async fn list_forecasts(&self, query: ForecastQuery) -> AppResult<Vec<WeatherForecast>> {
        self.list_forecasts_on(Local::now().date_naive(), query)
            .await
    }

    /// Windowed read with an explicit first day. Rows dated before `today`
    /// never appear; the window covers `[today, today + days)`.
    pub async fn list_forecasts_on(
        &self,
        today: NaiveDate,
        query: ForecastQuery,
    ) -> AppResult<Vec<WeatherForecast>> {
        let days = query.days_or_default();
        validate_forecast_days(days).map_err(|message| AppError::validation("days", message))?;

        let window = DateRange::days_from(today, days);

        let forecasts = match query.city {
            Some(ref city) => {
                sqlx::query_as::<_, WeatherForecast>(
                    r#"
                    SELECT id, city, date, temperature_high, temperature_low, condition,
                           description, humidity, wind_speed, created_at, updated_at
                    FROM weather_forecasts
                    WHERE city = $1 AND date >= $2 AND date < $3
                    ORDER BY date ASC
                    LIMIT $4
                    "#,
                )
                .bind(city)
                .bind(window.start)
                .bind(window.end)
                .bind(days)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, WeatherForecast>(
                    r#"
                    SELECT id, city, date, temperature_high, temperature_low, condition,
                           description, humidity, wind_speed, created_at, updated_at
                    FROM weather_forecasts
                    WHERE date >= $1 AND date < $2
                    ORDER BY date ASC
                    LIMIT $3
                    "#,
                )
                .bind(window.start)
                .bind(window.end)
                .bind(days)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(forecasts)
    }

    /// Create a forecast. The id and both timestamps are assigned by the
    /// database; created_at and updated_at start out equal.
    pub async fn create_forecast(&self, input: CreateForecastInput) -> AppResult<WeatherForecast> {
        // Validate input
        validate_humidity(input.humidity)
            .map_err(|message| AppError::validation("humidity", message))?;
        validate_wind_speed(input.wind_speed)
            .map_err(|message| AppError::validation("wind_speed", message))?;

        let forecast = sqlx::query_as::<_, WeatherForecast>(
            r#"
            INSERT INTO weather_forecasts (city, date, temperature_high, temperature_low,
                                           condition, description, humidity, wind_speed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, city, date, temperature_high, temperature_low, condition,
                      description, humidity, wind_speed, created_at, updated_at
            "#,
        )
        .bind(&input.city)
        .bind(input.date)
        .bind(input.temperature_high)
        .bind(input.temperature_low)
        .bind(input.condition)
        .bind(&input.description)
        .bind(input.humidity)
        .bind(input.wind_speed)
        .fetch_one(&self.db)
        .await?;

        Ok(forecast)
    }

    /// Apply a partial update to a forecast. Only fields present in the
    /// input change; updated_at is always refreshed, created_at never.
    pub async fn update_forecast(
        &self,
        forecast_id: i32,
        input: UpdateForecastInput,
    ) -> AppResult<WeatherForecast> {
        // Validate the fields that are present
        if let Some(humidity) = input.humidity {
            validate_humidity(humidity)
                .map_err(|message| AppError::validation("humidity", message))?;
        }
        if let Some(wind_speed) = input.wind_speed {
            validate_wind_speed(wind_speed)
                .map_err(|message| AppError::validation("wind_speed", message))?;
        }

        // Check if forecast exists
        let existing = sqlx::query_as::<_, WeatherForecast>(
            r#"
            SELECT id, city, date, temperature_high, temperature_low, condition,
                   description, humidity, wind_speed, created_at, updated_at
            FROM weather_forecasts
            WHERE id = $1
            "#,
        )
        .bind(forecast_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Weather forecast with id {}", forecast_id)))?;

        let merged = input.apply_to(&existing);

        // The row can be deleted between the lookup and the write; the
        // write maps that to the same not-found.
        let forecast = sqlx::query_as::<_, WeatherForecast>(
            r#"
            UPDATE weather_forecasts
            SET city = $1, date = $2, temperature_high = $3, temperature_low = $4,
                condition = $5, description = $6, humidity = $7, wind_speed = $8,
                updated_at = NOW()
            WHERE id = $9
            RETURNING id, city, date, temperature_high, temperature_low, condition,
                      description, humidity, wind_speed, created_at, updated_at
            "#,
        )
        .bind(&merged.city)
        .bind(merged.date)
        .bind(merged.temperature_high)
        .bind(merged.temperature_low)
        .bind(merged.condition)
        .bind(&merged.description)
        .bind(merged.humidity)
        .bind(merged.wind_speed)
        .bind(forecast_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Weather forecast with id {}", forecast_id)))?;

        Ok(forecast)
    }

    /// Reseed the demo data for a city: drop its rows and insert a fresh
    /// seven-day batch starting today
    pub async fn seed_city_weather(&self, city: &str) -> AppResult<Vec<WeatherForecast>> {
        self.seed_city_weather_on(Local::now().date_naive(), city)
            .await
    }

    /// Seed with an explicit first day. Delete and inserts run in one
    /// transaction, so a failed seed leaves the previous data intact.
    pub async fn seed_city_weather_on(
        &self,
        today: NaiveDate,
        city: &str,
    ) -> AppResult<Vec<WeatherForecast>> {
        let batch = city_seed_forecasts(city, today);

        let mut tx = self.db.begin().await?;

        let deleted = sqlx::query("DELETE FROM weather_forecasts WHERE city = $1")
            .bind(city)
            .execute(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(batch.len());
        for input in &batch {
            let forecast = sqlx::query_as::<_, WeatherForecast>(
                r#"
                INSERT INTO weather_forecasts (city, date, temperature_high, temperature_low,
                                               condition, description, humidity, wind_speed)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id, city, date, temperature_high, temperature_low, condition,
                          description, humidity, wind_speed, created_at, updated_at
                "#,
            )
            .bind(&input.city)
            .bind(input.date)
            .bind(input.temperature_high)
            .bind(input.temperature_low)
            .bind(input.condition)
            .bind(&input.description)
            .bind(input.humidity)
            .bind(input.wind_speed)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(forecast);
        }

        tx.commit().await?;

        tracing::info!(
            "Reseeded {} forecasts for {} ({} old rows removed)",
            inserted.len(),
            city,
            deleted.rows_affected()
        );

        Ok(inserted)
    }
}
