//! Weather forecast models and input schemas

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::DEFAULT_FORECAST_DAYS;

/// Weather condition, mirrored by the `weather_condition` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "weather_condition", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    PartlyCloudy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::PartlyCloudy => "partly_cloudy",
        }
    }
}

/// A stored weather forecast row
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct WeatherForecast {
    pub id: i32,
    pub city: String,
    pub date: NaiveDate,
    pub temperature_high: Decimal,
    pub temperature_low: Decimal,
    pub condition: WeatherCondition,
    pub description: String,
    pub humidity: i32,
    pub wind_speed: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a weather forecast
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForecastInput {
    pub city: String,
    pub date: NaiveDate,
    pub temperature_high: Decimal,
    pub temperature_low: Decimal,
    pub condition: WeatherCondition,
    pub description: String,
    pub humidity: i32,
    pub wind_speed: Decimal,
}

/// Partial update input; only fields that are present are applied
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateForecastInput {
    pub city: Option<String>,
    pub date: Option<NaiveDate>,
    pub temperature_high: Option<Decimal>,
    pub temperature_low: Option<Decimal>,
    pub condition: Option<WeatherCondition>,
    pub description: Option<String>,
    pub humidity: Option<i32>,
    pub wind_speed: Option<Decimal>,
}

impl UpdateForecastInput {
    /// Merge this partial input over an existing row. Omitted fields keep
    /// their stored values; id and timestamps are never touched here.
    pub fn apply_to(&self, existing: &WeatherForecast) -> WeatherForecast {
        WeatherForecast {
            id: existing.id,
            city: self.city.clone().unwrap_or_else(|| existing.city.clone()),
            date: self.date.unwrap_or(existing.date),
            temperature_high: self.temperature_high.unwrap_or(existing.temperature_high),
            temperature_low: self.temperature_low.unwrap_or(existing.temperature_low),
            condition: self.condition.unwrap_or(existing.condition),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            humidity: self.humidity.unwrap_or(existing.humidity),
            wind_speed: self.wind_speed.unwrap_or(existing.wind_speed),
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        }
    }

    /// True when no field is present, meaning an update would only bump
    /// the updated_at timestamp
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.date.is_none()
            && self.temperature_high.is_none()
            && self.temperature_low.is_none()
            && self.condition.is_none()
            && self.description.is_none()
            && self.humidity.is_none()
            && self.wind_speed.is_none()
    }
}

/// Query parameters for the windowed forecast read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastQuery {
    pub city: Option<String>,
    pub days: Option<i64>,
}

impl ForecastQuery {
    /// Requested window length, defaulting to seven days when absent
    pub fn days_or_default(&self) -> i64 {
        self.days.unwrap_or(DEFAULT_FORECAST_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forecast() -> WeatherForecast {
        WeatherForecast {
            id: 1,
            city: "Madrid".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            temperature_high: Decimal::new(285, 1),
            temperature_low: Decimal::new(160, 1),
            condition: WeatherCondition::Sunny,
            description: "Clear skies".to_string(),
            humidity: 40,
            wind_speed: Decimal::new(80, 1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_condition_wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_value(WeatherCondition::PartlyCloudy).unwrap(),
            serde_json::json!("partly_cloudy")
        );
        assert_eq!(
            serde_json::to_value(WeatherCondition::Sunny).unwrap(),
            serde_json::json!("sunny")
        );
        let parsed: WeatherCondition = serde_json::from_str("\"stormy\"").unwrap();
        assert_eq!(parsed, WeatherCondition::Stormy);
    }

    #[test]
    fn test_condition_as_str_matches_wire_name() {
        let conditions = [
            WeatherCondition::Sunny,
            WeatherCondition::Cloudy,
            WeatherCondition::Rainy,
            WeatherCondition::Stormy,
            WeatherCondition::Snowy,
            WeatherCondition::PartlyCloudy,
        ];
        for condition in conditions {
            assert_eq!(
                serde_json::to_value(condition).unwrap(),
                serde_json::json!(condition.as_str())
            );
        }
    }

    #[test]
    fn test_apply_to_with_empty_input_changes_nothing() {
        let existing = sample_forecast();
        let input = UpdateForecastInput::default();

        assert!(input.is_empty());
        assert_eq!(input.apply_to(&existing), existing);
    }

    #[test]
    fn test_apply_to_only_replaces_present_fields() {
        let existing = sample_forecast();
        let input = UpdateForecastInput {
            humidity: Some(85),
            condition: Some(WeatherCondition::Rainy),
            ..Default::default()
        };

        let merged = input.apply_to(&existing);
        assert_eq!(merged.humidity, 85);
        assert_eq!(merged.condition, WeatherCondition::Rainy);
        assert_eq!(merged.city, existing.city);
        assert_eq!(merged.date, existing.date);
        assert_eq!(merged.temperature_high, existing.temperature_high);
        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.created_at, existing.created_at);
        assert_eq!(merged.updated_at, existing.updated_at);
    }

    #[test]
    fn test_days_or_default() {
        let query = ForecastQuery::default();
        assert_eq!(query.days_or_default(), 7);

        let query = ForecastQuery {
            city: None,
            days: Some(14),
        };
        assert_eq!(query.days_or_default(), 14);
    }
}
