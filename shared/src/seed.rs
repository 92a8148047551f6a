//! Synthetic forecast generation for seeding demo data
//!
//! Stands in for a real upstream weather feed. Each generated day draws a
//! condition first, then samples temperatures, humidity and wind from that
//! condition's profile, so sunny days come out hotter and drier than rainy
//! ones.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{CreateForecastInput, WeatherCondition};

/// Number of consecutive days generated per seed run
pub const SEED_DAYS: usize = 7;

/// Conditions the generator draws from. Stormy and snowy stay valid input
/// values but are left out of the demo mix.
pub const SEED_CONDITIONS: [WeatherCondition; 4] = [
    WeatherCondition::Sunny,
    WeatherCondition::PartlyCloudy,
    WeatherCondition::Cloudy,
    WeatherCondition::Rainy,
];

/// Inclusive sampling ranges for one weather condition
#[derive(Debug, Clone, Copy)]
pub struct ConditionProfile {
    pub high_celsius: (i32, i32),
    pub low_celsius: (i32, i32),
    pub humidity_percent: (i32, i32),
    pub wind_speed: (i32, i32),
}

/// Sampling ranges for a condition. Every profile keeps the whole high
/// range above the whole low range, so a sampled high always beats the
/// sampled low.
pub fn condition_profile(condition: WeatherCondition) -> ConditionProfile {
    match condition {
        WeatherCondition::Sunny => ConditionProfile {
            high_celsius: (24, 32),
            low_celsius: (13, 19),
            humidity_percent: (25, 45),
            wind_speed: (3, 10),
        },
        WeatherCondition::PartlyCloudy => ConditionProfile {
            high_celsius: (20, 28),
            low_celsius: (12, 18),
            humidity_percent: (40, 60),
            wind_speed: (6, 14),
        },
        WeatherCondition::Cloudy => ConditionProfile {
            high_celsius: (17, 24),
            low_celsius: (10, 16),
            humidity_percent: (55, 75),
            wind_speed: (8, 16),
        },
        WeatherCondition::Rainy => ConditionProfile {
            high_celsius: (14, 21),
            low_celsius: (7, 13),
            humidity_percent: (70, 90),
            wind_speed: (12, 22),
        },
        WeatherCondition::Stormy => ConditionProfile {
            high_celsius: (12, 19),
            low_celsius: (4, 11),
            humidity_percent: (75, 95),
            wind_speed: (20, 40),
        },
        WeatherCondition::Snowy => ConditionProfile {
            high_celsius: (-2, 4),
            low_celsius: (-8, -3),
            humidity_percent: (65, 85),
            wind_speed: (5, 15),
        },
    }
}

fn description_for(condition: WeatherCondition) -> &'static str {
    let pool: &[&'static str] = match condition {
        WeatherCondition::Sunny => &[
            "Clear skies with plenty of sunshine",
            "Bright and sunny all day",
            "Hot and sunny weather",
        ],
        WeatherCondition::PartlyCloudy => &[
            "Partly cloudy with sunny breaks",
            "Mix of sun and clouds",
        ],
        WeatherCondition::Cloudy => &[
            "Overcast with thick cloud cover",
            "Grey skies for most of the day",
        ],
        WeatherCondition::Rainy => &[
            "Light rain throughout the day",
            "Scattered showers expected",
        ],
        WeatherCondition::Stormy => &["Thunderstorms with heavy downpours"],
        WeatherCondition::Snowy => &["Snow flurries through the afternoon"],
    };
    pool[fastrand::usize(0..pool.len())]
}

fn sample(range: (i32, i32)) -> i32 {
    fastrand::i32(range.0..=range.1)
}

/// Generate one forecast for `city` on `date`
pub fn sample_forecast(city: &str, date: NaiveDate) -> CreateForecastInput {
    let condition = SEED_CONDITIONS[fastrand::usize(0..SEED_CONDITIONS.len())];
    let profile = condition_profile(condition);

    CreateForecastInput {
        city: city.to_string(),
        date,
        temperature_high: Decimal::from(sample(profile.high_celsius)),
        temperature_low: Decimal::from(sample(profile.low_celsius)),
        condition,
        description: description_for(condition).to_string(),
        humidity: sample(profile.humidity_percent),
        wind_speed: Decimal::from(sample(profile.wind_speed)),
    }
}

/// Generate the full seed batch for `city`: one forecast per day for
/// `SEED_DAYS` consecutive days starting at `start`
pub fn city_seed_forecasts(city: &str, start: NaiveDate) -> Vec<CreateForecastInput> {
    (0..SEED_DAYS)
        .map(|offset| sample_forecast(city, start + Duration::days(offset as i64)))
        .collect()
}
