//! Seed data generation tests
//!
//! The generator is randomized, so these tests pin down structure and
//! value ranges rather than exact numbers:
//! - Batch shape: seven consecutive days for one city
//! - Every generated forecast passes input validation
//! - Sampled values stay inside their condition's profile
//! - Reseeding replaces a city's rows instead of appending to them

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::models::CreateForecastInput;
use shared::seed::{
    city_seed_forecasts, condition_profile, sample_forecast, SEED_CONDITIONS, SEED_DAYS,
};
use shared::validation::validate_create_input;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 14).unwrap() + Duration::days(offset)
}

/// Assert one generated forecast is internally coherent
fn assert_forecast_coherent(input: &CreateForecastInput) {
    assert!(
        SEED_CONDITIONS.contains(&input.condition),
        "unexpected seed condition {:?}",
        input.condition
    );

    let profile = condition_profile(input.condition);
    assert!(input.temperature_high >= Decimal::from(profile.high_celsius.0));
    assert!(input.temperature_high <= Decimal::from(profile.high_celsius.1));
    assert!(input.temperature_low >= Decimal::from(profile.low_celsius.0));
    assert!(input.temperature_low <= Decimal::from(profile.low_celsius.1));
    assert!(input.humidity >= profile.humidity_percent.0);
    assert!(input.humidity <= profile.humidity_percent.1);
    assert!(input.wind_speed >= Decimal::from(profile.wind_speed.0));
    assert!(input.wind_speed <= Decimal::from(profile.wind_speed.1));

    assert!(input.temperature_high > input.temperature_low);
    assert!(!input.description.is_empty());
    assert!(validate_create_input(input).is_ok());
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;
    use shared::models::WeatherCondition;

    /// A batch covers exactly seven days
    #[test]
    fn test_batch_size() {
        let batch = city_seed_forecasts("Madrid", day(0));
        assert_eq!(batch.len(), SEED_DAYS);
    }

    /// Dates are consecutive starting from the requested first day
    #[test]
    fn test_batch_dates_consecutive() {
        let batch = city_seed_forecasts("Madrid", day(0));
        for (offset, input) in batch.iter().enumerate() {
            assert_eq!(input.date, day(offset as i64));
        }
    }

    /// Every entry carries the requested city
    #[test]
    fn test_batch_city_constant() {
        let batch = city_seed_forecasts("Valencia", day(0));
        assert!(batch.iter().all(|input| input.city == "Valencia"));
    }

    /// Generated values always stay inside their condition's profile and
    /// pass input validation
    #[test]
    fn test_batch_values_coherent() {
        // Several batches, to exercise more than one drawn condition
        for run in 0..20 {
            let batch = city_seed_forecasts("Madrid", day(run));
            for input in &batch {
                assert_forecast_coherent(input);
            }
        }
    }

    /// Single-day sampling respects the same constraints
    #[test]
    fn test_sample_forecast_coherent() {
        for _ in 0..50 {
            let input = sample_forecast("Madrid", day(0));
            assert_eq!(input.date, day(0));
            assert_forecast_coherent(&input);
        }
    }

    /// Profiles exist for all conditions and keep highs strictly above
    /// lows, even for the conditions the generator never draws
    #[test]
    fn test_profiles_keep_high_above_low() {
        let conditions = [
            WeatherCondition::Sunny,
            WeatherCondition::Cloudy,
            WeatherCondition::Rainy,
            WeatherCondition::Stormy,
            WeatherCondition::Snowy,
            WeatherCondition::PartlyCloudy,
        ];

        for condition in conditions {
            let profile = condition_profile(condition);
            assert!(
                profile.high_celsius.0 > profile.low_celsius.1,
                "profile for {:?} allows high <= low",
                condition
            );
            assert!(profile.humidity_percent.0 >= 0);
            assert!(profile.humidity_percent.1 <= 100);
            assert!(profile.wind_speed.0 >= 0);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating arbitrary batch start dates
    fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
        (-3650i64..=3650i64).prop_map(day)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Batch structure holds for any start date
        #[test]
        fn prop_batch_structure(start in start_date_strategy()) {
            let batch = city_seed_forecasts("Madrid", start);

            prop_assert_eq!(batch.len(), SEED_DAYS);
            for (offset, input) in batch.iter().enumerate() {
                prop_assert_eq!(input.date, start + Duration::days(offset as i64));
                prop_assert_eq!(&input.city, "Madrid");
            }
        }

        /// Generated values validate and stay range-coherent for any start
        #[test]
        fn prop_batch_values_valid(start in start_date_strategy()) {
            let batch = city_seed_forecasts("Madrid", start);

            for input in &batch {
                prop_assert!(validate_create_input(input).is_ok());
                prop_assert!(input.temperature_high > input.temperature_low);
                prop_assert!(SEED_CONDITIONS.contains(&input.condition));

                let profile = condition_profile(input.condition);
                prop_assert!(input.humidity >= profile.humidity_percent.0);
                prop_assert!(input.humidity <= profile.humidity_percent.1);
                prop_assert!(input.wind_speed >= Decimal::from(profile.wind_speed.0));
                prop_assert!(input.wind_speed <= Decimal::from(profile.wind_speed.1));
            }
        }
    }
}

// ============================================================================
// Integration Test Helpers
// ============================================================================

#[cfg(test)]
mod integration_helpers {
    use super::*;
    use chrono::Utc;
    use shared::models::{WeatherCondition, WeatherForecast};

    /// Simulate the transactional reseed: every stored row for `city` is
    /// dropped, then the generated batch is inserted with fresh ids
    pub fn seed_replace(
        rows: &[WeatherForecast],
        city: &str,
        start: NaiveDate,
    ) -> Vec<WeatherForecast> {
        let mut next_id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;

        let mut store: Vec<WeatherForecast> = rows
            .iter()
            .filter(|row| row.city != city)
            .cloned()
            .collect();

        for input in city_seed_forecasts(city, start) {
            store.push(persisted(next_id, &input));
            next_id += 1;
        }
        store
    }

    /// A generated input as the database hands it back after insert
    fn persisted(id: i32, input: &CreateForecastInput) -> WeatherForecast {
        let now = Utc::now();
        WeatherForecast {
            id,
            city: input.city.clone(),
            date: input.date,
            temperature_high: input.temperature_high,
            temperature_low: input.temperature_low,
            condition: input.condition,
            description: input.description.clone(),
            humidity: input.humidity,
            wind_speed: input.wind_speed,
            created_at: now,
            updated_at: now,
        }
    }

    /// A stored row predating the reseed
    fn prior_row(id: i32, city: &str, date: NaiveDate) -> WeatherForecast {
        WeatherForecast {
            id,
            city: city.to_string(),
            date,
            temperature_high: Decimal::from(20),
            temperature_low: Decimal::from(11),
            condition: WeatherCondition::Cloudy,
            description: "Grey skies for most of the day".to_string(),
            humidity: 60,
            wind_speed: Decimal::from(10),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// After a reseed the city holds exactly the fresh batch; none of its
    /// prior rows survive
    #[test]
    fn test_seed_replaces_prior_city_rows() {
        let rows = vec![
            prior_row(1, "Madrid", day(-2)),
            prior_row(2, "Madrid", day(0)),
            prior_row(3, "Madrid", day(4)),
            prior_row(4, "Valencia", day(0)),
        ];

        let after = seed_replace(&rows, "Madrid", day(0));

        let madrid: Vec<&WeatherForecast> =
            after.iter().filter(|row| row.city == "Madrid").collect();
        assert_eq!(madrid.len(), SEED_DAYS);

        let prior_ids = [1, 2, 3];
        assert!(madrid.iter().all(|row| !prior_ids.contains(&row.id)));
        for (offset, row) in madrid.iter().enumerate() {
            assert_eq!(row.date, day(offset as i64));
        }
    }

    /// Reseeding one city never touches another city's rows
    #[test]
    fn test_seed_preserves_other_city_rows() {
        let rows = vec![
            prior_row(1, "Madrid", day(0)),
            prior_row(2, "Valencia", day(-5)),
            prior_row(3, "Valencia", day(2)),
        ];

        let after = seed_replace(&rows, "Madrid", day(0));

        let valencia: Vec<&WeatherForecast> =
            after.iter().filter(|row| row.city == "Valencia").collect();
        assert_eq!(valencia.len(), 2);
        assert!(valencia.iter().any(|row| row.id == 2 && row.date == day(-5)));
        assert!(valencia.iter().any(|row| row.id == 3 && row.date == day(2)));
    }

    /// A second reseed does not stack on the first; the store ends up
    /// holding one batch, not two
    #[test]
    fn test_reseed_keeps_cardinality() {
        let once = seed_replace(&[], "Madrid", day(0));
        assert_eq!(once.len(), SEED_DAYS);

        let twice = seed_replace(&once, "Madrid", day(1));
        assert_eq!(twice.len(), SEED_DAYS);
        assert!(twice.iter().all(|row| row.date >= day(1)));
    }
}
