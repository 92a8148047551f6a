//! Common types used across the service

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Half-open date range `[start, end)` used for forecast window queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Window covering `days` consecutive days beginning at `start`
    pub fn days_from(start: NaiveDate, days: i64) -> Self {
        Self {
            start,
            end: start + Duration::days(days),
        }
    }

    /// Whether `date` falls inside the range; `start` is included,
    /// `end` is not
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of days the range spans
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
