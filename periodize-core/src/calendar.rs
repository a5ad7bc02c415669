//! Calendar math for plan windows

use chrono::NaiveDate;
use serde::Serialize;

/// Days in a training week
pub const DAYS_PER_WEEK: i64 = 7;

/// Display format for week boundaries, e.g. "6 June"
pub const DAY_MONTH_FORMAT: &str = "%-d %B";

/// The inclusive span between a plan start and its event, in complete weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekSpan {
    /// Days from start to event, both included
    pub total_days: i64,
    /// Complete weeks in the span
    pub total_weeks: u32,
    /// Days of a trailing incomplete week that are left out
    pub dropped_days: u32,
}

impl WeekSpan {
    /// Measure the span from `start` to `race`, both days included
    ///
    /// An event before the start gives an empty span.
    pub fn between(start: NaiveDate, race: NaiveDate) -> Self {
        let total_days = (race - start).num_days() + 1;
        let counted = total_days.max(0);

        Self {
            total_days,
            total_weeks: u32::try_from(counted / DAYS_PER_WEEK).unwrap_or(u32::MAX),
            dropped_days: (counted % DAYS_PER_WEEK) as u32,
        }
    }
}

/// Format a date as day of month and full month name
pub fn format_day_month(date: NaiveDate) -> String {
    date.format(DAY_MONTH_FORMAT).to_string()
}
