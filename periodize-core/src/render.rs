//! Schedule rendering
//!
//! Attaches calendar dates and week numbers to a sequence of phases.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::calendar::{format_day_month, DAYS_PER_WEEK};
use crate::phase::PhaseLabel;

/// One dated week of a training plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// 1-based week number
    pub week_index: u32,
    /// Phase trained this week
    pub phase: PhaseLabel,
    /// First day of the week
    pub range_start: NaiveDate,
    /// Last day of the week
    pub range_end: NaiveDate,
}

impl ScheduleEntry {
    /// Render the entry as a display line
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Week #{} - {} - from {} to {}",
            self.week_index,
            self.phase,
            format_day_month(self.range_start),
            format_day_month(self.range_end)
        )
    }
}

/// Date each phase, one week apart, starting at `start`
pub fn render(start: NaiveDate, phases: &[PhaseLabel]) -> Vec<ScheduleEntry> {
    phases
        .iter()
        .zip(0i64..)
        .map(|(&phase, offset)| {
            let range_start = start + Duration::days(offset * DAYS_PER_WEEK);
            ScheduleEntry {
                week_index: offset as u32 + 1,
                phase,
                range_start,
                range_end: range_start + Duration::days(DAYS_PER_WEEK - 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_empty() {
        assert!(render(date(2021, 6, 6), &[]).is_empty());
    }

    #[test]
    fn test_render_dates_and_indices() {
        let entries = render(
            date(2021, 6, 6),
            &[PhaseLabel::Test, PhaseLabel::Test, PhaseLabel::Filler],
        );

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].week_index, 1);
        assert_eq!(entries[0].range_start, date(2021, 6, 6));
        assert_eq!(entries[0].range_end, date(2021, 6, 12));
        assert_eq!(entries[2].week_index, 3);
        assert_eq!(entries[2].phase, PhaseLabel::Filler);
        assert_eq!(entries[2].range_start, date(2021, 6, 20));
        assert_eq!(entries[2].range_end, date(2021, 6, 26));
    }

    #[test]
    fn test_weeks_are_contiguous() {
        let entries = render(date(2021, 12, 20), &[PhaseLabel::Key; 6]);
        for pair in entries.windows(2) {
            assert_eq!(pair[1].range_start, pair[0].range_end + Duration::days(1));
        }
    }

    #[test]
    fn test_line_format() {
        let entries = render(date(2021, 6, 6), &[PhaseLabel::Test]);
        assert_eq!(entries[0].line(), "Week #1 - Test - from 6 June to 12 June");
    }

    #[test]
    fn test_line_across_month_boundary() {
        let entries = render(date(2021, 7, 27), &[PhaseLabel::Build2]);
        assert_eq!(
            entries[0].to_string(),
            "Week #1 - Build 2 - from 27 July to 2 August"
        );
    }

    #[test]
    fn test_entry_json() {
        let entries = render(date(2021, 6, 6), &[PhaseLabel::Build1]);
        let json = serde_json::to_value(entries[0]).unwrap();
        assert_eq!(json["week_index"], 1);
        assert_eq!(json["phase"], "Build 1");
        assert_eq!(json["range_start"], "2021-06-06");
        assert_eq!(json["range_end"], "2021-06-12");
    }
}
