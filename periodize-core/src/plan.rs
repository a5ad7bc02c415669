//! Training plan generation
//!
//! Ties the week span, the sequencer and the renderer together. Callers that
//! need to tell failure apart use [`generate_plan`]; callers that only display
//! lines use [`plan_lines`], which folds the error into a single line.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::WeekSpan;
use crate::error::{Error, Result};
use crate::render::{render, ScheduleEntry};
use crate::sequence::sequence;

/// A dated training plan from start to event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingPlan {
    /// First day of the plan
    pub start: NaiveDate,
    /// Event day
    pub race: NaiveDate,
    /// Span the plan was built from
    pub span: WeekSpan,
    /// One entry per complete week
    pub entries: Vec<ScheduleEntry>,
}

impl TrainingPlan {
    /// Display lines, one per week
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ScheduleEntry::line).collect()
    }

    /// Pretty-printed JSON for the whole plan
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the plan between `start` and `race`
///
/// Only complete weeks are scheduled. Fails with
/// [`Error::InsufficientWeeks`] when fewer than eight fit.
pub fn generate_plan(start: NaiveDate, race: NaiveDate) -> Result<TrainingPlan> {
    let span = WeekSpan::between(start, race);
    let phases = sequence(span.total_weeks)?;
    let entries = render(start, phases.as_slice());

    tracing::info!(
        %start,
        %race,
        total_days = span.total_days,
        total_weeks = span.total_weeks,
        dropped_days = span.dropped_days,
        "Generated training plan"
    );

    Ok(TrainingPlan {
        start,
        race,
        span,
        entries,
    })
}

/// Build the plan and render it as display lines
///
/// Failure yields a single `Error: ...` line instead of an error value.
pub fn plan_lines(start: NaiveDate, race: NaiveDate) -> Vec<String> {
    match generate_plan(start, race) {
        Ok(plan) => plan.lines(),
        Err(e) => vec![error_line(&e)],
    }
}

/// The display line used in place of a plan that could not be built
pub fn error_line(err: &Error) -> String {
    format!("Error: {}", err)
}
