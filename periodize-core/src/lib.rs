//! Periodize Core - Core library for periodized training schedules
//!
//! This crate splits the weeks between a start date and an event into
//! training phases and dates each week.

pub mod calendar;
pub mod config;
pub mod error;
pub mod phase;
pub mod plan;
pub mod render;
pub mod sequence;

pub use calendar::{format_day_month, WeekSpan};
pub use config::{Config, OutputConfig, OutputFormat, PlanConfig};
pub use error::{Error, Result};
pub use phase::PhaseLabel;
pub use plan::{error_line, generate_plan, plan_lines, TrainingPlan};
pub use render::{render, ScheduleEntry};
pub use sequence::{layout, sequence, PhaseSequence, PlanLayout, MIN_WEEKS};
