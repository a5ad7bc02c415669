//! Plan command - print the dated training plan

use chrono::NaiveDate;
use clap::Args;
use periodize_core::{error_line, generate_plan, Config, OutputFormat, TrainingPlan};

/// Generate a training plan between two dates
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// First day of training (YYYY-MM-DD)
    #[arg(short, long)]
    start: Option<NaiveDate>,

    /// Event day (YYYY-MM-DD)
    #[arg(short, long)]
    race: Option<NaiveDate>,

    /// Output format (text or json)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let config = Config::load_with_overrides(self.start, self.race, self.format)?;

        let start = config.plan.start.ok_or_else(|| {
            anyhow::anyhow!("No start date given. Use --start YYYY-MM-DD or set plan.start in config")
        })?;
        let race = config.plan.race.ok_or_else(|| {
            anyhow::anyhow!("No race date given. Use --race YYYY-MM-DD or set plan.race in config")
        })?;

        if verbose {
            tracing::info!(%start, %race, format = %config.output.format, "Generating plan");
        }

        match generate_plan(start, race) {
            Ok(plan) => print_plan(&plan, config.output.format, verbose),
            Err(e) if e.is_insufficient_weeks() => {
                match config.output.format {
                    OutputFormat::Text => println!("{}", error_line(&e)),
                    OutputFormat::Json => {
                        let body = serde_json::json!({ "error": e.to_string() });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    }
                }
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn print_plan(plan: &TrainingPlan, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in plan.lines() {
                println!("{}", line);
            }

            if verbose && plan.span.dropped_days > 0 {
                println!();
                println!(
                    "{} trailing day(s) before the race are not part of a complete week.",
                    plan.span.dropped_days
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", plan.to_json_pretty()?);
        }
    }

    Ok(())
}
