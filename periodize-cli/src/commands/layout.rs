//! Layout command - show how a week count splits into phases

use clap::Args;
use periodize_core::{error_line, layout, OutputFormat, PlanLayout};

/// Show how a number of weeks is split into phases
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Number of complete weeks
    weeks: u32,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let plan_layout = match layout(self.weeks) {
            Ok(l) => l,
            Err(e) if e.is_insufficient_weeks() => {
                println!("{}", error_line(&e));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match self.format {
            OutputFormat::Text => print_layout(&plan_layout, verbose),
            OutputFormat::Json => {
                let body = serde_json::json!({
                    "layout": plan_layout,
                    "phases": plan_layout.phases(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }

        Ok(())
    }
}

fn print_layout(plan_layout: &PlanLayout, verbose: bool) {
    let bridge = if plan_layout.bridge.is_empty() {
        "(none)".to_string()
    } else {
        plan_layout
            .bridge
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("Weeks: {}", plan_layout.total_weeks);
    println!("  filler weeks: {}", plan_layout.filler_weeks);
    println!("  bridge: {}", bridge);
    println!("  main block cycles: {}", plan_layout.main_block_cycles);
    println!();

    for (i, phase) in plan_layout.phases().iter().enumerate() {
        if verbose {
            println!("  {:>3}. {:<8} {}", i + 1, phase.name(), phase.description());
        } else {
            println!("  {:>3}. {}", i + 1, phase);
        }
    }
}
