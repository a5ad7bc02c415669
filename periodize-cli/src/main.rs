//! Periodize CLI - Command line interface for Periodize
//!
//! Prints a week-by-week training plan between a start date and an event.

mod commands;

use clap::{Parser, Subcommand};
use periodize_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{LayoutArgs, PlanArgs};

/// Periodize: week-by-week training plans ending on race day
#[derive(Parser, Debug)]
#[command(name = "periodize")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Generate a training plan between two dates
    #[command(visible_alias = "p")]
    Plan(PlanArgs),

    /// Show how a number of weeks is split into phases
    #[command(visible_alias = "l")]
    Layout(LayoutArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("periodize {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Plan(args)) => {
            args.execute(cli.verbose)?;
        }
        Some(Commands::Layout(args)) => {
            args.execute(cli.verbose)?;
        }
        Some(Commands::Config) => {
            let config = Config::load()?.with_env_overrides()?;

            println!("Periodize Configuration");
            println!("=======================");
            println!();
            println!("Plan Settings:");
            println!("  start: {}", display_date(config.plan.start));
            println!("  race: {}", display_date(config.plan.race));
            println!();
            println!("Output Settings:");
            println!("  format: {}", config.output.format);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Periodize - Week-by-week training plans");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn display_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}
