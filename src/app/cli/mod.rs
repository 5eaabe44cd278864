//! CLI Adapter.

mod plan;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "viaja")]
#[command(version)]
#[command(about = "Generate day-by-day travel itineraries with Gemini", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an itinerary for a destination city
    #[clap(visible_alias = "p")]
    Plan(plan::PlanArgs),
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init();

    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Plan(args) => plan::run_plan(args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
