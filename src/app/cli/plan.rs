//! Plan command implementation.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{self, PlanMode, PlanOptions, PlanResult};
use crate::domain::{AppError, DisplayState, GenerationOutcome, NOTICE_TITLE, TripDays};
use crate::ports::StateObserver;

#[derive(Args)]
pub struct PlanArgs {
    /// Destination city (prompted interactively when omitted)
    #[arg(short, long)]
    city: Option<String>,
    /// Length of stay in days
    #[arg(short, long)]
    days: Option<TripDays>,
    /// Show the rendered prompt without calling the API
    #[arg(long, conflicts_with = "mock")]
    prompt_preview: bool,
    /// Use an offline canned itinerary instead of the API
    #[arg(long, conflicts_with = "prompt_preview")]
    mock: bool,
    /// Path to a config file (defaults to ./viaja.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Prints loading and result states to the terminal.
struct TerminalShell;

impl StateObserver for TerminalShell {
    fn on_state(&self, state: &DisplayState) {
        match state.outcome() {
            Some(GenerationOutcome::Pending) => eprintln!("⏳ Carregando roteiro..."),
            Some(GenerationOutcome::Success(text)) | Some(GenerationOutcome::Failure(text)) => {
                println!("Roteiro da viagem 👇\n");
                println!("{}", text);
            }
            None => {}
        }
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<i32, AppError> {
    let interactive = args.city.is_none();

    let city = match args.city {
        Some(city) => city,
        None => match prompt_city()? {
            Some(city) => city,
            None => return Ok(1),
        },
    };

    let days = match args.days {
        Some(days) => days,
        None if interactive => match prompt_days()? {
            Some(days) => days,
            None => return Ok(1),
        },
        None => TripDays::DEFAULT,
    };

    let mode = if args.prompt_preview {
        PlanMode::PromptPreview
    } else if args.mock {
        PlanMode::Mock
    } else {
        PlanMode::Generate
    };

    let mut options = PlanOptions::new(city, days).with_mode(mode);
    if let Some(path) = args.config {
        options = options.with_config_path(path);
    }

    match api::plan_with_observer(&options, TerminalShell) {
        Ok(PlanResult::Preview(prompt)) => {
            println!("{}", prompt);
            Ok(0)
        }
        Ok(PlanResult::Generated(outcome)) => {
            if outcome.is_success() {
                return Ok(0);
            }
            eprintln!("Error: Generation failed");
            Ok(1)
        }
        Err(AppError::Validation(notice)) => {
            eprintln!("⚠️  {}: {}", NOTICE_TITLE, notice);
            Ok(1)
        }
        Err(err) => Err(err),
    }
}

fn prompt_city() -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt("Cidade destino (ex: Paris, França)")
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(terminal_error(err)),
    }
}

fn prompt_days() -> Result<Option<TripDays>, AppError> {
    let options: Vec<TripDays> = TripDays::all().collect();
    let items: Vec<String> = options
        .iter()
        .map(|days| if days.get() == 1 { "1 dia".to_string() } else { format!("{} dias", days) })
        .collect();
    let default_index = options.iter().position(|d| *d == TripDays::DEFAULT).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Tempo de estadia")
        .items(&items)
        .default(default_index)
        .interact_opt()
        .map_err(terminal_error)?;

    Ok(selection.map(|index| options[index]))
}

fn terminal_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) => AppError::Io(err),
    }
}
