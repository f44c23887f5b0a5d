use crate::commands::{run_review, run_status, run_validate, ReviewArgs, StatusArgs, ValidateArgs};
use clap::{Parser, Subcommand};
use grade_bulletin::config::AppConfig;
use grade_bulletin::error::AppError;
use grade_bulletin::telemetry;
use grade_bulletin::StatusMessages;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "grade-bulletin",
    about = "Check grade entries and approval status for the student bulletin",
    version
)]
struct Cli {
    /// JSON message catalog overriding the built-in status texts
    #[arg(long, global = true)]
    messages: Option<PathBuf>,
    /// Override the configured log level (e.g. debug, grade_bulletin=trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show field feedback and the approval status for a final grade and absences
    Status(StatusArgs),
    /// Validate student registration number and email
    Validate(ValidateArgs),
    /// Review every row of a grade sheet CSV
    Review(ReviewArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    if let Some(path) = cli.messages {
        config.messages.catalog_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;
    config.messages.ensure_exists()?;

    let messages = match &config.messages.catalog_path {
        Some(path) => {
            let messages = StatusMessages::from_path(path)?;
            info!(path = %path.display(), "message catalog loaded");
            messages
        }
        None => StatusMessages::default(),
    };

    debug!(?config.environment, command = ?cli.command, "dispatching command");

    match cli.command {
        Command::Status(args) => run_status(args, &messages),
        Command::Validate(args) => run_validate(args, &messages),
        Command::Review(args) => run_review(args, &messages),
    }
}
