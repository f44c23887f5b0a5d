mod cli;
mod commands;
mod render;

use grade_bulletin::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
