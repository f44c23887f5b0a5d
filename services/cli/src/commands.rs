use crate::render::{render_feedback, render_review, render_status};
use chrono::{Local, NaiveDate};
use clap::Args;
use grade_bulletin::error::AppError;
use grade_bulletin::fields::{validate_field, FieldFeedback, FieldKind};
use grade_bulletin::review::SheetReview;
use grade_bulletin::{GradeEntryForm, StatusMessages, StatusPanel};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct StatusArgs {
    /// Final grade as typed in the form (0-100)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) final_grade: Option<String>,
    /// Absence count as typed in the form
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) absences: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ValidateArgs {
    #[arg(long)]
    pub(crate) registration_number: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReviewArgs {
    /// Grade sheet with registration_number, subject, final_grade and absences columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Review date printed on the report (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// List every row instead of only rejected and flagged rows
    #[arg(long)]
    pub(crate) all_rows: bool,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusOutput {
    pub(crate) feedback: Vec<FieldFeedback>,
    pub(crate) status: StatusPanel,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn status_output(args: &StatusArgs, messages: &StatusMessages) -> StatusOutput {
    let mut form = GradeEntryForm::new(messages.clone());
    let mut feedback = Vec::new();

    if let Some(raw) = &args.final_grade {
        feedback.push(form.update(FieldKind::FinalGrade, raw.as_str()).feedback);
    }
    if let Some(raw) = &args.absences {
        feedback.push(form.update(FieldKind::Absences, raw.as_str()).feedback);
    }

    StatusOutput {
        feedback,
        status: form.status(),
    }
}

pub(crate) fn validate_output(args: &ValidateArgs, messages: &StatusMessages) -> Vec<FieldFeedback> {
    let fields = [
        (FieldKind::RegistrationNumber, &args.registration_number),
        (FieldKind::Email, &args.email),
    ];

    fields
        .into_iter()
        .filter_map(|(field, raw)| {
            raw.as_deref()
                .map(|raw| validate_field(field, raw, messages))
        })
        .collect()
}

pub(crate) fn run_status(args: StatusArgs, messages: &StatusMessages) -> Result<(), AppError> {
    let output = status_output(&args, messages);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_status(&output.feedback, &output.status));
    }

    Ok(())
}

pub(crate) fn run_validate(args: ValidateArgs, messages: &StatusMessages) -> Result<(), AppError> {
    let feedback = validate_output(&args, messages);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&feedback)?);
    } else {
        print!("{}", render_feedback(&feedback));
    }

    Ok(())
}

pub(crate) fn run_review(args: ReviewArgs, messages: &StatusMessages) -> Result<(), AppError> {
    let ReviewArgs {
        csv,
        today,
        all_rows,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = SheetReview::from_path(&csv, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_review(&report, messages, all_rows));
    }

    Ok(())
}
