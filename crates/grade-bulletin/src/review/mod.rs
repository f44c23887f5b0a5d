//! Batch approval review of grade sheets exported as CSV.

mod parser;

use crate::approval::{evaluate, ApprovalStatus, StatusCategory};
use crate::fields::{
    classify_absences, classify_grade, validate_registration_number, AbsenceCount, FieldError,
    FieldKind, Grade, Observation,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use parser::GradeRow;

#[derive(Debug)]
pub enum ReviewImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ReviewImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewImportError::Io(err) => write!(f, "failed to read grade sheet: {}", err),
            ReviewImportError::Csv(err) => write!(f, "invalid grade sheet CSV: {}", err),
        }
    }
}

impl std::error::Error for ReviewImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReviewImportError::Io(err) => Some(err),
            ReviewImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ReviewImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ReviewImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// A cell that could not be accepted; the row is still evaluated without it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub field: FieldKind,
    pub error: FieldError,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowOutcome {
    pub line: u64,
    pub registration_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub final_grade: Option<Grade>,
    pub absences: Option<AbsenceCount>,
    pub status: ApprovalStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
    pub hidden: usize,
    pub with_issues: usize,
}

impl ReviewSummary {
    /// Share of approved rows among rows with a decided outcome.
    pub fn approval_rate(&self) -> Option<f64> {
        let decided = self.approved + self.rejected;
        if decided == 0 {
            return None;
        }
        Some(self.approved as f64 / decided as f64)
    }

    fn record(&mut self, outcome: &RowOutcome) {
        self.total += 1;
        match outcome.status.category() {
            StatusCategory::Approved => self.approved += 1,
            StatusCategory::Rejected => self.rejected += 1,
            StatusCategory::Pending => self.pending += 1,
            StatusCategory::Hidden => self.hidden += 1,
        }
        if !outcome.issues.is_empty() {
            self.with_issues += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewReport {
    pub reviewed_on: NaiveDate,
    pub rows: Vec<RowOutcome>,
    pub summary: ReviewSummary,
}

impl ReviewReport {
    pub fn rows_with_status(&self, category: StatusCategory) -> impl Iterator<Item = &RowOutcome> {
        self.rows
            .iter()
            .filter(move |row| row.status.category() == category)
    }
}

pub struct SheetReview;

impl SheetReview {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        reviewed_on: NaiveDate,
    ) -> Result<ReviewReport, ReviewImportError> {
        let path = path.as_ref();
        info!(path = %path.display(), "reviewing grade sheet");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, reviewed_on)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        reviewed_on: NaiveDate,
    ) -> Result<ReviewReport, ReviewImportError> {
        let mut summary = ReviewSummary::default();
        let mut rows = Vec::new();

        for row in parser::parse_rows(reader)? {
            let outcome = review_row(row);
            summary.record(&outcome);
            rows.push(outcome);
        }

        debug!(?summary, "grade sheet reviewed");

        Ok(ReviewReport {
            reviewed_on,
            rows,
            summary,
        })
    }
}

fn review_row(row: GradeRow) -> RowOutcome {
    let mut issues = Vec::new();

    if let Observation::Invalid(error) = validate_registration_number(&row.registration_number) {
        issues.push(FieldIssue {
            field: FieldKind::RegistrationNumber,
            error,
        });
    }

    let grade = known_or_issue(
        FieldKind::FinalGrade,
        classify_grade(&row.final_grade),
        &mut issues,
    );
    let absences = known_or_issue(
        FieldKind::Absences,
        classify_absences(&row.absences),
        &mut issues,
    );

    if !issues.is_empty() {
        warn!(
            line = row.line,
            registration_number = %row.registration_number,
            issues = issues.len(),
            "grade sheet row has invalid cells"
        );
    }

    RowOutcome {
        line: row.line,
        registration_number: row.registration_number,
        subject: row.subject,
        final_grade: grade,
        absences,
        status: evaluate(grade, absences),
        issues,
    }
}

fn known_or_issue<T>(
    field: FieldKind,
    observation: Observation<T>,
    issues: &mut Vec<FieldIssue>,
) -> Option<T> {
    match observation {
        Observation::Valid(value) => Some(value),
        Observation::Unknown => None,
        Observation::Invalid(error) => {
            issues.push(FieldIssue { field, error });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::RejectionReason;
    use std::io::Cursor;

    fn reviewed_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid review date")
    }

    #[test]
    fn rows_are_evaluated_and_counted() {
        let csv = "registration_number,subject,final_grade,absences\n\
                   AB123,Logica,72,4\n\
                   CD456,Logica,35,22\n\
                   EF789,Logica,80,\n\
                   GH012,Logica,,\n";
        let report = SheetReview::from_reader(Cursor::new(csv), reviewed_on()).expect("imports");

        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[0].status, ApprovalStatus::Approved);
        assert_eq!(
            report.rows[1].status.reasons(),
            &[
                RejectionReason::InsufficientGrade,
                RejectionReason::ExcessiveAbsences
            ]
        );
        assert_eq!(report.rows[2].status, ApprovalStatus::PendingAbsences);
        assert_eq!(report.rows[3].status, ApprovalStatus::Hidden);

        assert_eq!(
            report.summary,
            ReviewSummary {
                total: 4,
                approved: 1,
                rejected: 1,
                pending: 1,
                hidden: 1,
                with_issues: 0,
            }
        );
        assert_eq!(report.summary.approval_rate(), Some(0.5));
    }

    #[test]
    fn malformed_cells_are_flagged_without_aborting() {
        let csv = "registration_number,final_grade,absences\nx,abc,5\nAB123,150,2\n";
        let report = SheetReview::from_reader(Cursor::new(csv), reviewed_on()).expect("imports");

        let first = &report.rows[0];
        assert_eq!(first.status, ApprovalStatus::PendingGrade);
        assert_eq!(first.issues.len(), 2);
        assert!(first
            .issues
            .iter()
            .any(|issue| issue.field == FieldKind::RegistrationNumber));
        assert!(matches!(first.issues[1].error, FieldError::Format { .. }));

        let second = &report.rows[1];
        assert_eq!(second.final_grade, None);
        assert_eq!(second.status, ApprovalStatus::PendingGrade);
        assert_eq!(report.summary.with_issues, 2);
    }

    #[test]
    fn empty_sheet_has_no_approval_rate() {
        let csv = "registration_number,final_grade,absences\n";
        let report = SheetReview::from_reader(Cursor::new(csv), reviewed_on()).expect("imports");

        assert!(report.rows.is_empty());
        assert_eq!(report.summary.approval_rate(), None);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = SheetReview::from_path("/nonexistent/grades.csv", reviewed_on())
            .expect_err("file is missing");
        assert!(matches!(err, ReviewImportError::Io(_)));
    }
}
