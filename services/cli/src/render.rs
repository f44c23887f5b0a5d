use grade_bulletin::approval::StatusCategory;
use grade_bulletin::fields::{format_grade, FeedbackState, FieldFeedback};
use grade_bulletin::review::{ReviewReport, RowOutcome};
use grade_bulletin::{StatusMessages, StatusPanel};
use std::fmt::Write;

fn feedback_marker(state: FeedbackState) -> &'static str {
    match state {
        FeedbackState::Valid => "ok",
        FeedbackState::Invalid => "!!",
        FeedbackState::Cleared => "--",
    }
}

pub(crate) fn render_feedback(feedback: &[FieldFeedback]) -> String {
    let mut out = String::new();
    for entry in feedback {
        let message = entry.message.as_deref().unwrap_or("(empty)");
        let _ = writeln!(
            out,
            "[{}] {}: {}",
            feedback_marker(entry.state),
            entry.field.name(),
            message
        );
    }
    out
}

pub(crate) fn render_status(feedback: &[FieldFeedback], status: &StatusPanel) -> String {
    let mut out = render_feedback(feedback);

    match status.tone {
        Some(tone) if status.visible => {
            let _ = writeln!(out, "\n{} {} {}", tone.css_class(), tone.icon(), status.text);
        }
        _ => {
            let _ = writeln!(out, "\nNo approval status to show yet.");
        }
    }

    out
}

fn row_line(row: &RowOutcome, messages: &StatusMessages) -> String {
    let panel = StatusPanel::render(&row.status, messages);
    let status = if panel.visible {
        panel.text
    } else {
        "no grade or absences recorded".to_string()
    };
    let grade = row
        .final_grade
        .map(format_grade)
        .unwrap_or_else(|| "-".to_string());
    let absences = row
        .absences
        .map(|count| count.value().to_string())
        .unwrap_or_else(|| "-".to_string());
    let subject = row.subject.as_deref().unwrap_or("-");

    format!(
        "- line {} | {} | {} | grade {} | absences {} | {}: {}",
        row.line,
        row.registration_number,
        subject,
        grade,
        absences,
        row.status.category().label(),
        status
    )
}

pub(crate) fn render_review(
    report: &ReviewReport,
    messages: &StatusMessages,
    all_rows: bool,
) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(out, "Grade sheet review ({})", report.reviewed_on);
    let _ = writeln!(
        out,
        "{} rows: {} approved, {} rejected, {} pending, {} empty",
        summary.total, summary.approved, summary.rejected, summary.pending, summary.hidden
    );
    if let Some(rate) = summary.approval_rate() {
        let _ = writeln!(out, "Approval rate: {:.1}%", rate * 100.0);
    }

    if all_rows {
        let _ = writeln!(out, "\nRows");
        for row in &report.rows {
            let _ = writeln!(out, "{}", row_line(row, messages));
        }
    } else {
        let rejected: Vec<_> = report.rows_with_status(StatusCategory::Rejected).collect();
        if rejected.is_empty() {
            let _ = writeln!(out, "\nRejected: none");
        } else {
            let _ = writeln!(out, "\nRejected");
            for row in rejected {
                let _ = writeln!(out, "{}", row_line(row, messages));
            }
        }
    }

    let flagged: Vec<_> = report
        .rows
        .iter()
        .filter(|row| !row.issues.is_empty())
        .collect();
    if flagged.is_empty() {
        let _ = writeln!(out, "\nInvalid cells: none");
    } else {
        let _ = writeln!(out, "\nInvalid cells");
        for row in flagged {
            for issue in &row.issues {
                let _ = writeln!(
                    out,
                    "- line {} | {} | {}: {}",
                    row.line,
                    row.registration_number,
                    issue.field.name(),
                    issue.error
                );
            }
        }
    }

    out
}
