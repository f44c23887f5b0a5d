use std::io::Cursor;

use grade_bulletin::fields::{FeedbackState, FieldKind};
use grade_bulletin::{ApprovalStatus, GradeEntryForm, StatusMessages, StatusTone};

fn english_messages() -> StatusMessages {
    let json = r#"{
        "approved": "Student will PASS",
        "rejected": "Student will FAIL",
        "pending_grade": "Waiting for final grade",
        "insufficient_grade": "insufficient grade",
        "excessive_absences": "too many absences",
        "grade_invalid": "Grade must be between 0 and 100"
    }"#;
    StatusMessages::from_reader(Cursor::new(json)).expect("catalog parses")
}

#[test]
fn editing_session_recomputes_status_each_time() {
    let mut form = GradeEntryForm::new(english_messages());

    let update = form.update(FieldKind::Absences, "4");
    assert_eq!(update.status.text, "Waiting for final grade");

    let update = form.update(FieldKind::FinalGrade, "abc");
    assert_eq!(update.feedback.state, FeedbackState::Invalid);
    assert_eq!(
        update.feedback.message.as_deref(),
        Some("Grade must be between 0 and 100")
    );
    assert_eq!(update.status.text, "Waiting for final grade");

    let update = form.update(FieldKind::FinalGrade, "38");
    assert_eq!(update.status.tone, Some(StatusTone::Danger));
    assert_eq!(update.status.text, "Student will FAIL (insufficient grade)");

    let update = form.update(FieldKind::FinalGrade, "58");
    assert_eq!(update.status.text, "Student will PASS");
    assert_eq!(form.approval(), ApprovalStatus::Approved);
}

#[test]
fn feedback_lists_only_filled_fields() {
    let mut form = GradeEntryForm::default();
    form.update(FieldKind::RegistrationNumber, "AB123");
    form.update(FieldKind::Email, "aluno@");

    let feedback = form.feedback();
    assert_eq!(feedback.len(), 2);
    assert_eq!(feedback[0].field, FieldKind::RegistrationNumber);
    assert_eq!(feedback[0].state, FeedbackState::Valid);
    assert_eq!(feedback[1].field, FieldKind::Email);
    assert_eq!(feedback[1].state, FeedbackState::Invalid);
    assert!(!form.status().visible);
}

#[test]
fn bundled_english_catalog_covers_every_message() {
    let json = include_str!("../../../demos/messages.en.json");
    let messages = StatusMessages::from_reader(Cursor::new(json)).expect("catalog parses");
    let defaults = StatusMessages::default();

    assert_ne!(messages.approved, defaults.approved);
    assert_ne!(messages.email_invalid, defaults.email_invalid);
    assert_ne!(messages.absences_valid, defaults.absences_valid);
}
