use super::*;
use crate::fields::{classify_absences, classify_grade, AbsenceCount, Grade};

fn grade(value: f64) -> GradeObservation {
    Some(Grade::new(value).expect("valid grade"))
}

fn absences(count: u32) -> AbsenceObservation {
    Some(AbsenceCount::new(count).expect("valid absence count"))
}

fn grade_steps(from: f64, to: f64) -> impl Iterator<Item = f64> {
    let steps = ((to - from) * 2.0).round() as u32;
    (0..=steps).map(move |step| from + f64::from(step) * 0.5)
}

#[test]
fn passing_grade_and_allowed_absences_are_approved() {
    for g in grade_steps(50.0, 100.0) {
        for a in 0..=MAX_ALLOWED_ABSENCES {
            assert_eq!(
                evaluate(grade(g), absences(a)),
                ApprovalStatus::Approved,
                "grade {g} absences {a}"
            );
        }
    }
}

#[test]
fn low_grade_alone_rejects() {
    for g in grade_steps(0.0, 49.5) {
        for a in [0, 10, 20] {
            assert_eq!(
                evaluate(grade(g), absences(a)),
                ApprovalStatus::Rejected {
                    reasons: vec![RejectionReason::InsufficientGrade]
                }
            );
        }
    }
    assert_eq!(
        evaluate(grade(49.99), absences(0)).reasons(),
        &[RejectionReason::InsufficientGrade]
    );
}

#[test]
fn excess_absences_alone_rejects() {
    for a in [21, 30, 200] {
        assert_eq!(
            evaluate(grade(50.0), absences(a)),
            ApprovalStatus::Rejected {
                reasons: vec![RejectionReason::ExcessiveAbsences]
            }
        );
    }
}

#[test]
fn both_failures_list_grade_before_absences() {
    let status = evaluate(grade(12.0), absences(45));
    assert_eq!(
        status.reasons(),
        &[
            RejectionReason::InsufficientGrade,
            RejectionReason::ExcessiveAbsences
        ]
    );
    assert_eq!(status.category(), StatusCategory::Rejected);
}

#[test]
fn nothing_known_is_hidden() {
    let status = evaluate(None, None);
    assert_eq!(status, ApprovalStatus::Hidden);
    assert!(!status.is_visible());
}

#[test]
fn single_known_value_reports_pending_or_rejection() {
    assert_eq!(evaluate(grade(60.0), None), ApprovalStatus::PendingAbsences);
    assert_eq!(
        evaluate(grade(40.0), None),
        ApprovalStatus::Rejected {
            reasons: vec![RejectionReason::InsufficientGrade]
        }
    );
    assert_eq!(evaluate(None, absences(5)), ApprovalStatus::PendingGrade);
    assert_eq!(
        evaluate(None, absences(25)),
        ApprovalStatus::Rejected {
            reasons: vec![RejectionReason::ExcessiveAbsences]
        }
    );
}

#[test]
fn thresholds_are_inclusive() {
    assert_eq!(evaluate(grade(50.0), absences(20)), ApprovalStatus::Approved);
    assert_eq!(evaluate(grade(50.0), None), ApprovalStatus::PendingAbsences);
    assert_eq!(evaluate(None, absences(20)), ApprovalStatus::PendingGrade);
}

#[test]
fn repeated_evaluation_is_stable() {
    let first = evaluate(grade(47.0), absences(22));
    let second = evaluate(grade(47.0), absences(22));
    assert_eq!(first, second);
}

#[test]
fn malformed_fields_are_treated_as_unknown() {
    let status = evaluate_observations(classify_grade("abc"), classify_absences("4"));
    assert_eq!(status, ApprovalStatus::PendingGrade);

    let status = evaluate_observations(classify_grade("150"), classify_absences("x"));
    assert_eq!(status, ApprovalStatus::Hidden);
}

#[test]
fn status_serializes_with_snake_case_tag() {
    let json = serde_json::to_value(evaluate(grade(30.0), absences(21))).expect("serializes");
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["reasons"][0], "insufficient_grade");
    assert_eq!(json["reasons"][1], "excessive_absences");
}

#[test]
fn deserialization_keeps_rejection_reasons_well_formed() {
    let status: ApprovalStatus = serde_json::from_str(
        r#"{"status":"rejected","reasons":["insufficient_grade","excessive_absences"]}"#,
    )
    .expect("ordered reasons deserialize");
    assert_eq!(status, evaluate(grade(10.0), absences(30)));

    let approved: ApprovalStatus =
        serde_json::from_str(r#"{"status":"approved"}"#).expect("approved deserializes");
    assert_eq!(approved, ApprovalStatus::Approved);

    for raw in [
        r#"{"status":"rejected","reasons":[]}"#,
        r#"{"status":"rejected","reasons":["excessive_absences","insufficient_grade"]}"#,
        r#"{"status":"rejected","reasons":["excessive_absences","insufficient_grade","excessive_absences"]}"#,
        r#"{"status":"rejected","reasons":["insufficient_grade","insufficient_grade"]}"#,
    ] {
        assert!(
            serde_json::from_str::<ApprovalStatus>(raw).is_err(),
            "expected {raw} to be refused"
        );
    }
}

#[test]
fn evaluated_statuses_survive_a_json_round_trip() {
    for status in [
        evaluate(None, None),
        evaluate(grade(70.0), None),
        evaluate(grade(12.0), absences(45)),
    ] {
        let json = serde_json::to_string(&status).expect("serializes");
        let back: ApprovalStatus = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, status);
    }
}

#[test]
fn category_labels_name_each_group() {
    assert_eq!(evaluate(None, None).category().label(), "Hidden");
    assert_eq!(evaluate(None, absences(3)).category().label(), "Pending");
    assert_eq!(evaluate(grade(80.0), absences(3)).category().label(), "Approved");
    assert_eq!(evaluate(grade(8.0), None).category().label(), "Rejected");
}
