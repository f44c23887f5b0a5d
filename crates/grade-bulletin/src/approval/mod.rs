//! Approval rule for a student's result in a subject.
//!
//! A student passes with a final grade of at least 50 and no more than 20
//! absences. Either value may still be missing while a grade is being typed,
//! so the evaluator also reports pending states and hides itself when nothing
//! is known yet.

mod policy;

#[cfg(test)]
mod tests;

pub use policy::{
    AbsenceObservation, ApprovalStatus, GradeObservation, InvalidStatus, RejectionReason,
    StatusCategory, MAX_ALLOWED_ABSENCES, PASSING_GRADE,
};

use crate::fields::{AbsenceCount, Grade, Observation};

/// Maps the current grade and absence observations to a status.
///
/// Total and pure: every input pair has exactly one result and repeated calls
/// with the same inputs agree.
pub fn evaluate(grade: GradeObservation, absences: AbsenceObservation) -> ApprovalStatus {
    policy::decide_status(grade, absences)
}

/// Evaluates classified field observations. Invalid fields count as unknown.
pub fn evaluate_observations(
    grade: Observation<Grade>,
    absences: Observation<AbsenceCount>,
) -> ApprovalStatus {
    evaluate(grade.known(), absences.known())
}
