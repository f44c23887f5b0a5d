use crate::fields::{AbsenceCount, Grade};
use serde::{Deserialize, Serialize};

/// Lowest final grade that still passes (inclusive).
pub const PASSING_GRADE: f64 = 50.0;
/// Highest absence count that still passes (inclusive).
pub const MAX_ALLOWED_ABSENCES: u32 = 20;

pub type GradeObservation = Option<Grade>;
pub type AbsenceObservation = Option<AbsenceCount>;

/// Why a student fails, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InsufficientGrade,
    ExcessiveAbsences,
}

/// Broad display category of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Hidden,
    Pending,
    Approved,
    Rejected,
}

impl StatusCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hidden => "Hidden",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Outcome of a single approval evaluation.
///
/// Deserialization only accepts rejections whose reasons are non-empty,
/// free of duplicates and in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case", try_from = "UncheckedStatus")]
pub enum ApprovalStatus {
    Hidden,
    PendingAbsences,
    PendingGrade,
    Approved,
    Rejected { reasons: Vec<RejectionReason> },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum UncheckedStatus {
    Hidden,
    PendingAbsences,
    PendingGrade,
    Approved,
    Rejected { reasons: Vec<RejectionReason> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStatus {
    #[error("rejected status must carry at least one reason")]
    MissingReasons,
    #[error("rejection reasons must be unique and ordered grade before absences")]
    UnorderedReasons,
}

impl TryFrom<UncheckedStatus> for ApprovalStatus {
    type Error = InvalidStatus;

    fn try_from(value: UncheckedStatus) -> Result<Self, Self::Error> {
        Ok(match value {
            UncheckedStatus::Hidden => ApprovalStatus::Hidden,
            UncheckedStatus::PendingAbsences => ApprovalStatus::PendingAbsences,
            UncheckedStatus::PendingGrade => ApprovalStatus::PendingGrade,
            UncheckedStatus::Approved => ApprovalStatus::Approved,
            UncheckedStatus::Rejected { reasons } => {
                if reasons.is_empty() {
                    return Err(InvalidStatus::MissingReasons);
                }
                if !reasons.windows(2).all(|pair| pair[0] < pair[1]) {
                    return Err(InvalidStatus::UnorderedReasons);
                }
                ApprovalStatus::Rejected { reasons }
            }
        })
    }
}

impl ApprovalStatus {
    pub fn category(&self) -> StatusCategory {
        match self {
            ApprovalStatus::Hidden => StatusCategory::Hidden,
            ApprovalStatus::PendingAbsences | ApprovalStatus::PendingGrade => {
                StatusCategory::Pending
            }
            ApprovalStatus::Approved => StatusCategory::Approved,
            ApprovalStatus::Rejected { .. } => StatusCategory::Rejected,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ApprovalStatus::Hidden)
    }

    pub fn reasons(&self) -> &[RejectionReason] {
        match self {
            ApprovalStatus::Rejected { reasons } => reasons,
            _ => &[],
        }
    }
}

fn grade_passes(grade: Grade) -> bool {
    grade.value() >= PASSING_GRADE
}

fn absences_pass(absences: AbsenceCount) -> bool {
    absences.value() <= MAX_ALLOWED_ABSENCES
}

pub(crate) fn decide_status(
    grade: GradeObservation,
    absences: AbsenceObservation,
) -> ApprovalStatus {
    let grade_ok = grade.map(grade_passes);
    let absences_ok = absences.map(absences_pass);

    match (grade_ok, absences_ok) {
        (None, None) => ApprovalStatus::Hidden,
        (Some(true), None) => ApprovalStatus::PendingAbsences,
        (None, Some(true)) => ApprovalStatus::PendingGrade,
        (Some(true), Some(true)) => ApprovalStatus::Approved,
        (grade_ok, absences_ok) => {
            let mut reasons = Vec::with_capacity(2);
            if grade_ok == Some(false) {
                reasons.push(RejectionReason::InsufficientGrade);
            }
            if absences_ok == Some(false) {
                reasons.push(RejectionReason::ExcessiveAbsences);
            }
            ApprovalStatus::Rejected { reasons }
        }
    }
}
