use super::{FieldError, Observation};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;
/// Upper bound accepted by the bulletin's absences input.
pub const MAX_ABSENCE_COUNT: u32 = 200;

/// Grade on the 0-100 scale. Always finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade(f64);

impl Grade {
    pub fn new(value: f64) -> Result<Self, FieldError> {
        if !value.is_finite() {
            return Err(FieldError::Format {
                raw: value.to_string(),
            });
        }

        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(FieldError::OutOfRange {
                value,
                min: MIN_GRADE,
                max: MAX_GRADE,
            });
        }

        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = FieldError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

/// Number of recorded absences for a student in a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AbsenceCount(u32);

impl AbsenceCount {
    pub fn new(count: u32) -> Result<Self, FieldError> {
        if count > MAX_ABSENCE_COUNT {
            return Err(absences_out_of_range(f64::from(count)));
        }

        Ok(Self(count))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for AbsenceCount {
    type Error = FieldError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AbsenceCount> for u32 {
    fn from(count: AbsenceCount) -> Self {
        count.0
    }
}

pub fn classify_grade(raw: &str) -> Observation<Grade> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Observation::Unknown;
    }

    let parsed = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Observation::Invalid(FieldError::Format {
                raw: trimmed.to_string(),
            })
        }
    };

    match Grade::new(parsed) {
        Ok(grade) => Observation::Valid(grade),
        Err(err) => Observation::Invalid(err),
    }
}

pub fn classify_absences(raw: &str) -> Observation<AbsenceCount> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Observation::Unknown;
    }

    let parsed = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            let error = match err.kind() {
                IntErrorKind::PosOverflow => absences_out_of_range(f64::INFINITY),
                IntErrorKind::NegOverflow => absences_out_of_range(f64::NEG_INFINITY),
                _ => FieldError::Format {
                    raw: trimmed.to_string(),
                },
            };
            return Observation::Invalid(error);
        }
    };

    let count = match u32::try_from(parsed) {
        Ok(count) => count,
        Err(_) => return Observation::Invalid(absences_out_of_range(parsed as f64)),
    };

    match AbsenceCount::new(count) {
        Ok(count) => Observation::Valid(count),
        Err(err) => Observation::Invalid(err),
    }
}

fn absences_out_of_range(value: f64) -> FieldError {
    FieldError::OutOfRange {
        value,
        min: 0.0,
        max: f64::from(MAX_ABSENCE_COUNT),
    }
}

/// Renders a grade with one decimal place, as shown on the bulletin.
/// Ties round away from zero (72.25 -> "72.3").
pub fn format_grade(grade: Grade) -> String {
    let rounded = (grade.value() * 10.0).round() / 10.0;
    format!("{:.1}", rounded)
}
