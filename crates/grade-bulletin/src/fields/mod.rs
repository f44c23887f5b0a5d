//! Parse-then-classify validators for the grade entry form fields.
//!
//! Raw field text is never coerced directly into numbers. Each validator turns
//! the text into an [`Observation`], which keeps "nothing typed yet" apart from
//! "typed something we cannot accept".

mod numeric;
mod text;

pub use numeric::{
    classify_absences, classify_grade, format_grade, AbsenceCount, Grade, MAX_ABSENCE_COUNT,
    MAX_GRADE, MIN_GRADE,
};
pub use text::{validate_email, validate_registration_number, MIN_REGISTRATION_LENGTH};

use crate::presentation::StatusMessages;
use serde::{Deserialize, Serialize};

/// Inputs that make up the grade entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[serde(rename = "grade_1")]
    Grade1,
    #[serde(rename = "grade_2")]
    Grade2,
    #[serde(rename = "grade_3")]
    Grade3,
    FinalGrade,
    Absences,
    RegistrationNumber,
    Email,
}

impl FieldKind {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Grade1,
            Self::Grade2,
            Self::Grade3,
            Self::FinalGrade,
            Self::Absences,
            Self::RegistrationNumber,
            Self::Email,
        ]
    }

    /// Form input name as rendered by the bulletin templates.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grade1 => "grade_1",
            Self::Grade2 => "grade_2",
            Self::Grade3 => "grade_3",
            Self::FinalGrade => "final_grade",
            Self::Absences => "absences",
            Self::RegistrationNumber => "registration_number",
            Self::Email => "email",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|field| field.name() == name.trim())
    }
}

/// Reasons a non-empty field value cannot be accepted.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("'{raw}' is not a valid number")]
    Format { raw: String },
    #[error("{value} is outside the accepted range {min}..={max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("value does not match the expected format: {expected}")]
    Pattern { expected: &'static str },
}

/// A field's current value classified as unknown, known-valid, or known-invalid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Observation<T> {
    Unknown,
    Valid(T),
    Invalid(FieldError),
}

impl<T> Observation<T> {
    /// Value usable by the evaluator. Invalid input counts as unknown.
    pub fn known(self) -> Option<T> {
        match self {
            Observation::Valid(value) => Some(value),
            Observation::Unknown | Observation::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Observation::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Observation::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackState {
    Valid,
    Invalid,
    /// Empty optional field; no feedback is shown.
    Cleared,
}

impl FeedbackState {
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Valid => Some("is-valid"),
            Self::Invalid => Some("is-invalid"),
            Self::Cleared => None,
        }
    }
}

/// Inline feedback shown next to a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFeedback {
    pub field: FieldKind,
    pub state: FeedbackState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldFeedback {
    pub fn cleared(field: FieldKind) -> Self {
        Self {
            field,
            state: FeedbackState::Cleared,
            message: None,
        }
    }
}

pub fn feedback<T>(
    field: FieldKind,
    observation: &Observation<T>,
    messages: &StatusMessages,
) -> FieldFeedback {
    let (valid, invalid) = messages.field_messages(field);
    match observation {
        Observation::Unknown => FieldFeedback::cleared(field),
        Observation::Valid(_) => FieldFeedback {
            field,
            state: FeedbackState::Valid,
            message: Some(valid.to_string()),
        },
        Observation::Invalid(_) => FieldFeedback {
            field,
            state: FeedbackState::Invalid,
            message: Some(invalid.to_string()),
        },
    }
}

/// Classifies raw text for any form field and returns its inline feedback.
pub fn validate_field(field: FieldKind, raw: &str, messages: &StatusMessages) -> FieldFeedback {
    match field {
        FieldKind::Grade1 | FieldKind::Grade2 | FieldKind::Grade3 | FieldKind::FinalGrade => {
            feedback(field, &classify_grade(raw), messages)
        }
        FieldKind::Absences => feedback(field, &classify_absences(raw), messages),
        FieldKind::RegistrationNumber => {
            feedback(field, &validate_registration_number(raw), messages)
        }
        FieldKind::Email => feedback(field, &validate_email(raw), messages),
    }
}
