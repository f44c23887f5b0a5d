//! State of a grade entry form and the feedback it shows while being edited.

use crate::approval::{evaluate, ApprovalStatus};
use crate::fields::{classify_absences, classify_grade, validate_field, FieldFeedback, FieldKind};
use crate::presentation::{StatusMessages, StatusPanel};
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of a single field change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormUpdate {
    pub feedback: FieldFeedback,
    pub status: StatusPanel,
}

/// Raw text of the grade entry form.
///
/// The approval panel is recomputed from the stored text after every change;
/// nothing is carried over from earlier evaluations.
#[derive(Debug, Clone, Default)]
pub struct GradeEntryForm {
    values: BTreeMap<FieldKind, String>,
    messages: StatusMessages,
}

impl GradeEntryForm {
    pub fn new(messages: StatusMessages) -> Self {
        Self {
            values: BTreeMap::new(),
            messages,
        }
    }

    pub fn value(&self, field: FieldKind) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn update(&mut self, field: FieldKind, raw: impl Into<String>) -> FormUpdate {
        let raw = raw.into();
        let feedback = validate_field(field, &raw, &self.messages);
        self.values.insert(field, raw);

        FormUpdate {
            feedback,
            status: self.status(),
        }
    }

    pub fn clear(&mut self, field: FieldKind) -> FormUpdate {
        self.values.remove(&field);

        FormUpdate {
            feedback: FieldFeedback::cleared(field),
            status: self.status(),
        }
    }

    pub fn approval(&self) -> ApprovalStatus {
        let grade = classify_grade(self.value(FieldKind::FinalGrade)).known();
        let absences = classify_absences(self.value(FieldKind::Absences)).known();
        evaluate(grade, absences)
    }

    pub fn status(&self) -> StatusPanel {
        StatusPanel::render(&self.approval(), &self.messages)
    }

    /// Feedback for every field that currently holds text.
    pub fn feedback(&self) -> Vec<FieldFeedback> {
        self.values
            .iter()
            .map(|(field, raw)| validate_field(*field, raw, &self.messages))
            .collect()
    }
}
