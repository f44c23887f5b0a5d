use crate::approval::RejectionReason;
use crate::fields::FieldKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Single-locale message table used to render statuses and field feedback.
///
/// Keys missing from a loaded catalog keep their default (pt-BR) text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessages {
    pub approved: String,
    pub rejected: String,
    pub pending_absences: String,
    pub pending_grade: String,
    pub insufficient_grade: String,
    pub excessive_absences: String,
    pub grade_valid: String,
    pub grade_invalid: String,
    pub absences_valid: String,
    pub absences_invalid: String,
    pub registration_valid: String,
    pub registration_invalid: String,
    pub email_valid: String,
    pub email_invalid: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            approved: "Aluno será APROVADO".to_string(),
            rejected: "Aluno será REPROVADO".to_string(),
            pending_absences: "Aguardando informação de faltas".to_string(),
            pending_grade: "Aguardando nota final".to_string(),
            insufficient_grade: "nota insuficiente".to_string(),
            excessive_absences: "excesso de faltas".to_string(),
            grade_valid: "Nota válida".to_string(),
            grade_invalid: "Nota deve estar entre 0 e 100".to_string(),
            absences_valid: "Número de faltas válido".to_string(),
            absences_invalid: "Faltas devem ser um número inteiro entre 0 e 200".to_string(),
            registration_valid: "Número de matrícula válido".to_string(),
            registration_invalid: "Deve conter pelo menos 3 caracteres alfanuméricos"
                .to_string(),
            email_valid: "Email válido".to_string(),
            email_invalid: "Formato de email inválido".to_string(),
        }
    }
}

impl StatusMessages {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MessageCatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading message catalog");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MessageCatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn reason(&self, reason: RejectionReason) -> &str {
        match reason {
            RejectionReason::InsufficientGrade => &self.insufficient_grade,
            RejectionReason::ExcessiveAbsences => &self.excessive_absences,
        }
    }

    /// Comma-joined reason phrase, e.g. "nota insuficiente, excesso de faltas".
    pub fn reasons_phrase(&self, reasons: &[RejectionReason]) -> String {
        reasons
            .iter()
            .map(|reason| self.reason(*reason))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Valid and invalid feedback text for a field.
    pub fn field_messages(&self, field: FieldKind) -> (&str, &str) {
        match field {
            FieldKind::Grade1 | FieldKind::Grade2 | FieldKind::Grade3 | FieldKind::FinalGrade => {
                (self.grade_valid.as_str(), self.grade_invalid.as_str())
            }
            FieldKind::Absences => (
                self.absences_valid.as_str(),
                self.absences_invalid.as_str(),
            ),
            FieldKind::RegistrationNumber => (
                self.registration_valid.as_str(),
                self.registration_invalid.as_str(),
            ),
            FieldKind::Email => (self.email_valid.as_str(), self.email_invalid.as_str()),
        }
    }
}

#[derive(Debug)]
pub enum MessageCatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for MessageCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageCatalogError::Io(err) => write!(f, "failed to read message catalog: {}", err),
            MessageCatalogError::Json(err) => write!(f, "invalid message catalog: {}", err),
        }
    }
}

impl std::error::Error for MessageCatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MessageCatalogError::Io(err) => Some(err),
            MessageCatalogError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for MessageCatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for MessageCatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
