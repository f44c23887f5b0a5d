use super::StatusMessages;
use crate::approval::ApprovalStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Danger,
    Warning,
}

impl StatusTone {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Warning => "alert-warning",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Danger => "fa-times-circle",
            Self::Warning => "fa-question-circle",
        }
    }
}

/// Visible approval indicator placed under the final grade input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPanel {
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<StatusTone>,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Single-line text, e.g. "Aluno será REPROVADO (nota insuficiente)".
    pub text: String,
}

impl StatusPanel {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            tone: None,
            headline: String::new(),
            detail: None,
            text: String::new(),
        }
    }

    pub fn render(status: &ApprovalStatus, messages: &StatusMessages) -> Self {
        let (tone, headline, detail) = match status {
            ApprovalStatus::Hidden => return Self::hidden(),
            ApprovalStatus::Approved => (StatusTone::Success, &messages.approved, None),
            ApprovalStatus::PendingAbsences => {
                (StatusTone::Warning, &messages.pending_absences, None)
            }
            ApprovalStatus::PendingGrade => (StatusTone::Warning, &messages.pending_grade, None),
            ApprovalStatus::Rejected { reasons } => (
                StatusTone::Danger,
                &messages.rejected,
                Some(messages.reasons_phrase(reasons)),
            ),
        };

        let text = match &detail {
            Some(detail) if !detail.is_empty() => format!("{} ({})", headline, detail),
            _ => headline.clone(),
        };

        Self {
            visible: true,
            tone: Some(tone),
            headline: headline.clone(),
            detail,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::RejectionReason;

    #[test]
    fn hidden_status_renders_invisible_panel() {
        let panel = StatusPanel::render(&ApprovalStatus::Hidden, &StatusMessages::default());
        assert_eq!(panel, StatusPanel::hidden());
        assert!(panel.text.is_empty());
    }

    #[test]
    fn categories_map_to_tones() {
        let messages = StatusMessages::default();

        let approved = StatusPanel::render(&ApprovalStatus::Approved, &messages);
        assert_eq!(approved.tone, Some(StatusTone::Success));
        assert_eq!(approved.text, "Aluno será APROVADO");

        let pending = StatusPanel::render(&ApprovalStatus::PendingGrade, &messages);
        assert_eq!(pending.tone.map(StatusTone::css_class), Some("alert-warning"));
        assert_eq!(pending.text, "Aguardando nota final");
    }

    #[test]
    fn rejection_lists_reasons_in_detail() {
        let status = ApprovalStatus::Rejected {
            reasons: vec![
                RejectionReason::InsufficientGrade,
                RejectionReason::ExcessiveAbsences,
            ],
        };
        let panel = StatusPanel::render(&status, &StatusMessages::default());

        assert_eq!(panel.tone, Some(StatusTone::Danger));
        assert_eq!(
            panel.text,
            "Aluno será REPROVADO (nota insuficiente, excesso de faltas)"
        );
    }

    #[test]
    fn serialized_panel_carries_single_line_text() {
        let status = ApprovalStatus::Rejected {
            reasons: vec![RejectionReason::ExcessiveAbsences],
        };
        let json = serde_json::to_value(StatusPanel::render(&status, &StatusMessages::default()))
            .expect("serializes");

        assert_eq!(json["tone"], "danger");
        assert_eq!(json["detail"], "excesso de faltas");
        assert_eq!(json["text"], "Aluno será REPROVADO (excesso de faltas)");

        let hidden = serde_json::to_value(StatusPanel::hidden()).expect("serializes");
        assert_eq!(hidden["text"], "");
    }

    #[test]
    fn tones_pick_matching_icons() {
        assert_eq!(StatusTone::Success.icon(), "fa-check-circle");
        assert_eq!(StatusTone::Danger.icon(), "fa-times-circle");
        assert_eq!(StatusTone::Warning.icon(), "fa-question-circle");
    }
}
