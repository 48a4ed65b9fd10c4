//! Question reports and their local validation.
//!
//! Reporting is independent of the answer/submit flow: it can fire at any
//! point in a session and never touches session state.

use serde::{Deserialize, Serialize};

use crate::QuizError;

/// Reason codes accepted by the report endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportReason {
    #[serde(rename = "INCORRECT")]
    Incorrect,
    #[serde(rename = "SPAM")]
    Spam,
    #[serde(rename = "ABUSIVE")]
    Abusive,
    #[serde(rename = "ETC")]
    Etc,
}

impl ReportReason {
    pub const ALL: [ReportReason; 4] = [
        ReportReason::Incorrect,
        ReportReason::Spam,
        ReportReason::Abusive,
        ReportReason::Etc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportReason::Incorrect => "The answer is wrong",
            ReportReason::Spam => "Spam or advertising",
            ReportReason::Abusive => "Abusive or offensive",
            ReportReason::Etc => "Other",
        }
    }
}

/// A complaint about one question, validated and ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub quiz_id: i64,
    pub reason: ReportReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Form state collected from the user before a report is sent.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub reason: Option<ReportReason>,
    pub detail: String,
}

impl ReportDraft {
    /// Validate the draft against a target question.
    ///
    /// A reason must be chosen, and `ETC` requires non-blank detail text;
    /// other reasons drop the detail entirely.
    pub fn validate(&self, quiz_id: i64) -> Result<Report, QuizError> {
        let reason = self
            .reason
            .ok_or(QuizError::InvalidReport("choose a reason"))?;

        let detail = match reason {
            ReportReason::Etc => {
                let trimmed = self.detail.trim();
                if trimmed.is_empty() {
                    return Err(QuizError::InvalidReport(
                        "detail text is required for \"Other\"",
                    ));
                }
                Some(trimmed.to_string())
            }
            _ => None,
        };

        Ok(Report {
            quiz_id,
            reason,
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_without_reason_is_rejected() {
        let draft = ReportDraft::default();
        assert!(matches!(
            draft.validate(1),
            Err(QuizError::InvalidReport(_))
        ));
    }

    #[test]
    fn test_etc_requires_detail() {
        let draft = ReportDraft {
            reason: Some(ReportReason::Etc),
            detail: "   ".to_string(),
        };
        assert!(matches!(
            draft.validate(1),
            Err(QuizError::InvalidReport(_))
        ));
    }

    #[test]
    fn test_etc_with_detail_is_accepted() {
        let draft = ReportDraft {
            reason: Some(ReportReason::Etc),
            detail: " duplicate of question 4 ".to_string(),
        };
        let report = draft.validate(9).unwrap();
        assert_eq!(report.quiz_id, 9);
        assert_eq!(report.detail.as_deref(), Some("duplicate of question 4"));
    }

    #[test]
    fn test_non_etc_drops_detail() {
        let draft = ReportDraft {
            reason: Some(ReportReason::Spam),
            detail: "ignored".to_string(),
        };
        let report = draft.validate(9).unwrap();
        assert_eq!(report.detail, None);
    }

    #[test]
    fn test_report_serialization() {
        let report = Report {
            quiz_id: 5,
            reason: ReportReason::Incorrect,
            detail: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"quizId":5,"reason":"INCORRECT"}"#);

        let report = Report {
            quiz_id: 5,
            reason: ReportReason::Etc,
            detail: Some("typo in option 2".to_string()),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""reason":"ETC""#));
        assert!(json.contains(r#""detail":"typo in option 2""#));
    }
}
