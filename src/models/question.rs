//! Quiz question model and its wire representation.
//!
//! The backend tags the question kind with a free string (`"MULTI"` /
//! `"OX"`) and always ships four option slots, leaving the unused ones empty
//! for OX questions. The client converts that into a tagged variant up front
//! so the rest of the code never counts slots.

use serde::Deserialize;

use crate::QuizError;

/// Fixed option labels for true/false questions.
pub const TRUE_FALSE_LABELS: [&str; 2] = ["O", "X"];

/// How a question presents its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Four authored option texts.
    MultipleChoice { options: [String; 4] },
    /// Two implicit O/X slots.
    TrueFalse,
}

/// One quiz item for a piece of content.
///
/// The batch arrives from the server at session start and is never mutated
/// client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub prompt: String,
    pub kind: QuestionKind,
    /// Correct option number in text form (`"1"`..`"4"`), trusted as ground
    /// truth for local scoring.
    pub answer: String,
}

impl Question {
    /// Option texts in display order (2 for true/false, 4 otherwise).
    pub fn options(&self) -> Vec<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => {
                options.iter().map(String::as_str).collect()
            }
            QuestionKind::TrueFalse => TRUE_FALSE_LABELS.to_vec(),
        }
    }

    pub fn option_count(&self) -> usize {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => 4,
            QuestionKind::TrueFalse => 2,
        }
    }
}

/// Question as shipped by `GET /quiz/game/{contentsId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: i64,
    pub prompt: String,
    pub kind: String,
    #[serde(default)]
    pub option1: String,
    #[serde(default)]
    pub option2: String,
    #[serde(default)]
    pub option3: String,
    #[serde(default)]
    pub option4: String,
    pub answer: String,
}

impl TryFrom<QuestionDto> for Question {
    type Error = QuizError;

    fn try_from(dto: QuestionDto) -> Result<Self, QuizError> {
        let kind = match dto.kind.as_str() {
            "MULTI" => {
                let options = [dto.option1, dto.option2, dto.option3, dto.option4];
                if options.iter().any(|o| o.trim().is_empty()) {
                    return Err(QuizError::MalformedQuestion(format!(
                        "question {} is missing an option text",
                        dto.id
                    )));
                }
                QuestionKind::MultipleChoice { options }
            }
            "OX" => QuestionKind::TrueFalse,
            other => {
                return Err(QuizError::MalformedQuestion(format!(
                    "question {} has unknown kind {:?}",
                    dto.id, other
                )))
            }
        };

        Ok(Question {
            id: dto.id,
            prompt: dto.prompt,
            kind,
            answer: dto.answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(kind: &str, options: [&str; 4]) -> QuestionDto {
        QuestionDto {
            id: 7,
            prompt: "Who directed it?".to_string(),
            kind: kind.to_string(),
            option1: options[0].to_string(),
            option2: options[1].to_string(),
            option3: options[2].to_string(),
            option4: options[3].to_string(),
            answer: "2".to_string(),
        }
    }

    #[test]
    fn test_multi_conversion() {
        let q = Question::try_from(dto("MULTI", ["a", "b", "c", "d"])).unwrap();
        assert_eq!(q.option_count(), 4);
        assert_eq!(q.options(), vec!["a", "b", "c", "d"]);
        assert_eq!(q.answer, "2");
    }

    #[test]
    fn test_ox_conversion_ignores_option_slots() {
        let q = Question::try_from(dto("OX", ["", "", "", ""])).unwrap();
        assert_eq!(q.kind, QuestionKind::TrueFalse);
        assert_eq!(q.options(), vec!["O", "X"]);
        assert_eq!(q.option_count(), 2);
    }

    #[test]
    fn test_multi_with_blank_option_is_rejected() {
        let err = Question::try_from(dto("MULTI", ["a", "  ", "c", "d"])).unwrap_err();
        assert!(matches!(err, QuizError::MalformedQuestion(_)));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Question::try_from(dto("ESSAY", ["a", "b", "c", "d"])).unwrap_err();
        assert!(matches!(err, QuizError::MalformedQuestion(_)));
    }

    #[test]
    fn test_dto_deserialization() {
        let json = r#"{
            "id": 3,
            "prompt": "Released before 2010?",
            "kind": "OX",
            "answer": "1"
        }"#;
        let dto: QuestionDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, 3);
        assert_eq!(dto.option1, "");
        let q = Question::try_from(dto).unwrap();
        assert_eq!(q.kind, QuestionKind::TrueFalse);
    }
}
