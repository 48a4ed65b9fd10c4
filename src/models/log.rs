//! Submission log rows for the results endpoint.

use serde::{Deserialize, Serialize};

/// One correctness record, built transiently right before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionLogEntry {
    pub quiz_id: i64,
    pub correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serialization() {
        let entry = SubmissionLogEntry {
            quiz_id: 12,
            correct: true,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"quizId":12,"correct":true}"#);
    }
}
