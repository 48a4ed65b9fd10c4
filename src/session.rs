//! Client-side quiz session state.
//!
//! One `Session` spans a single quiz-taking episode: the immutable question
//! batch fetched at start, the cursor over it, and the answers recorded so
//! far. Nothing here performs IO; scoring happens locally at submission time
//! against the authoritative answer shipped with each question, and the
//! caller decides when to send the resulting log.

use std::collections::HashMap;

use crate::models::{Question, SubmissionLogEntry};
use crate::QuizError;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No question batch loaded yet.
    #[default]
    NotStarted,
    /// Questions loaded; navigation and answering allowed.
    InProgress,
    /// Results sent; terminal.
    Submitted,
}

/// The ephemeral state of one quiz attempt.
pub struct Session {
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<i64, String>,
    phase: SessionPhase,
}

impl Session {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            current: 0,
            answers: HashMap::new(),
            phase: SessionPhase::NotStarted,
        }
    }

    /// Install a freshly fetched batch, resetting the cursor and answers.
    pub fn begin(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.current = 0;
        self.answers.clear();
        self.phase = SessionPhase::InProgress;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Step to the next question; no-op at the last one (no wraparound).
    pub fn next(&mut self) {
        if self.phase == SessionPhase::InProgress && self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Step back; no-op at the first question.
    pub fn previous(&mut self) {
        if self.phase == SessionPhase::InProgress && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Record the chosen 1-based option number for a question, overwriting
    /// any earlier choice. No scoring happens here; feedback is withheld
    /// until submission.
    pub fn record_answer(&mut self, question_id: i64, option_number: u8) {
        if self.phase == SessionPhase::InProgress {
            self.answers.insert(question_id, option_number.to_string());
        }
    }

    /// The recorded answer text for a question, if any.
    pub fn answer_for(&self, question_id: i64) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// The submit gate: every question has some recorded answer. This only
    /// compares counts, not which ids are present.
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.answers.len() == self.questions.len()
    }

    /// Build the correctness log, one entry per question in batch order.
    ///
    /// Refused while the gate fails. An answer is correct iff its trimmed
    /// text equals the trimmed authoritative text; a missing comparison past
    /// the gate scores as incorrect.
    pub fn build_log(&self) -> Result<Vec<SubmissionLogEntry>, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::IncompleteAnswers {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }

        Ok(self
            .questions
            .iter()
            .map(|q| {
                let correct = self
                    .answers
                    .get(&q.id)
                    .map(|given| given.trim() == q.answer.trim())
                    .unwrap_or(false);
                SubmissionLogEntry {
                    quiz_id: q.id,
                    correct,
                }
            })
            .collect())
    }

    /// Mark the session finished after a successful submit. Terminal: a
    /// fresh `begin` is required to quiz again.
    pub fn mark_submitted(&mut self) {
        self.phase = SessionPhase::Submitted;
    }

    /// Drop all state, as when the quiz view closes without submitting.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    fn ox(id: i64, answer: &str) -> Question {
        Question {
            id,
            prompt: format!("question {}", id),
            kind: QuestionKind::TrueFalse,
            answer: answer.to_string(),
        }
    }

    fn multi(id: i64, answer: &str) -> Question {
        Question {
            id,
            prompt: format!("question {}", id),
            kind: QuestionKind::MultipleChoice {
                options: [
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
            },
            answer: answer.to_string(),
        }
    }

    fn two_question_session() -> Session {
        let mut session = Session::new();
        session.begin(vec![ox(1, "1"), ox(2, "2")]);
        session
    }

    #[test]
    fn test_begin_resets_everything() {
        let mut session = two_question_session();
        session.record_answer(1, 1);
        session.next();

        session.begin(vec![multi(10, "3")]);
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.total(), 1);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut session = two_question_session();

        for _ in 0..10 {
            session.previous();
        }
        assert_eq!(session.current_index(), 0);

        for _ in 0..10 {
            session.next();
        }
        assert_eq!(session.current_index(), 1);

        session.previous();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_navigation_is_inert_outside_in_progress() {
        let mut session = Session::new();
        session.next();
        session.previous();
        assert_eq!(session.current_index(), 0);

        let mut session = two_question_session();
        session.record_answer(1, 1);
        session.record_answer(2, 2);
        session.mark_submitted();
        session.next();
        assert_eq!(session.current_index(), 0);
        session.record_answer(1, 2);
        assert_eq!(session.answer_for(1), Some("1"));
    }

    #[test]
    fn test_record_answer_overwrites() {
        let mut session = two_question_session();
        session.record_answer(1, 1);
        session.record_answer(1, 2);
        session.record_answer(1, 1);

        assert_eq!(session.answer_for(1), Some("1"));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_incomplete_session_refuses_log() {
        let mut session = two_question_session();
        session.record_answer(1, 1);

        match session.build_log() {
            Err(QuizError::IncompleteAnswers { answered, total }) => {
                assert_eq!(answered, 1);
                assert_eq!(total, 2);
            }
            other => panic!("expected IncompleteAnswers, got {:?}", other.map(|_| ())),
        }
        assert!(!session.is_complete());
    }

    #[test]
    fn test_all_correct_log() {
        let mut session = two_question_session();
        session.record_answer(1, 1);
        session.record_answer(2, 2);

        let log = session.build_log().unwrap();
        assert_eq!(
            log,
            vec![
                SubmissionLogEntry {
                    quiz_id: 1,
                    correct: true
                },
                SubmissionLogEntry {
                    quiz_id: 2,
                    correct: true
                },
            ]
        );
    }

    #[test]
    fn test_wrong_answer_is_logged_incorrect() {
        let mut session = two_question_session();
        session.record_answer(1, 2);
        session.record_answer(2, 2);

        let log = session.build_log().unwrap();
        assert_eq!(
            log,
            vec![
                SubmissionLogEntry {
                    quiz_id: 1,
                    correct: false
                },
                SubmissionLogEntry {
                    quiz_id: 2,
                    correct: true
                },
            ]
        );
    }

    #[test]
    fn test_log_comparison_trims_whitespace() {
        let mut session = Session::new();
        session.begin(vec![ox(1, " 1 ")]);
        session.record_answer(1, 1);

        let log = session.build_log().unwrap();
        assert!(log[0].correct);
    }

    #[test]
    fn test_one_entry_per_question_in_order() {
        let mut session = Session::new();
        session.begin(vec![multi(30, "1"), ox(10, "2"), multi(20, "4")]);
        session.record_answer(30, 1);
        session.record_answer(10, 1);
        session.record_answer(20, 4);

        let ids: Vec<i64> = session.build_log().unwrap().iter().map(|e| e.quiz_id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_gate_passes_on_count_not_identity() {
        // The gate is deliberately shallow: an answer for a foreign id still
        // counts, and the unanswered question scores as incorrect.
        let mut session = two_question_session();
        session.record_answer(1, 1);
        session.record_answer(99, 1);

        assert!(session.is_complete());
        let log = session.build_log().unwrap();
        assert!(log[0].correct);
        assert!(!log[1].correct);
    }

    #[test]
    fn test_empty_session_is_never_complete() {
        let session = Session::new();
        assert!(!session.is_complete());
        assert!(session.build_log().is_err());
    }

    #[test]
    fn test_failed_submit_leaves_state_for_retry() {
        // The caller only marks the session submitted after a successful
        // network call; until then the same log can be rebuilt.
        let mut session = two_question_session();
        session.record_answer(1, 1);
        session.record_answer(2, 2);

        let first = session.build_log().unwrap();
        let second = session.build_log().unwrap();
        assert_eq!(first, second);
        assert_eq!(session.phase(), SessionPhase::InProgress);

        session.mark_submitted();
        assert_eq!(session.phase(), SessionPhase::Submitted);
    }

    #[test]
    fn test_reset_returns_to_not_started() {
        let mut session = two_question_session();
        session.record_answer(1, 1);
        session.reset();

        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(session.total(), 0);
        assert_eq!(session.answered_count(), 0);
    }
}
