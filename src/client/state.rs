//! View state for the quiz-taking screen.

use crate::models::Question;
use crate::session::Session;

/// Popup layered over the quiz screen.
#[derive(Debug, Clone)]
pub enum Popup {
    /// Cancellable confirmation before results are sent.
    ConfirmSubmit,
    /// Report form for one question.
    Report {
        target: i64,
        /// Index into `ReportReason::ALL`.
        cursor: usize,
        detail: String,
        error: Option<String>,
    },
    /// Blocking acknowledgment; any key dismisses it.
    Notice { message: String },
}

/// Which screen the client is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Taking the quiz.
    Quiz,
    /// Results sent; any key exits.
    Finished,
}

/// Client application state: the quiz session plus screen chrome.
pub struct ClientApp {
    pub session: Session,
    pub view: View,
    pub popup: Option<Popup>,
    /// Option cursor for the question currently on screen.
    pub selected_option: usize,
    pub should_quit: bool,
}

impl ClientApp {
    /// Create the app around a freshly fetched question batch.
    pub fn new(questions: Vec<Question>) -> Self {
        let mut session = Session::new();
        session.begin(questions);
        Self {
            session,
            view: View::Quiz,
            popup: None,
            selected_option: 0,
            should_quit: false,
        }
    }

    /// Move the option cursor down, wrapping within the current question's
    /// option count.
    pub fn select_next_option(&mut self) {
        if let Some(n) = self.option_count() {
            self.selected_option = (self.selected_option + 1) % n;
        }
    }

    /// Move the option cursor up, wrapping.
    pub fn select_previous_option(&mut self) {
        if let Some(n) = self.option_count() {
            self.selected_option = (self.selected_option + n - 1) % n;
        }
    }

    /// Record the highlighted option as the answer for the current question.
    pub fn choose_selected(&mut self) {
        if let Some(question) = self.session.current_question() {
            let id = question.id;
            let option_number = (self.selected_option + 1) as u8;
            self.session.record_answer(id, option_number);
        }
    }

    pub fn go_next(&mut self) {
        self.session.next();
        self.sync_cursor();
    }

    pub fn go_previous(&mut self) {
        self.session.previous();
        self.sync_cursor();
    }

    /// Open the report popup targeting the question on screen.
    pub fn open_report(&mut self) {
        if let Some(question) = self.session.current_question() {
            self.popup = Some(Popup::Report {
                target: question.id,
                cursor: 0,
                detail: String::new(),
                error: None,
            });
        }
    }

    pub fn notice(&mut self, message: impl Into<String>) {
        self.popup = Some(Popup::Notice {
            message: message.into(),
        });
    }

    fn option_count(&self) -> Option<usize> {
        self.session.current_question().map(Question::option_count)
    }

    /// Park the option cursor on the recorded answer when revisiting a
    /// question, or the first option otherwise.
    fn sync_cursor(&mut self) {
        let recorded = self
            .session
            .current_question()
            .and_then(|q| self.session.answer_for(q.id))
            .and_then(|text| text.parse::<usize>().ok());

        self.selected_option = recorded.map(|n| n.saturating_sub(1)).unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    fn ox(id: i64) -> Question {
        Question {
            id,
            prompt: "p".to_string(),
            kind: QuestionKind::TrueFalse,
            answer: "1".to_string(),
        }
    }

    #[test]
    fn test_option_cursor_wraps_within_kind() {
        let mut app = ClientApp::new(vec![ox(1)]);
        app.select_next_option();
        assert_eq!(app.selected_option, 1);
        app.select_next_option();
        assert_eq!(app.selected_option, 0);
        app.select_previous_option();
        assert_eq!(app.selected_option, 1);
    }

    #[test]
    fn test_choose_selected_records_one_based() {
        let mut app = ClientApp::new(vec![ox(1)]);
        app.select_next_option();
        app.choose_selected();
        assert_eq!(app.session.answer_for(1), Some("2"));
    }

    #[test]
    fn test_cursor_follows_recorded_answer_on_navigation() {
        let mut app = ClientApp::new(vec![ox(1), ox(2)]);
        app.select_next_option();
        app.choose_selected(); // q1 -> "2"
        app.go_next();
        assert_eq!(app.selected_option, 0); // q2 unanswered
        app.go_previous();
        assert_eq!(app.selected_option, 1); // back on q1's recorded choice
    }
}
