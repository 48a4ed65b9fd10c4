//! # reelquiz
//!
//! Terminal client for the community site's content quizzes: fetch a
//! question batch for a movie or show, answer the questions one at a time,
//! score locally against the authoritative answers, and submit the result
//! log in a single request.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reelquiz::{client, QuizApi, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let api = QuizApi::new("http://localhost:8080");
//!
//!     // Fetch the batch for content 42 and run the quiz in the terminal
//!     client::run(&api, 42).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod models;
pub mod session;
pub mod telemetry;
pub mod terminal;

use std::io;

pub use api::QuizApi;
pub use models::{Question, QuestionKind, Report, ReportDraft, ReportReason, SubmissionLogEntry};
pub use session::{Session, SessionPhase};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// HTTP transport failure talking to the backend.
    Http(reqwest::Error),
    /// Backend answered with a non-success status.
    Api { status: u16 },
    /// The server shipped a question the client cannot represent.
    MalformedQuestion(String),
    /// Submission attempted before every question was answered.
    IncompleteAnswers { answered: usize, total: usize },
    /// Report draft failed local validation.
    InvalidReport(&'static str),
    /// IO error from the terminal.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Http(e) => write!(f, "request failed: {}", e),
            QuizError::Api { status } => write!(f, "server answered with status {}", status),
            QuizError::MalformedQuestion(msg) => write!(f, "malformed question: {}", msg),
            QuizError::IncompleteAnswers { answered, total } => {
                write!(f, "only {} of {} questions answered", answered, total)
            }
            QuizError::InvalidReport(msg) => write!(f, "invalid report: {}", msg),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Http(e) => Some(e),
            QuizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::Http(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}
