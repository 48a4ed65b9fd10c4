//! REST client for the quiz endpoints.
//!
//! Three calls, each a single outstanding request: fetch the question batch,
//! submit the correctness log, submit a report. Outcomes are logged without
//! bodies. No client-side timeout or retry; a failed submit leaves retry to
//! the caller, whose session state is untouched.

use tracing::{error, info};

use crate::models::{Question, QuestionDto, Report, SubmissionLogEntry};
use crate::QuizError;

/// Client for the quiz backend.
pub struct QuizApi {
    http: reqwest::Client,
    base_url: String,
}

impl QuizApi {
    /// Create a client for the backend at `base_url` (no trailing slash
    /// needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the question batch for a piece of content.
    pub async fn fetch_questions(&self, contents_id: i64) -> Result<Vec<Question>, QuizError> {
        let url = format!("{}/quiz/game/{}", self.base_url, contents_id);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            error!(contents_id, status = status.as_u16(), "question batch fetch rejected");
            return Err(QuizError::Api {
                status: status.as_u16(),
            });
        }

        let dtos: Vec<QuestionDto> = resp.json().await?;
        let questions = dtos
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        info!(contents_id, count = questions.len(), "fetched question batch");
        Ok(questions)
    }

    /// Send the full correctness log in one request.
    pub async fn submit_log(&self, entries: &[SubmissionLogEntry]) -> Result<(), QuizError> {
        let url = format!("{}/quiz/log/submit", self.base_url);

        let resp = self.http.post(&url).json(entries).send().await?;
        let status = resp.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "result submission rejected");
            return Err(QuizError::Api {
                status: status.as_u16(),
            });
        }

        info!(entries = entries.len(), "submitted quiz results");
        Ok(())
    }

    /// Send one report about a question.
    pub async fn submit_report(&self, report: &Report) -> Result<(), QuizError> {
        let url = format!("{}/quiz/report/", self.base_url);

        let resp = self.http.post(&url).json(report).send().await?;
        let status = resp.status();
        if !status.is_success() {
            error!(
                quiz_id = report.quiz_id,
                status = status.as_u16(),
                "report submission rejected"
            );
            return Err(QuizError::Api {
                status: status.as_u16(),
            });
        }

        info!(quiz_id = report.quiz_id, "submitted question report");
        Ok(())
    }
}
