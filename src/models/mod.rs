mod log;
mod question;
mod report;

pub use log::SubmissionLogEntry;
pub use question::{Question, QuestionDto, QuestionKind, TRUE_FALSE_LABELS};
pub use report::{Report, ReportDraft, ReportReason};
