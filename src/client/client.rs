//! Interactive quiz-taking loop.
//!
//! The loop is single-threaded and event-driven: keys mutate the session
//! synchronously, and the two outgoing calls (result log, report) are
//! awaited inline, so only one request is ever in flight.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::api::QuizApi;
use crate::models::{ReportDraft, ReportReason};
use crate::terminal;
use crate::QuizError;

use super::state::{ClientApp, Popup, View};
use super::ui;

/// Fetch the batch for `contents_id` and run one quiz session in the
/// terminal.
///
/// A fetch failure aborts before the screen opens, the way the quiz view
/// closes on load failure instead of retrying.
pub async fn run(api: &QuizApi, contents_id: i64) -> Result<(), QuizError> {
    let questions = api.fetch_questions(contents_id).await?;
    let mut app = ClientApp::new(questions);

    let mut term = terminal::init()?;
    let result = event_loop(&mut term, &mut app, api).await;
    terminal::restore()?;
    result
}

async fn event_loop(
    term: &mut terminal::AppTerminal,
    app: &mut ClientApp,
    api: &QuizApi,
) -> Result<(), QuizError> {
    loop {
        term.draw(|frame| ui::render(frame, app))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, api, key.code).await;
            }
        }
    }

    Ok(())
}

async fn handle_key(app: &mut ClientApp, api: &QuizApi, key: KeyCode) {
    if app.popup.is_some() {
        handle_popup_key(app, api, key).await;
        return;
    }

    match app.view {
        View::Quiz => handle_quiz_key(app, key),
        View::Finished => app.should_quit = true,
    }
}

fn handle_quiz_key(app: &mut ClientApp, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_selected(),
        KeyCode::Right | KeyCode::Char('l') => app.go_next(),
        KeyCode::Left | KeyCode::Char('h') => app.go_previous(),
        KeyCode::Char('s') | KeyCode::Char('S') => request_submit(app),
        KeyCode::Char('r') | KeyCode::Char('R') => app.open_report(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

/// Local gate first, then the cancellable confirmation. No network call
/// happens until the user confirms.
fn request_submit(app: &mut ClientApp) {
    if !app.session.is_complete() {
        app.notice(format!(
            "Answer every question before submitting ({} of {} answered)",
            app.session.answered_count(),
            app.session.total()
        ));
        return;
    }
    app.popup = Some(Popup::ConfirmSubmit);
}

async fn handle_popup_key(app: &mut ClientApp, api: &QuizApi, key: KeyCode) {
    let Some(popup) = app.popup.take() else {
        return;
    };

    match popup {
        Popup::Notice { .. } => {
            // any key dismisses
        }
        Popup::ConfirmSubmit => match key {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => submit(app, api).await,
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {}
            _ => app.popup = Some(Popup::ConfirmSubmit),
        },
        Popup::Report {
            target,
            mut cursor,
            mut detail,
            error,
        } => match key {
            KeyCode::Esc => {}
            KeyCode::Up => {
                cursor = (cursor + ReportReason::ALL.len() - 1) % ReportReason::ALL.len();
                app.popup = Some(Popup::Report {
                    target,
                    cursor,
                    detail,
                    error: None,
                });
            }
            KeyCode::Down => {
                cursor = (cursor + 1) % ReportReason::ALL.len();
                app.popup = Some(Popup::Report {
                    target,
                    cursor,
                    detail,
                    error: None,
                });
            }
            KeyCode::Char(c) => {
                detail.push(c);
                app.popup = Some(Popup::Report {
                    target,
                    cursor,
                    detail,
                    error: None,
                });
            }
            KeyCode::Backspace => {
                detail.pop();
                app.popup = Some(Popup::Report {
                    target,
                    cursor,
                    detail,
                    error: None,
                });
            }
            KeyCode::Enter => {
                let draft = ReportDraft {
                    reason: Some(ReportReason::ALL[cursor]),
                    detail: detail.clone(),
                };
                match draft.validate(target) {
                    Ok(report) => match api.submit_report(&report).await {
                        Ok(()) => app.notice("Report submitted, thanks for the flag"),
                        Err(e) => app.notice(format!("Report failed: {}", e)),
                    },
                    Err(e) => {
                        app.popup = Some(Popup::Report {
                            target,
                            cursor,
                            detail,
                            error: Some(e.to_string()),
                        });
                    }
                }
            }
            _ => {
                app.popup = Some(Popup::Report {
                    target,
                    cursor,
                    detail,
                    error,
                });
            }
        },
    }
}

/// Evaluate locally and send the log once. Success ends the session; failure
/// keeps every answer in place so a manual retry still passes the gate.
async fn submit(app: &mut ClientApp, api: &QuizApi) {
    let log = match app.session.build_log() {
        Ok(log) => log,
        Err(e) => {
            app.notice(e.to_string());
            return;
        }
    };

    match api.submit_log(&log).await {
        Ok(()) => {
            app.session.mark_submitted();
            app.view = View::Finished;
        }
        Err(e) => app.notice(format!("Submission failed: {}. Your answers are kept.", e)),
    }
}
