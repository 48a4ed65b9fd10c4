//! Quiz screen: progress, prompt, options, key hints.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::client::state::ClientApp;
use crate::models::Question;

/// Render the quiz screen.
pub fn render(frame: &mut Frame, area: Rect, app: &ClientApp) {
    let Some(question) = app.session.current_question() else {
        // Empty batch: nothing to render.
        let empty = Paragraph::new("No questions for this content")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Progress
        Constraint::Length(7), // Prompt
        Constraint::Min(8),    // Options
        Constraint::Length(2), // Controls
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], &question.prompt);
    render_options(frame, chunks[2], app, question);
    render_controls(frame, chunks[3]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &ClientApp) {
    let text = format!(
        "Question {} of {}  ·  {} answered",
        app.session.current_index() + 1,
        app.session.total(),
        app.session.answered_count()
    );

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());

    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &ClientApp, question: &Question) {
    let recorded = app
        .session
        .answer_for(question.id)
        .and_then(|text| text.parse::<usize>().ok());

    let lines: Vec<Line> = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let is_selected = i == app.selected_option;
            let is_recorded = recorded == Some(i + 1);
            let prefix = if is_selected { "> " } else { "  " };
            let marker = if is_recorded { " ●" } else { "" };

            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else if is_recorded {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{}) ", i + 1), style),
                Span::styled(opt.to_string(), style),
                Span::styled(marker, Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k select  ·  Enter/Space answer  ·  h/l navigate  ·  s submit  ·  r report  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);

    frame.render_widget(widget, area);
}
