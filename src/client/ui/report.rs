//! Report popup: reason picker plus free-text detail.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::models::ReportReason;

use super::render::centered_rect;

/// Render the report form over the quiz screen.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    cursor: usize,
    detail: &str,
    error: Option<&str>,
) {
    let popup = centered_rect(area, 60, 14);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::from(Span::styled(
        "Why are you reporting this question?",
        Style::default().fg(Color::White).bold(),
    ))];
    lines.push(Line::from(""));

    for (i, reason) in ReportReason::ALL.iter().enumerate() {
        let is_selected = i == cursor;
        let prefix = if is_selected { "> " } else { "  " };
        let style = if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, reason.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Detail: ", Style::default().fg(Color::Cyan)),
        Span::styled(detail, Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]));

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Detail is required for \"Other\"",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(Span::styled(
        "Up/Down reason  ·  type detail  ·  Enter send  ·  Esc cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Report question ")
            .title_style(Style::default().fg(Color::Red).bold())
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, popup);
}
