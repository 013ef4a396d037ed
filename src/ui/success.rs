//! Confirmation shown once the backend accepts the application

use crate::api::SubmissionReceipt;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, receipt: &SubmissionReceipt) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    let submitted_at = receipt
        .submitted_at
        .with_timezone(&Local)
        .format("%b %-d, %Y at %H:%M");

    let lines = vec![
        Line::from(Span::styled(
            "✓ Thank You!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(receipt.message.as_str()),
        Line::from("We'll be in touch soon to discuss your project."),
        Line::from(""),
        Line::from(Span::styled(
            format!("Submitted {submitted_at}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, chunks[1]);
}
