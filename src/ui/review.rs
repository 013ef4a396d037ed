//! Review step: read-only summary of everything entered

use crate::app::App;
use crate::controller::Feedback;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the label column
const LABEL_WIDTH: usize = 22;

/// Lines of the review summary, with the final-check errors above it
fn summary_lines(app: &App) -> Vec<Line<'_>> {
    let mut lines: Vec<Line> = Vec::new();

    if let Feedback::FormErrors(errors) = app.controller.feedback() {
        lines.push(Line::from(Span::styled(
            "Please fix the following before submitting:",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        for message in errors.messages() {
            lines.push(Line::from(Span::styled(
                format!("  • {message}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
    }

    for section in app.controller.review() {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for row in section.rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", row.label, width = LABEL_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(row.value),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Number of lines the summary occupies before wrapping
pub fn line_count(app: &App) -> usize {
    summary_lines(app).len()
}

/// Draw the review summary
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines = summary_lines(app);

    let title = if app.controller.is_submitting() {
        " Review & Submit (submitting...) "
    } else {
        " Review & Submit "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let max_scroll = lines.len().saturating_sub(1);
    let scroll = app.state.scroll_offset.min(max_scroll) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
