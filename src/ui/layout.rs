//! Layout components (header, navigation bar, status bar)

use super::components::{button_width, render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::controller::Phase;
use crate::state::{ApiStatus, ProgressDot, Step};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub nav: Rect,
    pub status: Rect,
}

/// Split the screen into header, content, navigation and status rows
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Header
            Constraint::Min(0),                // Content
            Constraint::Length(BUTTON_HEIGHT), // Back / Next
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        content: chunks[1],
        nav: chunks[2],
        status: chunks[3],
    }
}

/// Draw the title and the progress dots
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Keylight Intake ")
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match app.controller.phase() {
        Phase::Submitted(_) => vec![Line::from(Span::styled(
            "Application received",
            Style::default().fg(Color::Green),
        ))],
        Phase::Editing(step) => vec![
            Line::from(vec![
                Span::styled(
                    format!("Step {} of {}  ", step.number(), Step::TOTAL),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    step.title(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            progress_line(&app.controller.progress()),
        ],
    };

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(header, area);
}

fn progress_line(dots: &[ProgressDot]) -> Line<'static> {
    let mut spans = Vec::with_capacity(dots.len() * 2);
    for (idx, dot) in dots.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("──", Style::default().fg(Color::DarkGray)));
        }
        spans.push(match dot {
            ProgressDot::Completed => Span::styled("●", Style::default().fg(Color::Green)),
            ProgressDot::Active => Span::styled(
                "◉",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            ProgressDot::Pending => Span::styled("○", Style::default().fg(Color::DarkGray)),
        });
    }
    Line::from(spans)
}

/// Draw the Back and Next/Submit buttons
pub fn draw_nav_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let nav = app.controller.nav_buttons();
    let back_label = "Back";

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width(back_label)),
            Constraint::Min(0),
            Constraint::Length(button_width(nav.next_label)),
        ])
        .horizontal_margin(1)
        .split(area);

    if nav.show_back {
        render_button(frame, chunks[0], back_label, None, nav.back_enabled);
    }

    let accent = if app.controller.step().is_last() {
        Color::Green
    } else {
        Color::Cyan
    };
    render_button(frame, chunks[2], nav.next_label, Some(accent), nav.next_enabled);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Backend reachability
    spans.push(match app.state.api_status {
        ApiStatus::Connected => Span::styled(" ● ", Style::default().fg(Color::Green)),
        ApiStatus::Disconnected => Span::styled(" ○ ", Style::default().fg(Color::Red)),
        ApiStatus::Unknown => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    });

    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for what is on screen
fn view_hints(app: &App) -> &'static str {
    if app.state.has_errors() {
        return "Enter/Esc:dismiss";
    }
    match app.controller.phase() {
        Phase::Submitted(_) => "Enter/q:exit",
        Phase::Editing(Step::ReviewSubmit) => "↑/↓:scroll  Enter:submit  Esc:back  ^R:restart",
        Phase::Editing(Step::Contact) => "Tab:next field  Enter:continue  ^R:restart",
        Phase::Editing(Step::ProjectDetails) => {
            "Tab:next field  ←/→:choose  Alt+Enter:newline  Enter:continue  Esc:back"
        }
        Phase::Editing(_) => "Tab:next field  ←/→:choose  Space:toggle  Enter:continue  Esc:back",
    }
}
