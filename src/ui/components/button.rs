//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered, centered button.
///
/// `accent` colors a primary button; disabled buttons are always gray.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    accent: Option<Color>,
    is_enabled: bool,
) {
    let color = match accent {
        Some(color) if is_enabled => color,
        _ => Color::DarkGray,
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if accent.is_some() {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(paragraph.block(block), area);
}

/// Width a button needs for `content`, borders and padding included
pub fn button_width(content: &str) -> u16 {
    content.chars().count() as u16 + 4
}
