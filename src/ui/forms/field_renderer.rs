//! Field rendering utilities for forms

use crate::state::{options, Field, FieldKind, FieldOption, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, borders included
pub fn field_height(field: Field) -> u16 {
    match field.kind() {
        FieldKind::Multiline => 6,
        _ => 3,
    }
}

/// Draw one field with its current value and any inline errors
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    form: &FormState,
    errors: &[&str],
    is_active: bool,
) {
    let has_errors = !errors.is_empty();
    let border_style = if has_errors {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match field.kind() {
        FieldKind::Text | FieldKind::Multiline => text_content(form.text(field), is_active),
        FieldKind::Choice(choices) => choice_content(choices, form.text(field), is_active),
        FieldKind::Flag => flag_content(form.flag(field), is_active),
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.prompt()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if has_errors {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", errors.join("; ")),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn cursor_span() -> Span<'static> {
    Span::styled("▌", Style::default().fg(Color::Cyan))
}

fn text_content(value: &str, is_active: bool) -> Paragraph<'static> {
    if value.is_empty() && !is_active {
        return Paragraph::new(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let style = value_style(is_active);
    // split('\n') keeps a trailing empty line so the cursor follows a newline
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span());
        }
    }
    Paragraph::new(lines)
}

fn choice_content(
    choices: &[FieldOption],
    value: &str,
    is_active: bool,
) -> Paragraph<'static> {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = if value.is_empty() {
        Span::styled("Select an option", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            options::option_label(choices, value).to_string(),
            value_style(is_active).add_modifier(Modifier::BOLD),
        )
    };

    Paragraph::new(Line::from(vec![
        Span::styled("◀ ", arrow_style),
        label,
        Span::styled(" ▶", arrow_style),
    ]))
}

fn flag_content(checked: bool, is_active: bool) -> Paragraph<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        value_style(is_active)
    };
    Paragraph::new(Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(" Yes", value_style(is_active)),
    ]))
}
