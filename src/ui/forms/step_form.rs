//! Data-entry steps: one bordered box per visible field

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the fields of the current step
pub fn draw_step_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", app.controller.step().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = app.controller.visible_fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(*f)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let form = app.controller.form();
    for (idx, field) in fields.iter().enumerate() {
        let errors = app.controller.field_errors(*field);
        draw_field(
            frame,
            chunks[idx],
            *field,
            form,
            &errors,
            idx == app.state.active_form_field,
        );
    }
}
