//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod review;
mod success;

use crate::app::App;
use crate::controller::Phase;
use crate::state::Step;
use components::render_error_dialog;
use ratatui::Frame;

pub use review::line_count as review_line_count;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header, app);

    match app.controller.phase() {
        Phase::Submitted(receipt) => success::draw(frame, screen.content, receipt),
        Phase::Editing(Step::ReviewSubmit) => {
            review::draw(frame, screen.content, app);
            layout::draw_nav_buttons(frame, screen.nav, app);
        }
        Phase::Editing(_) => {
            forms::draw_step_form(frame, screen.content, app);
            layout::draw_nav_buttons(frame, screen.nav, app);
        }
    }

    layout::draw_status_bar(frame, screen.status, app);

    if let Some(error) = app.state.current_error() {
        let remaining = app.state.error_queue.len().saturating_sub(1);
        render_error_dialog(frame, error, remaining);
    }
}
