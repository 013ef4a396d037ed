//! Application state definitions

use std::collections::VecDeque;

/// Reachability of the intake backend, as last seen by the health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

/// UI-side state that is not part of the form itself
#[derive(Debug, Default)]
pub struct AppState {
    /// Index of the focused field among the current step's visible fields
    pub active_form_field: usize,
    /// Scroll offset of the review summary
    pub scroll_offset: usize,
    /// Backend reachability shown in the status bar
    pub api_status: ApiStatus,
    /// Errors waiting to be shown in the modal dialog, oldest first
    pub error_queue: VecDeque<String>,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Move focus to the next field, wrapping around
    pub fn next_form_field(&mut self, field_count: usize) {
        if field_count == 0 {
            self.active_form_field = 0;
            return;
        }
        self.active_form_field = (self.active_form_field + 1) % field_count;
    }

    /// Move focus to the previous field, wrapping around
    pub fn prev_form_field(&mut self, field_count: usize) {
        if field_count == 0 {
            self.active_form_field = 0;
        } else if self.active_form_field == 0 {
            self.active_form_field = field_count - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Keep focus in range after the set of visible fields shrinks
    pub fn clamp_form_field(&mut self, field_count: usize) {
        self.active_form_field = self.active_form_field.min(field_count.saturating_sub(1));
    }

    /// Reset per-step UI state when the step changes
    pub fn enter_step(&mut self) {
        self.active_form_field = 0;
        self.scroll_offset = 0;
    }
}
