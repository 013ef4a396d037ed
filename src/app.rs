//! Application state and key handling
//!
//! `App` is the adapter between terminal events and the form controller:
//! it tracks focus, routes keystrokes to value mutations, and runs the
//! submission request on a background task so the UI keeps drawing.

use crate::api::{ApiClient, HealthStatus, IntakeApi, SubmissionResult};
use crate::config::IntakeConfig;
use crate::controller::{Feedback, FormController, Transition};
use crate::state::{ApiStatus, AppState, Field, FieldKind, FormState};
use crate::validation::ValidationService;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// UI-side state
    pub state: AppState,
    /// The form state machine
    pub controller: FormController,
    /// Whether the app should quit
    quit: bool,
    /// Outcome of the submission currently in flight
    pending_submission: Option<oneshot::Receiver<SubmissionResult>>,
    /// Outcome of the startup health check
    pending_health: Option<oneshot::Receiver<HealthStatus>>,
}

impl App {
    /// Create the app from user configuration, pinging the backend if enabled.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: &IntakeConfig) -> Result<Self> {
        let client = ApiClient::from_config(config)?;
        tracing::info!("Using intake API at {}", client.base_url());

        let mut app = Self::with_api(Arc::new(client))?;
        if config.check_health_on_startup() {
            app.check_health();
        }
        Ok(app)
    }

    /// Create the app around an existing API client
    pub fn with_api(api: Arc<dyn IntakeApi>) -> Result<Self> {
        let validator = ValidationService::new()?;
        Ok(Self {
            state: AppState::default(),
            controller: FormController::new(validator, api),
            quit: false,
            pending_submission: None,
            pending_health: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Field that currently has focus, if the step has any fields
    pub fn focused_field(&self) -> Option<Field> {
        self.controller
            .visible_fields()
            .get(self.state.active_form_field)
            .copied()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        if self.controller.is_submitted() {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')
            ) {
                self.quit = true;
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let focused = self.focused_field();
        let field_count = self.controller.visible_fields().len();

        match key.code {
            KeyCode::Char('r') if ctrl => {
                if self.controller.reset() {
                    self.state.enter_step();
                    self.state.status_message = Some("Form cleared".to_string());
                }
            }
            KeyCode::Esc => {
                let transition = self.controller.retreat();
                self.apply_transition(transition);
            }
            KeyCode::Enter if alt => {
                if let Some(field) = focused.filter(Field::is_multiline) {
                    self.controller.push_char(field, '\n');
                }
            }
            KeyCode::Enter => {
                let transition = self.controller.advance();
                self.apply_transition(transition);
            }
            KeyCode::Tab => self.state.next_form_field(field_count),
            KeyCode::BackTab => self.state.prev_form_field(field_count),
            KeyCode::Down if field_count == 0 => {
                let max_scroll = crate::ui::review_line_count(self).saturating_sub(1);
                self.state.scroll_offset = (self.state.scroll_offset + 1).min(max_scroll);
            }
            KeyCode::Up if field_count == 0 => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down => self.state.next_form_field(field_count),
            KeyCode::Up => self.state.prev_form_field(field_count),
            KeyCode::Left | KeyCode::Right => {
                if let Some(field) = focused {
                    self.controller
                        .cycle_option(field, key.code == KeyCode::Right);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focused.filter(|f| is_text(*f)) {
                    self.controller.pop_char(field);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = focused {
                    self.type_char(field, c);
                }
            }
            _ => {}
        }

        // Conditional fields may have disappeared
        let field_count = self.controller.visible_fields().len();
        self.state.clamp_form_field(field_count);
    }

    fn type_char(&mut self, field: Field, c: char) {
        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => {
                self.controller.push_char(field, c);
            }
            FieldKind::Flag if c == ' ' => {
                self.controller.toggle_flag(field);
            }
            FieldKind::Choice(_) if c == ' ' => {
                self.controller.cycle_option(field, true);
            }
            _ => {}
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Advanced(_) | Transition::Retreated(_) => {
                self.state.enter_step();
                self.state.status_message = None;
            }
            Transition::Blocked => self.focus_first_error(),
            Transition::SubmissionStarted(payload) => self.send_submission(payload),
            Transition::Submitted => {
                self.state.status_message = Some("Application submitted".to_string());
            }
            Transition::SubmissionFailed(error) => self.push_error(error),
            Transition::Ignored => {}
        }
    }

    /// Move focus to the first field with an inline error
    fn focus_first_error(&mut self) {
        if let Feedback::StepErrors(errors) = self.controller.feedback() {
            let fields = self.controller.visible_fields();
            if let Some(index) = errors
                .errors()
                .first()
                .and_then(|e| fields.iter().position(|f| *f == e.field))
            {
                self.state.active_form_field = index;
            }
        }
    }

    /// Run the request on a background task; the result is picked up by
    /// `poll_submission`.
    fn send_submission(&mut self, payload: FormState) {
        let api = self.controller.api();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = api.submit_intake(&payload).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(result);
        });
        self.pending_submission = Some(rx);
        self.state.status_message = Some("Submitting...".to_string());
    }

    /// Apply the submission result if it has arrived
    fn poll_submission(&mut self) {
        let Some(rx) = self.pending_submission.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                SubmissionResult::failure("Submission was interrupted")
            }
        };
        tracing::debug!(success = result.is_success(), "Submission result received");
        self.pending_submission = None;
        self.state.status_message = None;
        let transition = self.controller.finish_submission(result);
        self.apply_transition(transition);
    }

    /// Ping the backend on a background task; the status dot updates once
    /// it answers.
    pub fn check_health(&mut self) {
        let api = self.controller.api();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(api.check_health().await);
        });
        self.pending_health = Some(rx);
    }

    fn poll_health(&mut self) {
        let Some(rx) = self.pending_health.as_mut() else {
            return;
        };
        let healthy = match rx.try_recv() {
            Ok(status) => status.is_healthy(),
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => false,
        };
        self.pending_health = None;
        self.state.api_status = if healthy {
            ApiStatus::Connected
        } else {
            ApiStatus::Disconnected
        };
    }

    /// Apply whatever background requests have finished
    pub fn poll_background(&mut self) {
        self.poll_health();
        self.poll_submission();
    }

    /// Whether any background request is outstanding
    pub fn has_pending_work(&self) -> bool {
        self.pending_submission.is_some() || self.pending_health.is_some()
    }
}

fn is_text(field: Field) -> bool {
    matches!(field.kind(), FieldKind::Text | FieldKind::Multiline)
}
