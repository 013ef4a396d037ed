//! Step-navigation, validation and submission state machine
//!
//! The controller owns the step pointer and the collected values. It has no
//! knowledge of the terminal: the UI feeds it intents and renders whatever
//! it derives.

use crate::api::{IntakeApi, SubmissionReceipt, SubmissionResult};
use crate::state::{
    options, progress, review_summary, Field, FieldKind, FormState, ProgressDot, ReviewSection,
    Step,
};
use crate::validation::{ValidationResult, ValidationService};
use std::sync::Arc;

/// Where the form is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing(Step),
    /// Terminal: the submission was accepted
    Submitted(SubmissionReceipt),
}

/// Errors currently shown to the user
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Feedback {
    #[default]
    None,
    /// Current step failed validation; shown inline per field
    StepErrors(ValidationResult),
    /// Final check before submission failed; shown as a summary block
    FormErrors(ValidationResult),
    /// The backend call failed
    SubmissionFailed(String),
}

/// What a navigation intent did
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Advanced(Step),
    Retreated(Step),
    /// Validation failed; see [`FormController::feedback`]
    Blocked,
    /// Final step passed validation; the payload must be sent and the
    /// outcome handed to [`FormController::finish_submission`]
    SubmissionStarted(FormState),
    Submitted,
    SubmissionFailed(String),
    /// The intent does not apply in the current state
    Ignored,
}

/// Navigation button state derived from the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButtons {
    pub show_back: bool,
    pub back_enabled: bool,
    pub next_label: &'static str,
    pub next_enabled: bool,
}

/// Multi-step intake form controller
pub struct FormController {
    validator: ValidationService,
    api: Arc<dyn IntakeApi>,
    phase: Phase,
    form: FormState,
    feedback: Feedback,
    submitting: bool,
}

impl FormController {
    pub fn new(validator: ValidationService, api: Arc<dyn IntakeApi>) -> Self {
        Self {
            validator,
            api,
            phase: Phase::Editing(Step::Contact),
            form: FormState::new(),
            feedback: Feedback::None,
            submitting: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current step; the last step once submitted
    pub fn step(&self) -> Step {
        match self.phase {
            Phase::Editing(step) => step,
            Phase::Submitted(_) => Step::ReviewSubmit,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        match &self.phase {
            Phase::Submitted(receipt) => Some(receipt),
            Phase::Editing(_) => None,
        }
    }

    /// Shared handle to the API client, for sending a started submission
    pub fn api(&self) -> Arc<dyn IntakeApi> {
        Arc::clone(&self.api)
    }

    fn accepts_input(&self) -> bool {
        !self.submitting && !self.is_submitted()
    }

    // Derived views

    /// Fields of the current step that are visible given the current values
    pub fn visible_fields(&self) -> Vec<Field> {
        if self.is_submitted() {
            return Vec::new();
        }
        self.step()
            .fields()
            .iter()
            .copied()
            .filter(|f| self.form.is_visible(*f))
            .collect()
    }

    pub fn progress(&self) -> [ProgressDot; Step::TOTAL] {
        progress(self.step())
    }

    pub fn review(&self) -> Vec<ReviewSection> {
        review_summary(&self.form)
    }

    pub fn nav_buttons(&self) -> NavButtons {
        let step = self.step();
        let idle = self.accepts_input();
        let next_label = if self.submitting {
            "Submitting..."
        } else if step.is_last() {
            "Submit Application"
        } else {
            "Next"
        };
        NavButtons {
            show_back: !step.is_first(),
            back_enabled: idle && !step.is_first(),
            next_label,
            next_enabled: idle,
        }
    }

    /// Errors to show against one field of the current step
    pub fn field_errors(&self, field: Field) -> Vec<&str> {
        match &self.feedback {
            Feedback::StepErrors(result) => result
                .for_field(field)
                .map(|e| e.message.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }

    // Value mutation

    /// Replace a text value. Returns false when input is not accepted.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.form.set(field, value.into());
        true
    }

    pub fn push_char(&mut self, field: Field, c: char) -> bool {
        let mut value = self.form.text(field).to_string();
        value.push(c);
        self.set_text(field, value)
    }

    pub fn pop_char(&mut self, field: Field) -> bool {
        let mut value = self.form.text(field).to_string();
        value.pop();
        self.set_text(field, value)
    }

    pub fn set_flag(&mut self, field: Field, value: bool) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.form.set(field, value);
        true
    }

    pub fn toggle_flag(&mut self, field: Field) -> bool {
        let current = self.form.flag(field);
        self.set_flag(field, !current)
    }

    /// Select the next (or previous) option of a choice field
    pub fn cycle_option(&mut self, field: Field, forward: bool) -> bool {
        let FieldKind::Choice(choices) = field.kind() else {
            return false;
        };
        match options::cycle_option(choices, self.form.text(field), forward) {
            Some(value) => self.set_text(field, value),
            None => false,
        }
    }

    // Navigation

    /// Validate the current step and move forward, or start the submission
    /// from the last step.
    pub fn advance(&mut self) -> Transition {
        let Phase::Editing(step) = self.phase else {
            return Transition::Ignored;
        };
        if self.submitting {
            tracing::debug!("Ignoring advance while a submission is in flight");
            return Transition::Ignored;
        }

        let errors = self.validator.validate_step(step, &self.form);
        if !errors.is_valid() {
            tracing::debug!(step = step.number(), errors = errors.len(), "Step blocked");
            self.feedback = Feedback::StepErrors(errors);
            return Transition::Blocked;
        }

        match step.next() {
            Some(next) => {
                tracing::info!(from = step.number(), to = next.number(), "Advanced");
                self.phase = Phase::Editing(next);
                self.feedback = Feedback::None;
                Transition::Advanced(next)
            }
            None => match self.begin_submission() {
                Some(payload) => Transition::SubmissionStarted(payload),
                None => Transition::Blocked,
            },
        }
    }

    /// Go back one step. Never validates.
    pub fn retreat(&mut self) -> Transition {
        if !self.accepts_input() {
            return Transition::Ignored;
        }
        let Some(prev) = self.step().prev() else {
            return Transition::Ignored;
        };
        tracing::info!(to = prev.number(), "Retreated");
        self.phase = Phase::Editing(prev);
        self.feedback = Feedback::None;
        Transition::Retreated(prev)
    }

    /// Run the final check and mark a submission as in flight.
    ///
    /// Returns the payload to send, or `None` when not on the last step, when
    /// a submission is already outstanding, or when the form is invalid.
    pub fn begin_submission(&mut self) -> Option<FormState> {
        if !self.accepts_input() || !self.step().is_last() {
            return None;
        }

        let errors = self.validator.validate_form(&self.form);
        if !errors.is_valid() {
            tracing::debug!(errors = errors.len(), "Final validation failed");
            self.feedback = Feedback::FormErrors(errors);
            return None;
        }

        tracing::info!(fields = self.form.len(), "Submitting intake form");
        self.submitting = true;
        self.feedback = Feedback::None;
        Some(self.form.clone())
    }

    /// Apply the outcome of a submission started with `begin_submission`
    pub fn finish_submission(&mut self, result: SubmissionResult) -> Transition {
        if !self.submitting {
            tracing::warn!("Submission result arrived with nothing in flight");
            return Transition::Ignored;
        }
        self.submitting = false;

        match result {
            SubmissionResult::Success { data, message } => {
                tracing::info!("Intake form submitted");
                self.phase = Phase::Submitted(SubmissionReceipt::new(message, data));
                self.feedback = Feedback::None;
                Transition::Submitted
            }
            SubmissionResult::Failure { error } => {
                tracing::warn!("Submission failed: {error}");
                self.feedback = Feedback::SubmissionFailed(error.clone());
                Transition::SubmissionFailed(error)
            }
        }
    }

    /// Validate and send the form from the last step, waiting for the result
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> Transition {
        let Some(payload) = self.begin_submission() else {
            return match self.feedback {
                Feedback::FormErrors(_) => Transition::Blocked,
                _ => Transition::Ignored,
            };
        };
        let result = self.api.submit_intake(&payload).await;
        self.finish_submission(result)
    }

    /// Discard every value and return to the first step
    pub fn reset(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        tracing::info!("Form reset");
        self.form.clear();
        self.phase = Phase::Editing(Step::Contact);
        self.feedback = Feedback::None;
        true
    }
}
