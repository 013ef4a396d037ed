//! Trait abstraction for the intake API to enable mocking in tests

use super::types::{HealthStatus, SubmissionResult};
use crate::state::FormState;
use async_trait::async_trait;

/// Operations the form needs from the backend.
///
/// Implementations never return `Err`: every failure is folded into the
/// returned result so callers only branch on one shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeApi: Send + Sync {
    /// Post the collected form values as a new submission
    async fn submit_intake(&self, form: &FormState) -> SubmissionResult;

    /// Ping the backend health endpoint
    async fn check_health(&self) -> HealthStatus;
}
