//! HTTP client for the intake backend

mod client;
mod traits;
mod types;

pub use client::ApiClient;
pub use traits::IntakeApi;
pub use types::{HealthStatus, SubmissionReceipt, SubmissionResult};

#[cfg(test)]
pub use traits::MockIntakeApi;
