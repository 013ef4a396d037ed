//! Result shapes returned by the intake API

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Message shown when the backend accepts a submission without saying anything
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Your application has been submitted.";

/// Outcome of posting a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Success {
        data: Option<Value>,
        message: Option<String>,
    },
    Failure {
        error: String,
    },
}

impl SubmissionResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Outcome of the health check
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    /// 2xx with a JSON body
    Healthy(Value),
    /// Non-2xx with a JSON body
    Unhealthy(Value),
    /// Transport failure or unparsable body
    Unreachable(String),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy(_))
    }
}

/// What the form keeps after a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub message: String,
    pub data: Option<Value>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(message: Option<String>, data: Option<Value>) -> Self {
        Self {
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            data,
            submitted_at: Utc::now(),
        }
    }
}

/// Body of a 2xx response to a submission
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SubmissionResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of an error response; only the message is used
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_constructor() {
        let result = SubmissionResult::failure("boom");
        assert!(!result.is_success());
        assert_eq!(
            result,
            SubmissionResult::Failure {
                error: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_receipt_uses_server_message() {
        let receipt = SubmissionReceipt::new(Some("Thanks!".to_string()), None);
        assert_eq!(receipt.message, "Thanks!");
    }

    #[test]
    fn test_receipt_falls_back_to_default_message() {
        assert_eq!(
            SubmissionReceipt::new(None, None).message,
            DEFAULT_SUCCESS_MESSAGE
        );
        assert_eq!(
            SubmissionReceipt::new(Some("  ".to_string()), None).message,
            DEFAULT_SUCCESS_MESSAGE
        );
    }

    #[test]
    fn test_submission_response_tolerates_missing_fields() {
        let parsed: SubmissionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.data.is_none());
        assert!(parsed.message.is_none());
    }

    #[test]
    fn test_error_response_ignores_extra_fields() {
        let parsed: ErrorResponse =
            serde_json::from_value(json!({"message": "Invalid email", "code": 422})).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Invalid email"));
    }

    #[test]
    fn test_health_status_predicate() {
        assert!(HealthStatus::Healthy(json!({"status": "ok"})).is_healthy());
        assert!(!HealthStatus::Unreachable("refused".to_string()).is_healthy());
    }
}
