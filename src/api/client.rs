//! reqwest-backed client for the intake backend
//!
//! Every request is a single attempt: no timeout, no retry, no backoff.
//! Failures are converted into the result shapes in [`super::types`]
//! before they leave this module.

use super::traits::IntakeApi;
use super::types::{ErrorResponse, HealthStatus, SubmissionResponse, SubmissionResult};
use crate::config::IntakeConfig;
use crate::state::FormState;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the per-request correlation id
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Fallback when the backend rejects a submission without a message
const SUBMISSION_FAILED: &str = "Submission failed";

/// Fallback when a transport error has no description
const NETWORK_ERROR: &str = "Network error occurred";

/// Internal failure taxonomy, flattened to a message at the trait boundary
#[derive(Debug, Error)]
enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            NETWORK_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Client for the intake backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    submissions_endpoint: String,
    health_endpoint: String,
}

impl ApiClient {
    /// Create a client for `base_url` using the default endpoint paths
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::from_config(&IntakeConfig {
            api_base_url: Some(base_url.to_string()),
            ..Default::default()
        })
    }

    /// Create a client from user configuration
    pub fn from_config(config: &IntakeConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            submissions_endpoint: config.submissions_endpoint().to_string(),
            health_endpoint: config.health_endpoint().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn post_submission(
        &self,
        form: &FormState,
        request_id: Uuid,
    ) -> Result<SubmissionResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&self.submissions_endpoint))
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| SUBMISSION_FAILED.to_string());
            return Err(ApiError::Rejected { status, message });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_health(&self) -> Result<(StatusCode, Value), ApiError> {
        let response = self
            .client
            .get(self.url(&self.health_endpoint))
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, serde_json::from_slice(&body)?))
    }
}

#[async_trait]
impl IntakeApi for ApiClient {
    async fn submit_intake(&self, form: &FormState) -> SubmissionResult {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("submit_intake", %request_id, fields = form.len());
        async {
            match self.post_submission(form, request_id).await {
                Ok(body) => {
                    tracing::info!("Submission accepted");
                    SubmissionResult::Success {
                        data: body.data,
                        message: body.message,
                    }
                }
                Err(err) => {
                    if let ApiError::Rejected { status, .. } = &err {
                        tracing::warn!(%status, "Submission rejected: {err}");
                    } else {
                        tracing::error!("Submission failed: {err}");
                    }
                    SubmissionResult::failure(err.user_message())
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn check_health(&self) -> HealthStatus {
        match self.get_health().await {
            Ok((status, body)) if status.is_success() => HealthStatus::Healthy(body),
            Ok((status, body)) => {
                tracing::warn!(%status, "Health check returned non-success status");
                HealthStatus::Unhealthy(body)
            }
            Err(err) => {
                tracing::warn!("Health check failed: {err}");
                HealthStatus::Unreachable(err.user_message())
            }
        }
    }
}
