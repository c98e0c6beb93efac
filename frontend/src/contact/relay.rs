use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;

use super::submission::FormSubmission;
use crate::config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    NetworkFailure(String),
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not encode submission: {0}")]
    Serialize(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay answered with status {0}")]
    Status(u16),
}

impl From<Result<(), RelayError>> for SubmissionOutcome {
    fn from(result: Result<(), RelayError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Success,
            Err(e) => SubmissionOutcome::NetworkFailure(e.to_string()),
        }
    }
}

/// Anything that can deliver a contact submission somewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait Relay {
    async fn submit(&self, submission: &FormSubmission) -> SubmissionOutcome;
}

/// Posts submissions as JSON to a form-to-email relay service.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, submission: &FormSubmission) -> Result<(), RelayError> {
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&submission.to_payload())
            .map_err(|e| RelayError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(RelayError::Status(response.status()));
        }
        Ok(())
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(config::get_relay_url())
    }
}

#[async_trait(?Send)]
impl Relay for HttpRelay {
    async fn submit(&self, submission: &FormSubmission) -> SubmissionOutcome {
        info!("Sending contact submission to {}", self.endpoint);
        let result = self.post(submission).await;
        if let Err(e) = &result {
            warn!("Contact submission failed: {}", e);
        }
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_collapse_into_network_failure() {
        let outcome: SubmissionOutcome = Err(RelayError::Status(503)).into();
        assert_eq!(
            outcome,
            SubmissionOutcome::NetworkFailure("relay answered with status 503".to_string())
        );

        let outcome: SubmissionOutcome = Err(RelayError::Transport("offline".to_string())).into();
        assert_eq!(outcome, SubmissionOutcome::NetworkFailure("request failed: offline".to_string()));
    }

    #[test]
    fn test_ok_is_success() {
        let outcome: SubmissionOutcome = Ok(()).into();
        assert_eq!(outcome, SubmissionOutcome::Success);
    }

    #[test]
    fn test_default_relay_uses_configured_endpoint() {
        assert_eq!(HttpRelay::default().endpoint(), config::get_relay_url());
    }
}
