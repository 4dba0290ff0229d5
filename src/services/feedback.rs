use crate::config::FeedbackSettings;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when delivering feedback
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Feedback message is empty")]
    EmptyMessage,

    #[error("Feedback delivery is not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Email API rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// The template reads the message under several names
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    subject: &'a str,
    message: &'a str,
    from_name: &'a str,
    feedback_text: &'a str,
    user_feedback: &'a str,
}

/// Client for the transactional email API that forwards user feedback
///
/// One POST per message. Any non-2xx status or transport failure counts
/// as a failed delivery; nothing is retried.
pub struct FeedbackClient {
    settings: FeedbackSettings,
    client: Client,
}

impl FeedbackClient {
    /// Create a new feedback client
    pub fn new(settings: FeedbackSettings) -> Result<Self, FeedbackError> {
        let timeout = settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self { settings, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    fn check_configured(&self) -> Result<(), FeedbackError> {
        if self.settings.service_id.is_empty() {
            return Err(FeedbackError::NotConfigured("service_id"));
        }
        if self.settings.template_id.is_empty() {
            return Err(FeedbackError::NotConfigured("template_id"));
        }
        if self.settings.user_id.is_empty() {
            return Err(FeedbackError::NotConfigured("user_id"));
        }
        Ok(())
    }

    fn payload<'a>(&'a self, feedback: &'a str) -> EmailPayload<'a> {
        EmailPayload {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.user_id,
            template_params: TemplateParams {
                to_email: &self.settings.to_email,
                subject: &self.settings.subject,
                message: feedback,
                from_name: &self.settings.from_name,
                feedback_text: feedback,
                user_feedback: feedback,
            },
        }
    }

    /// Send one feedback message
    pub async fn send(&self, feedback: &str) -> Result<(), FeedbackError> {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }
        self.check_configured()?;

        let response = self
            .client
            .post(&self.settings.endpoint)
            .json(&self.payload(feedback))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(FeedbackError::Rejected { status, body });
        }

        tracing::debug!("Feedback delivered ({} chars)", feedback.len());

        Ok(())
    }

    /// Send feedback, reporting only whether it was delivered
    pub async fn deliver(&self, feedback: &str) -> bool {
        match self.send(feedback).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error sending feedback: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> FeedbackSettings {
        FeedbackSettings {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            user_id: "public_key".to_string(),
            to_email: "team@example.com".to_string(),
            ..FeedbackSettings::default()
        }
    }

    #[test]
    fn test_payload_shape() {
        let client = FeedbackClient::new(configured()).unwrap();
        let json = serde_json::to_value(client.payload("Love it")).unwrap();

        assert_eq!(json["service_id"], "service_test");
        assert_eq!(json["template_id"], "template_test");
        assert_eq!(json["user_id"], "public_key");
        assert_eq!(json["template_params"]["to_email"], "team@example.com");
        assert_eq!(json["template_params"]["message"], "Love it");
        assert_eq!(json["template_params"]["feedback_text"], "Love it");
        assert_eq!(json["template_params"]["user_feedback"], "Love it");
    }

    #[test]
    fn test_blank_feedback_is_rejected_locally() {
        let client = FeedbackClient::new(configured()).unwrap();

        let result = tokio_test::block_on(client.send("   \n"));
        assert!(matches!(result, Err(FeedbackError::EmptyMessage)));
    }

    #[test]
    fn test_unconfigured_client_does_not_send() {
        let client = FeedbackClient::new(FeedbackSettings::default()).unwrap();

        let result = tokio_test::block_on(client.send("hello"));
        assert!(matches!(result, Err(FeedbackError::NotConfigured("service_id"))));
        assert!(!tokio_test::block_on(client.deliver("hello")));
    }
}
