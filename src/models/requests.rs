use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AnswerSet, FeatureFlags};

/// Request for the date-only quick estimate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuickEstimateRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "date_a", rename = "dateA")]
    pub date_a: String,
    #[validate(length(min = 1))]
    #[serde(alias = "date_b", rename = "dateB")]
    pub date_b: String,
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Request to score a completed questionnaire
///
/// When both dates are present the date estimate is blended in.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionnaireRequest {
    pub answers: AnswerSet,
    #[validate(length(min = 1))]
    #[serde(default, alias = "date_a", rename = "dateA")]
    pub date_a: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "date_b", rename = "dateB")]
    pub date_b: Option<String>,
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Request for questionnaire progress
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Request to send user feedback
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}
