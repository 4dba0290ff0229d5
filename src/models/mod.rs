// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Answer, AnswerKind, AnswerSet, Category, CompatibilityTier, FeatureFlags, Perspective,
    Question, TestResult, LIKERT_OPTIONS,
};
pub use requests::{FeedbackRequest, ProgressRequest, QuestionnaireRequest, QuickEstimateRequest};
pub use responses::{ErrorResponse, FeedbackResponse, HealthResponse, QuestionsResponse};
