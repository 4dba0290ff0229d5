use crate::models::Category;
use thiserror::Error;

/// Errors raised while validating input or scoring it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("Answer set is incomplete: missing answers for questions {missing:?}")]
    IncompleteAnswerSet { missing: Vec<u32> },

    #[error("Unrecognized option {answer} for question {question_id}")]
    UnrecognizedOption { question_id: u32, answer: String },

    #[error("No questions defined for category {0}")]
    NoQuestionsInCategory(Category),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid question bank: {0}")]
    InvalidQuestionBank(String),
}

impl ScoringError {
    /// Stable machine-readable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            ScoringError::IncompleteAnswerSet { .. } => "incomplete_answer_set",
            ScoringError::UnrecognizedOption { .. } => "unrecognized_option",
            ScoringError::NoQuestionsInCategory(_) => "no_questions_in_category",
            ScoringError::InvalidDate(_) => "invalid_date",
            ScoringError::InvalidQuestionBank(_) => "invalid_question_bank",
        }
    }
}
