use crate::core::error::ScoringError;
use crate::models::{AnswerKind, Category, Perspective, Question, LIKERT_OPTIONS};
use serde::Serialize;
use std::collections::HashSet;

const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 5;

/// Validated, immutable set of questionnaire items
///
/// Question order is definition order; it is the order questions are
/// asked in and the order category scoring walks them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting malformed definitions
    ///
    /// Checks:
    /// - at least one question
    /// - unique ids
    /// - 2-5 options per question
    /// - Likert questions carry exactly the options "1".."5"
    /// - weights are finite and positive
    pub fn new(questions: Vec<Question>) -> Result<Self, ScoringError> {
        if questions.is_empty() {
            return Err(ScoringError::InvalidQuestionBank("no questions defined".into()));
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(ScoringError::InvalidQuestionBank(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }

            let count = question.options.len();
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
                return Err(ScoringError::InvalidQuestionBank(format!(
                    "question {} has {} options, expected {}-{}",
                    question.id, count, MIN_OPTIONS, MAX_OPTIONS
                )));
            }

            if question.kind == AnswerKind::Likert
                && !question.options.iter().map(String::as_str).eq(LIKERT_OPTIONS)
            {
                return Err(ScoringError::InvalidQuestionBank(format!(
                    "Likert question {} must use options 1-5",
                    question.id
                )));
            }

            if !question.weight.is_finite() || question.weight <= 0.0 {
                return Err(ScoringError::InvalidQuestionBank(format!(
                    "question {} has non-positive weight {}",
                    question.id, question.weight
                )));
            }
        }

        Ok(Self { questions })
    }

    /// The built-in questionnaire
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.category == category)
    }

    /// Categories with at least one question, in category order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.questions.iter().any(|q| q.category == *c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

/// Two questions per category: first the "about you" stage, then
/// "about your partner". Free-text options run from least to most
/// compatible.
pub fn standard_questions() -> Vec<Question> {
    use Category::*;
    use Perspective::{Partner, SelfReport};

    vec![
        Question::choice(
            1,
            "How do you feel when your partner needs time alone?",
            &["Anxious and unsettled", "Slightly uneasy", "Relaxed, it's healthy"],
            Attachment,
            0.25,
            SelfReport,
        ),
        Question::likert(
            2,
            "How well do you know the way you like to receive affection?",
            LoveLanguages,
            0.20,
            SelfReport,
        ),
        Question::likert(3, "How easily do you trust a new partner?", Trust, 0.25, SelfReport),
        Question::choice(
            4,
            "How often do you talk about shared life goals?",
            &["Rarely", "Sometimes", "Regularly"],
            Values,
            0.20,
            SelfReport,
        ),
        Question::choice(
            5,
            "How do you resolve conflicts?",
            &["Avoid conflicts", "Need time to think first", "Discuss right away"],
            Communication,
            0.25,
            SelfReport,
        ),
        Question::likert(
            6,
            "How comfortable are you expressing your feelings openly?",
            Emotional,
            0.20,
            SelfReport,
        ),
        Question::choice(
            7,
            "How do you spend your free time?",
            &["Always apart", "Always together", "Mostly together", "A balanced mix"],
            Independence,
            0.15,
            SelfReport,
        ),
        Question::likert(
            8,
            "How clearly do you picture a shared future?",
            Future,
            0.20,
            SelfReport,
        ),
        Question::likert(
            9,
            "How consistently does your partner respond when you reach out?",
            Attachment,
            0.20,
            Partner,
        ),
        Question::choice(
            10,
            "How does your partner show affection?",
            &[
                "Rarely in ways I notice",
                "Sometimes in ways I appreciate",
                "In exactly the ways I value",
            ],
            LoveLanguages,
            0.25,
            Partner,
        ),
        Question::choice(
            11,
            "How does your partner handle promises?",
            &["Often forgets them", "Keeps most of them", "Always keeps them"],
            Trust,
            0.20,
            Partner,
        ),
        Question::choice(
            12,
            "How does your partner approach finances?",
            &["Spends spontaneously", "Plans everything", "Balances saving and spending"],
            Values,
            0.15,
            Partner,
        ),
        Question::likert(
            13,
            "How well does your partner listen during disagreements?",
            Communication,
            0.20,
            Partner,
        ),
        Question::choice(
            14,
            "What matters more to your partner in a relationship?",
            &["Comfort", "Growing together"],
            Emotional,
            0.15,
            Partner,
        ),
        Question::likert(
            15,
            "How much does your partner support your personal interests?",
            Independence,
            0.20,
            Partner,
        ),
        Question::choice(
            16,
            "How does your partner talk about the long term?",
            &["Avoids the topic", "Open to discussing it", "Makes plans with me"],
            Future,
            0.25,
            Partner,
        ),
    ]
}
