use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Relationship dimension a question contributes to
///
/// Declaration order is the order categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Attachment,
    LoveLanguages,
    Trust,
    Values,
    Communication,
    Emotional,
    Independence,
    Future,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Attachment,
        Category::LoveLanguages,
        Category::Trust,
        Category::Values,
        Category::Communication,
        Category::Emotional,
        Category::Independence,
        Category::Future,
    ];

    /// Wire name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Attachment => "attachment",
            Category::LoveLanguages => "loveLanguages",
            Category::Trust => "trust",
            Category::Values => "values",
            Category::Communication => "communication",
            Category::Emotional => "emotional",
            Category::Independence => "independence",
            Category::Future => "future",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a question's options are interpreted when scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    /// Ordinal scale with options "1" through "5"
    Likert,
    /// Free-text options, ordered from least to most compatible
    Choice,
}

/// Who the question asks about; drives the two questionnaire stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    #[serde(rename = "self")]
    SelfReport,
    Partner,
}

/// Labels of a Likert question, in order
pub const LIKERT_OPTIONS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// A single questionnaire item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub kind: AnswerKind,
    pub category: Category,
    pub weight: f64,
    pub perspective: Perspective,
}

impl Question {
    /// Build a 1-5 Likert question
    pub fn likert(
        id: u32,
        text: &str,
        category: Category,
        weight: f64,
        perspective: Perspective,
    ) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: LIKERT_OPTIONS.iter().map(|o| o.to_string()).collect(),
            kind: AnswerKind::Likert,
            category,
            weight,
            perspective,
        }
    }

    /// Build a free-text question; the last option is the most compatible one
    pub fn choice(
        id: u32,
        text: &str,
        options: &[&str],
        category: Category,
        weight: f64,
        perspective: Perspective,
    ) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            kind: AnswerKind::Choice,
            category,
            weight,
            perspective,
        }
    }

    /// Zero-based position of the selected option, if the answer is one of ours
    pub fn selected_index(&self, answer: &Answer) -> Option<usize> {
        match (self.kind, answer) {
            (AnswerKind::Likert, Answer::Likert(value)) => likert_index(*value),
            (AnswerKind::Likert, Answer::Choice(label)) => {
                label.trim().parse::<u8>().ok().and_then(likert_index)
            }
            (AnswerKind::Choice, Answer::Choice(label)) => {
                self.options.iter().position(|o| o == label)
            }
            (AnswerKind::Choice, Answer::Likert(_)) => None,
        }
    }
}

fn likert_index(value: u8) -> Option<usize> {
    (1..=5).contains(&value).then(|| usize::from(value - 1))
}

/// A selected option: a Likert value or the text of a chosen option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Likert(u8),
    Choice(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Likert(value) => write!(f, "{}", value),
            Answer::Choice(label) => write!(f, "{:?}", label),
        }
    }
}

impl From<u8> for Answer {
    fn from(value: u8) -> Self {
        Answer::Likert(value)
    }
}

impl From<&str> for Answer {
    fn from(label: &str) -> Self {
        Answer::Choice(label.to_string())
    }
}

/// Answers keyed by question id, built up as the user progresses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, Answer>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier one for the same question
    pub fn insert(&mut self, question_id: u32, answer: impl Into<Answer>) -> Option<Answer> {
        self.0.insert(question_id, answer.into())
    }

    pub fn get(&self, question_id: u32) -> Option<&Answer> {
        self.0.get(&question_id)
    }

    pub fn remove(&mut self, question_id: u32) -> Option<Answer> {
        self.0.remove(&question_id)
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.0.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Answer)> {
        self.0.iter().map(|(id, answer)| (*id, answer))
    }
}

impl<A: Into<Answer>> FromIterator<(u32, A)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, A)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, a)| (id, a.into())).collect())
    }
}

/// Qualitative band of an overall compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

impl CompatibilityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => CompatibilityTier::Excellent,
            65..=79 => CompatibilityTier::Good,
            50..=64 => CompatibilityTier::Moderate,
            _ => CompatibilityTier::Challenging,
        }
    }
}

/// Outcome of a quick estimate or a questionnaire run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub compatibility: u8,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_insights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_type: Option<CompatibilityTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_scores: Option<BTreeMap<Category, u8>>,
}

/// Features unlocked for the current user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    pub is_premium: bool,
    pub has_extended_test: bool,
    pub has_history: bool,
    pub has_custom_reports: bool,
    pub has_daily_predictions: bool,
}

impl FeatureFlags {
    pub fn premium() -> Self {
        Self {
            is_premium: true,
            has_extended_test: true,
            has_history: true,
            has_custom_reports: true,
            has_daily_predictions: true,
        }
    }
}
