use crate::core::{
    dates::score_date_compatibility,
    error::ScoringError,
    insights,
    progress::{progress, QuizProgress},
    questions::QuestionBank,
    scoring::{blend, mean_score, score_all_categories, score_category},
};
use crate::models::{AnswerSet, Category, CompatibilityTier, FeatureFlags, TestResult};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Compatibility scoring entry point
///
/// Holds the question bank and turns answers and/or birth dates into a
/// `TestResult`. Stateless between calls and cheap to clone.
///
/// # Flows
/// 1. Quick estimate: two birth dates only
/// 2. Questionnaire: weighted category scores averaged into one score
/// 3. Full test: questionnaire blended 50/50 with the date estimate
#[derive(Debug, Clone)]
pub struct Scorer {
    bank: Arc<QuestionBank>,
}

impl Scorer {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }

    pub fn with_standard_bank() -> Self {
        Self::new(QuestionBank::standard())
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Score a single category (0-100)
    pub fn score_category(
        &self,
        answers: &AnswerSet,
        category: Category,
    ) -> Result<u8, ScoringError> {
        score_category(&self.bank, answers, category)
    }

    /// Score a complete questionnaire without premium content
    pub fn compute_result(&self, answers: &AnswerSet) -> Result<TestResult, ScoringError> {
        self.compute_result_with_features(answers, &FeatureFlags::default())
    }

    /// Score a complete questionnaire
    ///
    /// # Errors
    /// - `IncompleteAnswerSet` if any bank question is unanswered
    /// - `UnrecognizedOption` if an answer is not one of its question's options
    pub fn compute_result_with_features(
        &self,
        answers: &AnswerSet,
        features: &FeatureFlags,
    ) -> Result<TestResult, ScoringError> {
        let category_scores = score_all_categories(&self.bank, answers)?;
        let compatibility = mean_score(&category_scores);

        tracing::debug!(
            "Questionnaire scored {} across {} categories",
            compatibility,
            category_scores.len()
        );

        Ok(build_result(compatibility, Some(category_scores), features))
    }

    /// Date-only estimate with fixed notes
    pub fn quick_estimate(
        &self,
        date_a: &str,
        date_b: &str,
        features: &FeatureFlags,
    ) -> Result<TestResult, ScoringError> {
        let compatibility = score_date_compatibility(date_a, date_b)?;
        let tier = CompatibilityTier::from_score(compatibility);

        tracing::debug!("Quick estimate scored {}", compatibility);

        Ok(TestResult {
            compatibility,
            strengths: insights::QUICK_STRENGTHS.iter().map(|s| s.to_string()).collect(),
            growth_areas: insights::QUICK_GROWTH_AREAS.iter().map(|s| s.to_string()).collect(),
            premium_insights: features
                .is_premium
                .then(|| insights::premium_insights(compatibility, None)),
            description: Some(insights::describe(tier).to_string()),
            compatibility_type: Some(tier),
            category_scores: None,
        })
    }

    /// Questionnaire blended with the date estimate
    ///
    /// Dates are validated before answers so a bad date is reported even
    /// when the answer set is also incomplete.
    pub fn full_test(
        &self,
        date_a: &str,
        date_b: &str,
        answers: &AnswerSet,
        features: &FeatureFlags,
    ) -> Result<TestResult, ScoringError> {
        let date_score = score_date_compatibility(date_a, date_b)?;
        let category_scores = score_all_categories(&self.bank, answers)?;
        let questionnaire_score = mean_score(&category_scores);
        let compatibility = blend(date_score, questionnaire_score);

        tracing::debug!(
            "Full test: dates {} + questionnaire {} -> {}",
            date_score,
            questionnaire_score,
            compatibility
        );

        Ok(build_result(compatibility, Some(category_scores), features))
    }

    /// Questionnaire progress for a partially filled answer set
    pub fn progress(&self, answers: &AnswerSet) -> QuizProgress {
        progress(&self.bank, answers)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_standard_bank()
    }
}

fn build_result(
    compatibility: u8,
    category_scores: Option<BTreeMap<Category, u8>>,
    features: &FeatureFlags,
) -> TestResult {
    let tier = CompatibilityTier::from_score(compatibility);
    let (strengths, growth_areas) = match &category_scores {
        Some(scores) => (insights::strengths(scores), insights::growth_areas(scores)),
        None => (Vec::new(), Vec::new()),
    };

    TestResult {
        compatibility,
        strengths,
        growth_areas,
        premium_insights: features
            .is_premium
            .then(|| insights::premium_insights(compatibility, category_scores.as_ref())),
        description: Some(insights::describe(tier).to_string()),
        compatibility_type: Some(tier),
        category_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    /// Answer every standard question with its top (or bottom) option
    fn uniform_answers(bank: &QuestionBank, top: bool) -> AnswerSet {
        bank.questions()
            .iter()
            .map(|q| {
                let label = if top {
                    q.options.last().unwrap()
                } else {
                    q.options.first().unwrap()
                };
                (q.id, Answer::Choice(label.clone()))
            })
            .collect()
    }

    #[test]
    fn test_compute_result_top_answers() {
        let scorer = Scorer::with_standard_bank();
        let answers = uniform_answers(scorer.bank(), true);

        let result = scorer.compute_result(&answers).unwrap();

        assert_eq!(result.compatibility, 100);
        assert_eq!(result.compatibility_type, Some(CompatibilityTier::Excellent));
        assert_eq!(result.strengths.len(), 8);
        assert!(result.growth_areas.is_empty());
        assert!(result.premium_insights.is_none());
        assert_eq!(result.category_scores.unwrap().len(), 8);
    }

    #[test]
    fn test_compute_result_bottom_answers() {
        let scorer = Scorer::with_standard_bank();
        let answers = uniform_answers(scorer.bank(), false);

        let result = scorer.compute_result(&answers).unwrap();

        assert_eq!(result.compatibility_type, Some(CompatibilityTier::Challenging));
        assert!(result.strengths.is_empty());
        assert_eq!(result.growth_areas.len(), 8);
    }

    #[test]
    fn test_premium_flag_unlocks_insights() {
        let scorer = Scorer::with_standard_bank();
        let answers = uniform_answers(scorer.bank(), true);

        let result = scorer
            .compute_result_with_features(&answers, &FeatureFlags::premium())
            .unwrap();

        assert!(result.premium_insights.is_some());
    }

    #[test]
    fn test_quick_estimate_fixed_notes() {
        let scorer = Scorer::default();

        let result = scorer
            .quick_estimate("1990-06-01", "1990-06-01", &FeatureFlags::default())
            .unwrap();

        assert_eq!(result.compatibility, 100);
        assert_eq!(result.strengths, insights::QUICK_STRENGTHS.to_vec());
        assert_eq!(result.growth_areas, insights::QUICK_GROWTH_AREAS.to_vec());
        assert!(result.category_scores.is_none());
        assert!(result.premium_insights.is_none());
    }

    #[test]
    fn test_full_test_blends_scores() {
        let scorer = Scorer::default();
        let answers = uniform_answers(scorer.bank(), true);

        // Ten years apart: date score 0, questionnaire 100
        let result = scorer
            .full_test("1980-01-01", "1990-01-01", &answers, &FeatureFlags::default())
            .unwrap();

        assert_eq!(result.compatibility, 50);
        assert_eq!(result.compatibility_type, Some(CompatibilityTier::Moderate));
        assert_eq!(result.strengths.len(), 8);
    }

    #[test]
    fn test_full_test_checks_dates_first() {
        let scorer = Scorer::default();

        let err = scorer
            .full_test("", "1990-01-01", &AnswerSet::new(), &FeatureFlags::default())
            .unwrap_err();

        assert!(matches!(err, ScoringError::InvalidDate(_)));
    }

    #[test]
    fn test_results_are_deterministic() {
        let scorer = Scorer::default();
        let answers = uniform_answers(scorer.bank(), true);

        let first = scorer.full_test("1991-02-03", "1993-04-05", &answers, &FeatureFlags::premium());
        let second = scorer.full_test("1991-02-03", "1993-04-05", &answers, &FeatureFlags::premium());

        assert_eq!(first, second);
    }
}
