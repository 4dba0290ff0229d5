use crate::core::error::ScoringError;
use crate::core::questions::QuestionBank;
use crate::models::{AnswerKind, AnswerSet, Category, Question};
use std::collections::BTreeMap;

/// Highest sub-score a single answer can earn
const MAX_SUB_SCORE: f64 = 5.0;

/// Normalize one answer to a sub-score in [0, 5]
///
/// Likert answers score their own value. Free-text answers scale by
/// position: `(index + 1) / option_count * 5`, so the first option scores
/// lowest and the last scores 5.
#[inline]
pub fn normalized_sub_score(question: &Question, answers: &AnswerSet) -> Result<f64, ScoringError> {
    let answer = answers
        .get(question.id)
        .ok_or_else(|| ScoringError::IncompleteAnswerSet {
            missing: vec![question.id],
        })?;

    let index = question
        .selected_index(answer)
        .ok_or_else(|| ScoringError::UnrecognizedOption {
            question_id: question.id,
            answer: answer.to_string(),
        })?;

    let position = (index + 1) as f64;
    let sub_score = match question.kind {
        AnswerKind::Likert => position,
        AnswerKind::Choice => position / question.options.len() as f64 * MAX_SUB_SCORE,
    };

    Ok(sub_score)
}

/// Score one category (0-100)
///
/// score = round(Σ sub_score_i * weight_i / Σ 5 * weight_i * 100)
pub fn score_category(
    bank: &QuestionBank,
    answers: &AnswerSet,
    category: Category,
) -> Result<u8, ScoringError> {
    let mut accumulated = 0.0;
    let mut max_possible = 0.0;

    for question in bank.in_category(category) {
        accumulated += normalized_sub_score(question, answers)? * question.weight;
        max_possible += MAX_SUB_SCORE * question.weight;
    }

    if max_possible <= 0.0 {
        return Err(ScoringError::NoQuestionsInCategory(category));
    }

    let score = (accumulated / max_possible * 100.0).clamp(0.0, 100.0);
    Ok(score.round() as u8)
}

/// Ids of bank questions with no answer, in definition order
pub fn missing_answers(bank: &QuestionBank, answers: &AnswerSet) -> Vec<u32> {
    bank.questions()
        .iter()
        .filter(|q| !answers.contains(q.id))
        .map(|q| q.id)
        .collect()
}

/// Score every category the bank covers
///
/// Refuses to produce partial output: all missing answers are reported
/// before any category is scored.
pub fn score_all_categories(
    bank: &QuestionBank,
    answers: &AnswerSet,
) -> Result<BTreeMap<Category, u8>, ScoringError> {
    let missing = missing_answers(bank, answers);
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAnswerSet { missing });
    }

    bank.categories()
        .into_iter()
        .map(|category| score_category(bank, answers, category).map(|score| (category, score)))
        .collect()
}

/// Unweighted mean of the category scores, rounded
#[inline]
pub fn mean_score(scores: &BTreeMap<Category, u8>) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let total: u32 = scores.values().map(|s| u32::from(*s)).sum();
    (total as f64 / scores.len() as f64).round() as u8
}

/// Average two 0-100 scores, rounded
#[inline]
pub fn blend(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) as f64 / 2.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Perspective;

    fn likert_pair(weight: f64) -> QuestionBank {
        QuestionBank::new(vec![
            Question::likert(1, "a", Category::Trust, weight, Perspective::SelfReport),
            Question::likert(2, "b", Category::Trust, weight, Perspective::Partner),
        ])
        .unwrap()
    }

    fn three_option_bank() -> QuestionBank {
        QuestionBank::new(vec![Question::choice(
            1,
            "a",
            &["Low", "Mid", "High"],
            Category::Values,
            0.2,
            Perspective::SelfReport,
        )])
        .unwrap()
    }

    #[test]
    fn test_likert_extremes() {
        let bank = likert_pair(0.25);

        let top: AnswerSet = [(1, 5u8), (2, 5u8)].into_iter().collect();
        assert_eq!(score_category(&bank, &top, Category::Trust).unwrap(), 100);

        let bottom: AnswerSet = [(1, 1u8), (2, 1u8)].into_iter().collect();
        assert_eq!(score_category(&bank, &bottom, Category::Trust).unwrap(), 20);
    }

    #[test]
    fn test_choice_position_scaling() {
        let bank = three_option_bank();

        let scores: Vec<u8> = ["Low", "Mid", "High"]
            .into_iter()
            .map(|label| {
                let answers: AnswerSet = [(1, label)].into_iter().collect();
                score_category(&bank, &answers, Category::Values).unwrap()
            })
            .collect();

        assert_eq!(scores, vec![33, 67, 100]);
    }

    #[test]
    fn test_weights_shift_category_score() {
        let bank = QuestionBank::new(vec![
            Question::likert(1, "a", Category::Future, 0.25, Perspective::SelfReport),
            Question::likert(2, "b", Category::Future, 0.15, Perspective::SelfReport),
        ])
        .unwrap();
        let answers: AnswerSet = [(1, 5u8), (2, 1u8)].into_iter().collect();

        // (5*0.25 + 1*0.15) / (5*0.40) = 0.7
        assert_eq!(score_category(&bank, &answers, Category::Future).unwrap(), 70);
    }

    #[test]
    fn test_empty_category_is_an_error() {
        let bank = likert_pair(0.2);
        let answers: AnswerSet = [(1, 3u8), (2, 3u8)].into_iter().collect();

        assert_eq!(
            score_category(&bank, &answers, Category::Future),
            Err(ScoringError::NoQuestionsInCategory(Category::Future))
        );
    }

    #[test]
    fn test_unrecognized_option() {
        let bank = three_option_bank();
        let answers: AnswerSet = [(1, "Extreme")].into_iter().collect();

        assert!(matches!(
            score_category(&bank, &answers, Category::Values),
            Err(ScoringError::UnrecognizedOption { question_id: 1, .. })
        ));
    }

    #[test]
    fn test_score_all_reports_every_missing_answer() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerSet::new();
        answers.insert(1, "Slightly uneasy");

        match score_all_categories(&bank, &answers) {
            Err(ScoringError::IncompleteAnswerSet { missing }) => {
                assert_eq!(missing.len(), bank.len() - 1);
                assert!(!missing.contains(&1));
            }
            other => panic!("expected incomplete answer set, got {:?}", other),
        }
    }

    #[test]
    fn test_mean_and_blend_rounding() {
        let scores: BTreeMap<Category, u8> =
            [(Category::Trust, 70), (Category::Values, 75)].into_iter().collect();
        assert_eq!(mean_score(&scores), 73);
        assert_eq!(mean_score(&BTreeMap::new()), 0);

        assert_eq!(blend(80, 61), 71);
        assert_eq!(blend(100, 100), 100);
    }
}
