use crate::core::questions::QuestionBank;
use crate::models::{AnswerSet, Perspective, Question};
use serde::Serialize;

/// Where a user stands in the questionnaire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
    pub complete: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Perspective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<Question>,
}

pub fn stage_title(stage: Perspective) -> &'static str {
    match stage {
        Perspective::SelfReport => "About you",
        Perspective::Partner => "About your partner",
    }
}

/// Encouragement keyed to completion percentage
pub fn motivational_message(percent: f64) -> &'static str {
    if percent < 30.0 {
        "Great start!"
    } else if percent < 60.0 {
        "You're doing great!"
    } else if percent < 90.0 {
        "Almost there!"
    } else {
        "Last step!"
    }
}

/// Compute progress; answers to questions outside the bank are ignored
pub fn progress(bank: &QuestionBank, answers: &AnswerSet) -> QuizProgress {
    let total = bank.len();
    let answered = bank
        .questions()
        .iter()
        .filter(|q| answers.contains(q.id))
        .count();

    let ratio = if total == 0 {
        100.0
    } else {
        answered as f64 / total as f64 * 100.0
    };

    let next_question = bank
        .questions()
        .iter()
        .find(|q| !answers.contains(q.id))
        .cloned();
    let stage = next_question.as_ref().map(|q| q.perspective);

    QuizProgress {
        answered,
        total,
        percent: ratio.round() as u8,
        complete: next_question.is_none(),
        message: motivational_message(ratio),
        stage,
        stage_title: stage.map(stage_title),
        next_question,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_questionnaire() {
        let bank = QuestionBank::standard();
        let p = progress(&bank, &AnswerSet::new());

        assert_eq!(p.answered, 0);
        assert_eq!(p.percent, 0);
        assert!(!p.complete);
        assert_eq!(p.message, "Great start!");
        assert_eq!(p.stage, Some(Perspective::SelfReport));
        assert_eq!(p.stage_title, Some("About you"));
        assert_eq!(p.next_question.map(|q| q.id), Some(1));
    }

    #[test]
    fn test_switches_to_partner_stage() {
        let bank = QuestionBank::standard();
        let answers: AnswerSet = (1..=8).map(|id| (id, 3u8)).collect();
        let p = progress(&bank, &answers);

        assert_eq!(p.percent, 50);
        assert_eq!(p.message, "You're doing great!");
        assert_eq!(p.stage_title, Some("About your partner"));
        assert_eq!(p.next_question.map(|q| q.id), Some(9));
    }

    #[test]
    fn test_next_question_fills_gaps() {
        let bank = QuestionBank::standard();
        let answers: AnswerSet = [(1, 3u8), (3, 3u8)].into_iter().collect();

        assert_eq!(progress(&bank, &answers).next_question.map(|q| q.id), Some(2));
    }

    #[test]
    fn test_unknown_ids_do_not_count() {
        let bank = QuestionBank::standard();
        let answers: AnswerSet = [(999, 3u8)].into_iter().collect();

        assert_eq!(progress(&bank, &answers).answered, 0);
    }

    #[test]
    fn test_message_thresholds() {
        assert_eq!(motivational_message(29.9), "Great start!");
        assert_eq!(motivational_message(30.0), "You're doing great!");
        assert_eq!(motivational_message(60.0), "Almost there!");
        assert_eq!(motivational_message(90.0), "Last step!");
        assert_eq!(motivational_message(100.0), "Last step!");
    }
}
