//! Assessment engine
//!
//! Answer verification and aggregate quiz scoring.

use serde::{Deserialize, Serialize};
use crate::models::Question;

/// Aggregate quiz result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
    /// Rounded half up; 0 when nothing was answered
    pub percentage: u32,
}

impl QuizScore {
    pub fn from_counts(correct: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            // round(100 * c / t) == floor((200 * c + t) / (2 * t))
            let numerator = 200 * u64::from(correct) + u64::from(total);
            (numerator / (2 * u64::from(total))) as u32
        };

        Self {
            correct,
            total,
            percentage,
        }
    }
}

/// True iff `answer_index` names the question's correct option.
/// Negative and out-of-range indices are simply wrong answers.
pub fn check_answer(question: &Question, answer_index: i64) -> bool {
    usize::try_from(answer_index)
        .map(|index| index == question.correct_answer)
        .unwrap_or(false)
}

/// Score a sequence of per-answer outcomes
pub fn score<I>(outcomes: I) -> QuizScore
where
    I: IntoIterator<Item = bool>,
{
    let (correct, total) = outcomes
        .into_iter()
        .fold((0u32, 0u32), |(correct, total), is_correct| {
            (correct + u32::from(is_correct), total + 1)
        });

    QuizScore::from_counts(correct, total)
}
