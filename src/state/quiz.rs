//! Quiz session state machine
//!
//! A session walks a fixed list of questions:
//! `NotStarted -> InProgress { index, answered } -> Completed(score)`.
//! Every command checks the current state first; an illegal command returns
//! `InvalidStateTransition` and leaves the session exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::models::Question;
use crate::services::assessment::{check_answer, score, QuizScore};
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_quiz_completed;

/// Current position of a quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizState {
    NotStarted,
    InProgress { index: usize, answered: bool },
    Completed(QuizScore),
}

impl QuizState {
    fn label(&self) -> String {
        match self {
            QuizState::NotStarted => "not_started".to_string(),
            QuizState::InProgress { index, answered: false } => format!("question_{}_unanswered", index),
            QuizState::InProgress { index, answered: true } => format!("question_{}_answered", index),
            QuizState::Completed(_) => "completed".to_string(),
        }
    }
}

/// One answer given during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub answer_index: i64,
    pub correct: bool,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<RecordedAnswer>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
            state: QuizState::NotStarted,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    /// The question currently on screen, if a quiz is running
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress { index, .. } => self.questions.get(index),
            _ => None,
        }
    }

    pub fn correct_so_far(&self) -> u32 {
        self.answers.iter().filter(|a| a.correct).count() as u32
    }

    /// Begin (or retake) the quiz.
    pub fn start(&mut self) -> Result<()> {
        if let QuizState::InProgress { .. } = self.state {
            return Err(self.rejected("start"));
        }

        self.answers.clear();
        self.state = if self.questions.is_empty() {
            QuizState::Completed(QuizScore::default())
        } else {
            QuizState::InProgress { index: 0, answered: false }
        };

        debug!(questions = self.questions.len(), "Quiz started");
        Ok(())
    }

    /// Answer the current question; returns whether the answer was correct.
    pub fn submit_answer(&mut self, answer_index: i64) -> Result<bool> {
        let index = match self.state {
            QuizState::InProgress { index, answered: false } => index,
            _ => return Err(self.rejected("submit_answer")),
        };

        let question = &self.questions[index];
        let correct = check_answer(question, answer_index);
        self.answers.push(RecordedAnswer {
            question_id: question.id.clone(),
            answer_index,
            correct,
        });
        self.state = QuizState::InProgress { index, answered: true };

        Ok(correct)
    }

    /// Move past an answered question. Returns the final score when the
    /// last question has been passed.
    pub fn advance(&mut self) -> Result<Option<QuizScore>> {
        let index = match self.state {
            QuizState::InProgress { index, answered: true } => index,
            _ => return Err(self.rejected("advance")),
        };

        if index + 1 < self.questions.len() {
            self.state = QuizState::InProgress { index: index + 1, answered: false };
            return Ok(None);
        }

        let result = score(self.answers.iter().map(|a| a.correct));
        log_quiz_completed(result.correct, result.total, result.percentage);
        self.state = QuizState::Completed(result);
        Ok(Some(result))
    }

    fn rejected(&self, command: &str) -> PortalError {
        PortalError::InvalidStateTransition {
            from: self.state.label(),
            to: command.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn questions() -> Vec<Question> {
        (0..3)
            .map(|i| Question {
                id: (i + 1).to_string(),
                text: format!("Frage {}", i + 1),
                options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                correct_answer: i,
                explanation: String::new(),
                category: "Regelwerk".to_string(),
                difficulty: "Einfach".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_full_run() {
        let mut session = QuizSession::new(questions());
        session.start().unwrap();

        assert!(session.submit_answer(0).unwrap());
        assert_eq!(session.advance().unwrap(), None);
        assert!(!session.submit_answer(0).unwrap());
        assert_eq!(session.advance().unwrap(), None);
        assert!(session.submit_answer(2).unwrap());

        let result = session.advance().unwrap().expect("last question completes the quiz");
        assert_eq!(result, QuizScore { correct: 2, total: 3, percentage: 67 });
        assert_eq!(session.state(), QuizState::Completed(result));
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_commands_before_start_are_rejected() {
        let mut session = QuizSession::new(questions());
        assert_matches!(session.submit_answer(0), Err(PortalError::InvalidStateTransition { from, .. }) if from == "not_started");
        assert_matches!(session.advance(), Err(PortalError::InvalidStateTransition { .. }));
        assert_eq!(session.state(), QuizState::NotStarted);
    }

    #[test]
    fn test_advance_before_answer_is_rejected() {
        let mut session = QuizSession::new(questions());
        session.start().unwrap();

        assert_matches!(
            session.advance(),
            Err(PortalError::InvalidStateTransition { from, to }) if from == "question_0_unanswered" && to == "advance"
        );
        assert_eq!(session.state(), QuizState::InProgress { index: 0, answered: false });
    }

    #[test]
    fn test_double_submit_is_rejected_and_not_rescored() {
        let mut session = QuizSession::new(questions());
        session.start().unwrap();
        assert!(!session.submit_answer(1).unwrap());

        assert_matches!(session.submit_answer(0), Err(PortalError::InvalidStateTransition { .. }));
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.correct_so_far(), 0);
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let mut session = QuizSession::new(questions());
        session.start().unwrap();
        assert_matches!(session.start(), Err(PortalError::InvalidStateTransition { .. }));
    }

    #[test]
    fn test_retake_resets_answers() {
        let mut session = QuizSession::new(questions());
        session.start().unwrap();
        for i in 0..3 {
            session.submit_answer(i).unwrap();
            session.advance().unwrap();
        }
        assert_eq!(session.correct_so_far(), 3);

        session.start().unwrap();
        assert!(session.answers().is_empty());
        assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("1"));
    }

    #[test]
    fn test_empty_quiz_completes_immediately() {
        let mut session = QuizSession::new(Vec::new());
        session.start().unwrap();
        assert_eq!(session.state(), QuizState::Completed(QuizScore { correct: 0, total: 0, percentage: 0 }));
    }
}
