//! Quiz session state machine
//!
//! A session walks a fixed question sequence one question at a time:
//! answer, then advance, until every question has been answered.

mod quiz_result;

pub use quiz_result::{FeedbackTier, QuizResult};

use crate::bank::Question;
use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `answered` holds the option chosen for the current question
    InProgress {
        index: usize,
        score: usize,
        answered: Option<usize>,
    },
    Complete {
        final_score: usize,
        total: usize,
    },
}

/// What happened to a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// Already answered, out-of-range option, or session complete
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    state: SessionState,
}

impl Session {
    /// Start a session over a non-empty question sequence
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptySelection);
        }
        Ok(Self {
            questions,
            state: SessionState::InProgress {
                index: 0,
                score: 0,
                answered: None,
            },
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        match self.state {
            SessionState::InProgress { score, .. } => score,
            SessionState::Complete { final_score, .. } => final_score,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress { index, .. } => self.questions.get(index),
            SessionState::Complete { .. } => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(
            self.state,
            SessionState::InProgress {
                answered: Some(_),
                ..
            }
        )
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Complete { .. })
    }

    pub fn is_last_question(&self) -> bool {
        match self.state {
            SessionState::InProgress { index, .. } => index + 1 == self.total(),
            SessionState::Complete { .. } => false,
        }
    }

    /// Record an answer for the current question
    ///
    /// Only the first valid submission per question counts.
    pub fn submit_answer(&mut self, option: usize) -> AnswerOutcome {
        let SessionState::InProgress {
            index,
            score,
            answered: None,
        } = self.state
        else {
            return AnswerOutcome::Ignored;
        };

        let Some(question) = self.questions.get(index) else {
            return AnswerOutcome::Ignored;
        };
        if option >= question.options.len() {
            return AnswerOutcome::Ignored;
        }

        let correct = question.is_correct(option);
        self.state = SessionState::InProgress {
            index,
            score: if correct { score + 1 } else { score },
            answered: Some(option),
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Question {} answered with option {} ({})",
            question.id,
            option,
            if correct { "correct" } else { "incorrect" }
        );

        if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Move past an answered question; returns false when nothing changed
    pub fn advance(&mut self) -> bool {
        let SessionState::InProgress {
            index,
            score,
            answered: Some(_),
        } = self.state
        else {
            return false;
        };

        let next = index + 1;
        self.state = if next >= self.total() {
            #[cfg(debug_assertions)]
            log::debug!("Session complete: {}/{}", score, self.total());
            SessionState::Complete {
                final_score: score,
                total: self.total(),
            }
        } else {
            SessionState::InProgress {
                index: next,
                score,
                answered: None,
            }
        };
        true
    }

    /// Final result once complete
    pub fn result(&self) -> Option<QuizResult> {
        match self.state {
            SessionState::Complete { final_score, total } => {
                Some(QuizResult::new(final_score, total))
            }
            SessionState::InProgress { .. } => None,
        }
    }
}
