//! Quiz view model
//!
//! `project` turns a session into a presentation-neutral description of what
//! the quiz screen shows. Drawing lives in `view_render`; the session never
//! sees either.

pub mod view_render;

use crate::session::{FeedbackTier, Session, SessionState};

#[derive(Debug, Clone, PartialEq)]
pub enum QuizView {
    Question(QuestionView),
    Results(ResultsView),
    /// The configuration selected zero questions
    NoQuestions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub topic: String,
    pub id: String,
    pub text: String,
    /// 1-based position of this question
    pub position: usize,
    pub total: usize,
    pub options: Vec<OptionView>,
    /// Present once the question has been answered
    pub advance: Option<AdvanceControl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Selectable,
    Correct,
    Incorrect,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceControl {
    NextQuestion,
    ShowResults,
}

impl AdvanceControl {
    pub fn label(self) -> &'static str {
        match self {
            AdvanceControl::NextQuestion => "Next Question →",
            AdvanceControl::ShowResults => "Show Final Results",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub tier: FeedbackTier,
}

impl QuestionView {
    pub fn progress(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

impl ResultsView {
    pub fn percentage_text(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Project the session onto its view; `None` means nothing was selected
pub fn project(session: Option<&Session>) -> QuizView {
    let Some(session) = session else {
        return QuizView::NoQuestions;
    };

    match session.state() {
        SessionState::InProgress { index, answered, .. } => {
            let Some(question) = session.questions().get(index) else {
                return QuizView::NoQuestions;
            };

            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(i, label)| OptionView {
                    label: label.clone(),
                    mark: option_mark(i, question.answer_index, answered),
                })
                .collect();

            let advance = answered.map(|_| {
                if session.is_last_question() {
                    AdvanceControl::ShowResults
                } else {
                    AdvanceControl::NextQuestion
                }
            });

            QuizView::Question(QuestionView {
                topic: question.topic.clone(),
                id: question.id.clone(),
                text: question.question.clone(),
                position: index + 1,
                total: session.total(),
                options,
                advance,
            })
        }
        SessionState::Complete { .. } => match session.result() {
            Some(result) => QuizView::Results(ResultsView {
                score: result.score,
                total: result.total,
                percentage: result.percentage(),
                tier: result.tier(),
            }),
            None => QuizView::NoQuestions,
        },
    }
}

fn option_mark(option: usize, answer: usize, chosen: Option<usize>) -> OptionMark {
    match chosen {
        None => OptionMark::Selectable,
        Some(_) if option == answer => OptionMark::Correct,
        Some(chosen) if option == chosen => OptionMark::Incorrect,
        Some(_) => OptionMark::Disabled,
    }
}
