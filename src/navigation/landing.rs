use crate::bank::QuestionBank;
use crate::selector::QuizMode;

use super::descriptor::QuizConfig;

/// Landing screen state: topic list, subject choice and mode buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingState {
    /// `(topic, question count)`, sorted by topic
    pub topics: Vec<(String, usize)>,
    /// Index into `topics`; None until the user picks a subject
    pub selected: Option<usize>,
    pub bank_len: usize,
}

impl LandingState {
    pub fn new(bank: &QuestionBank) -> Self {
        Self {
            topics: bank.topic_counts(),
            selected: None,
            bank_len: bank.len(),
        }
    }

    pub fn select_next(&mut self) {
        if self.topics.is_empty() {
            return;
        }
        let last = self.topics.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn select_previous(&mut self) {
        if self.topics.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => self.topics.len() - 1,
            Some(i) => i.saturating_sub(1),
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_subject(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.topics.get(i))
            .map(|(topic, _)| topic.as_str())
    }

    /// "All" and "10 random" need a subject
    pub fn subject_modes_enabled(&self) -> bool {
        self.selected_subject().is_some()
    }

    /// Question count shown on a global random button
    pub fn global_button_size(&self, mode: &QuizMode) -> usize {
        mode.sample_size().unwrap_or(0).min(self.bank_len)
    }

    /// Build the configuration a mode button starts
    ///
    /// Returns None for a subject-scoped mode while no subject is chosen,
    /// matching the disabled buttons.
    pub fn start(&self, mode: QuizMode) -> Option<QuizConfig> {
        let subject = self.selected_subject().map(str::to_string);
        if !mode.is_global() && subject.is_none() {
            return None;
        }
        Some(QuizConfig::for_bank(mode, subject, self.bank_len))
    }
}

#[cfg(test)]
#[path = "landing_tests.rs"]
mod landing_tests;
