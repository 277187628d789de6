//! Shared test utilities for quizr
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use crate::app::App;
    use crate::bank::{Question, QuestionBank};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Three questions in topic "A" (ids 1, 3, 5) and two in "B" (ids 2, 4)
    pub const SAMPLE_BANK_JSON: &str = r#"[
        {"id": 1, "topic": "A", "question": "A1?", "options": ["a", "b", "c"], "answerIndex": 0},
        {"id": 2, "topic": "B", "question": "B1?", "options": ["a", "b"], "answerIndex": 1},
        {"id": 3, "topic": "A", "question": "A2?", "options": ["a", "b", "c", "d"], "answerIndex": 2},
        {"id": 4, "topic": "B", "question": "B2?", "options": ["a", "b", "c"], "answerIndex": 0},
        {"id": 5, "topic": "A", "question": "A3?", "options": ["a", "b"], "answerIndex": 1}
    ]"#;

    /// Build a three-option question
    pub fn question(id: usize, topic: &str, answer_index: usize) -> Question {
        Question {
            id: id.to_string(),
            topic: topic.to_string(),
            question: format!("Question {} about {}?", id, topic),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
            ],
            answer_index,
        }
    }

    pub fn sample_bank() -> QuestionBank {
        QuestionBank::from_json(SAMPLE_BANK_JSON).unwrap()
    }

    /// Bank with `count` questions spread round-robin over `topics`
    pub fn bank_with(count: usize, topics: &[&str]) -> QuestionBank {
        let questions = (0..count)
            .map(|i| question(i + 1, topics[i % topics.len()], i % 3))
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    /// App with the sample bank already loaded and the landing screen open
    pub fn test_app() -> App {
        App::with_bank(Arc::new(sample_bank()), Some(42))
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
