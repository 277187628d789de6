use std::collections::BTreeMap;

use serde_json::Value;

use super::question::Question;
use crate::error::QuizError;

/// The full, validated question bank. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already-parsed questions
    ///
    /// Rejects an empty list and any question whose `answer_index` does not
    /// point into its options.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::DataFormat(
                "the question bank did not contain any questions".to_string(),
            ));
        }
        for question in &questions {
            question.validate().map_err(QuizError::DataFormat)?;
        }
        Ok(Self { questions })
    }

    /// Parse a bank from the raw JSON document
    ///
    /// The document must be a non-empty array of question objects.
    pub fn from_json(text: &str) -> Result<Self, QuizError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| QuizError::DataFormat(format!("malformed JSON: {}", e)))?;

        if !value.is_array() {
            return Err(QuizError::DataFormat(
                "expected a JSON array of questions".to_string(),
            ));
        }

        let questions: Vec<Question> =
            serde_json::from_value(value).map_err(|e| QuizError::DataFormat(e.to_string()))?;

        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct topics, sorted ascending
    pub fn unique_topics(&self) -> Vec<String> {
        self.topic_counts().into_iter().map(|(topic, _)| topic).collect()
    }

    /// Questions for one topic, in bank order
    pub fn by_topic(&self, topic: &str) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.topic == topic).collect()
    }

    /// `(topic, question count)` pairs in `unique_topics` order
    pub fn topic_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for question in &self.questions {
            *counts.entry(question.topic.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(topic, count)| (topic.to_string(), count))
            .collect()
    }
}

#[cfg(test)]
#[path = "question_bank_tests.rs"]
mod question_bank_tests;
