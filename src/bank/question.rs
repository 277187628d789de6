use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single multiple-choice question as stored in the bank
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Banks use both numeric and string ids, kept as display text
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub topic: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

impl Question {
    /// Check the option invariants that serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err(format!("question {} has no options", self.id));
        }
        if self.answer_index >= self.options.len() {
            return Err(format!(
                "question {} has answerIndex {} but only {} options",
                self.id,
                self.answer_index,
                self.options.len()
            ));
        }
        Ok(())
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.answer_index
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, found {}",
            other
        ))),
    }
}
