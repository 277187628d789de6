// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_SOURCE: &str = "questions.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Question bank configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BankConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            source: default_source(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Quiz configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct QuizSettings {
    /// Fixed shuffle seed for reproducible quizzes
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bank: BankConfig,
    #[serde(default)]
    pub quiz: QuizSettings,
}

impl Config {
    /// Replace values that parse but cannot work, returning a warning for each fix
    pub fn normalize(&mut self) -> Option<String> {
        if self.bank.timeout_secs == 0 {
            self.bank.timeout_secs = DEFAULT_TIMEOUT_SECS;
            return Some(format!(
                "Invalid config: bank.timeout_secs must be at least 1, using {}",
                DEFAULT_TIMEOUT_SECS
            ));
        }
        None
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
