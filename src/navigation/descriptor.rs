//! Quiz descriptor
//!
//! The landing screen hands a quiz to the quiz screen as an addressable
//! descriptor, `quiz?mode=<mode>[&subject=<topic>][&size=<n>]`, the same shape
//! a browser would put in the address bar.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::bank::{Question, QuestionBank};
use crate::error::QuizError;
use crate::selector::{self, QuizMode};

/// Path component of every descriptor
pub const QUIZ_VIEW: &str = "quiz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub mode: QuizMode,
    pub subject: Option<String>,
    pub size: Option<usize>,
}

impl QuizConfig {
    /// Configuration as the landing screen builds it
    ///
    /// Global random modes carry their size clamped to the bank size; other
    /// modes carry none.
    pub fn for_bank(mode: QuizMode, subject: Option<String>, bank_len: usize) -> Self {
        let size = if mode.is_global() {
            mode.sample_size().map(|n| n.min(bank_len))
        } else {
            None
        };

        Self {
            mode,
            subject: subject.filter(|s| !s.is_empty()),
            size,
        }
    }

    /// Encode as `quiz?mode=...`
    pub fn to_url(&self) -> String {
        let mut url = format!(
            "{}?mode={}",
            QUIZ_VIEW,
            urlencoding::encode(self.mode.as_str())
        );
        if let Some(subject) = &self.subject {
            url.push_str("&subject=");
            url.push_str(&urlencoding::encode(subject));
        }
        if let Some(size) = self.size
            && self.mode.is_global()
        {
            url.push_str(&format!("&size={}", size));
        }
        url
    }

    /// Decode a descriptor; the `quiz?` prefix is optional
    ///
    /// Unknown parameters are ignored and a missing `mode` decodes to an
    /// unrecognized mode, which selects like `random_10`.
    pub fn from_url(url: &str) -> Result<Self, QuizError> {
        let query = match url.trim().split_once('?') {
            Some((_, query)) => query,
            None => url.trim(),
        };

        let mut mode = None;
        let mut subject = None;
        let mut size = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(raw_value)?;

            match key {
                "mode" => mode = Some(QuizMode::parse(&value)),
                "subject" => subject = Some(value).filter(|s| !s.is_empty()),
                "size" => {
                    let parsed = value.parse::<usize>().map_err(|_| {
                        QuizError::InvalidDescriptor(format!("size '{}' is not a number", value))
                    })?;
                    size = Some(parsed);
                }
                _ => {
                    #[cfg(debug_assertions)]
                    log::debug!("Ignoring unknown descriptor parameter '{}'", key);
                }
            }
        }

        Ok(Self {
            mode: mode.unwrap_or_else(|| QuizMode::Unrecognized(String::new())),
            subject,
            size,
        })
    }

    /// Run the selector for this configuration
    pub fn select_questions<R: Rng + ?Sized>(
        &self,
        bank: &QuestionBank,
        rng: &mut R,
    ) -> Vec<Question> {
        selector::select(
            bank,
            &self.mode,
            self.subject.as_deref(),
            self.size,
            rng,
        )
    }
}

fn decode_component(raw: &str) -> Result<String, QuizError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| QuizError::InvalidDescriptor(e.to_string()))
}

impl fmt::Display for QuizConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

impl FromStr for QuizConfig {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_url(s)
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod descriptor_tests;
