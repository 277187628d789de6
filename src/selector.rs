//! Quiz selection
//!
//! Derives the ordered question list for a session from the bank, a mode and
//! an optional subject. Randomness comes from the caller so selections can be
//! replayed with a seeded generator.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::{Question, QuestionBank};

/// Sample size used for `random_10` and for any mode that is not recognized
pub const FALLBACK_SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizMode {
    Random100,
    Random20,
    Random10,
    All,
    /// Any other `mode` value; selects like `random_10`
    Unrecognized(String),
}

impl QuizMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "random_100" => QuizMode::Random100,
            "random_20" => QuizMode::Random20,
            "random_10" => QuizMode::Random10,
            "all" => QuizMode::All,
            other => QuizMode::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QuizMode::Random100 => "random_100",
            QuizMode::Random20 => "random_20",
            QuizMode::Random10 => "random_10",
            QuizMode::All => "all",
            QuizMode::Unrecognized(value) => value,
        }
    }

    /// Number of questions a random mode draws; None for `all`
    pub fn sample_size(&self) -> Option<usize> {
        match self {
            QuizMode::Random100 => Some(100),
            QuizMode::Random20 => Some(20),
            QuizMode::Random10 | QuizMode::Unrecognized(_) => Some(FALLBACK_SAMPLE_SIZE),
            QuizMode::All => None,
        }
    }

    /// Modes that draw from the whole bank and carry a `size` parameter
    pub fn is_global(&self) -> bool {
        matches!(self, QuizMode::Random100 | QuizMode::Random20)
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the question sequence for a session
///
/// The candidate set is the subject's questions when a subject is given,
/// otherwise the whole bank. `all` keeps bank order; every other mode takes a
/// prefix of a uniform shuffle, so candidates never repeat and small sets are
/// never padded. `size` only narrows the global random modes.
pub fn select<R: Rng + ?Sized>(
    bank: &QuestionBank,
    mode: &QuizMode,
    subject: Option<&str>,
    size: Option<usize>,
    rng: &mut R,
) -> Vec<Question> {
    // Any non-empty subject enables the subject modes, but "null" still
    // draws from the whole bank
    let subject = subject.filter(|s| !s.is_empty());
    let topic = subject.filter(|s| *s != "null");

    let candidates: Vec<&Question> = match topic {
        Some(topic) => bank.by_topic(topic),
        None => bank.questions().iter().collect(),
    };

    match (mode, subject) {
        (QuizMode::All, Some(_)) => candidates.into_iter().cloned().collect(),
        (QuizMode::Random10, Some(_)) => sample(candidates, FALLBACK_SAMPLE_SIZE, rng),
        (QuizMode::Random100 | QuizMode::Random20, _) => {
            let mode_size = mode.sample_size().unwrap_or(FALLBACK_SAMPLE_SIZE);
            let count = size.map_or(mode_size, |s| s.min(mode_size));
            sample(candidates, count, rng)
        }
        _ => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Mode '{}' with subject {:?} falls back to {} random questions",
                mode,
                subject,
                FALLBACK_SAMPLE_SIZE
            );
            sample(candidates, FALLBACK_SAMPLE_SIZE, rng)
        }
    }
}

/// Fisher-Yates shuffle of the candidates, then the first `count`
fn sample<R: Rng + ?Sized>(
    mut candidates: Vec<&Question>,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates.into_iter().cloned().collect()
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
