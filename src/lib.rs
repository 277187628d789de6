//! quizr library - Terminal multiple-choice quiz runner
//!
//! Loads a JSON question bank, selects questions for a quiz mode and subject,
//! and runs the answer/score/advance session behind a ratatui front end.

pub mod app;
pub mod bank;
pub mod config;
pub mod error;
pub mod help;
pub mod navigation;
pub mod notification;
pub mod selector;
pub mod session;
pub mod theme;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use bank::{Question, QuestionBank};
pub use config::Config;
pub use error::QuizError;
pub use navigation::QuizConfig;
pub use selector::QuizMode;
pub use session::{QuizResult, Session, SessionState};
