//! Question bank module
//!
//! Holds the read-only question bank and the background loader that fills it.

mod question;
mod question_bank;
pub mod loader;

pub use loader::{BankLoader, BankSource};
pub use question::Question;
pub use question_bank::QuestionBank;
