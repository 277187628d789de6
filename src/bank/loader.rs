//! Question Bank Loader
//!
//! Loads the question bank in a background thread so the UI can keep drawing
//! a loading screen. The result comes back over a channel and is picked up by
//! a non-blocking poll from the event loop.
//!
//! Remote banks (`http://` / `https://`) are fetched on a single-threaded tokio
//! runtime owned by the loader thread.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::time::Duration;

use super::question_bank::QuestionBank;
use crate::error::QuizError;

/// Where the question bank document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankSource {
    File(PathBuf),
    Url(String),
}

impl BankSource {
    /// Interpret a user-supplied location as either a URL or a file path
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            BankSource::Url(trimmed.to_string())
        } else {
            BankSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankSource::File(path) => write!(f, "{}", path.display()),
            BankSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Manages the single background load of the question bank
pub struct BankLoader {
    pub source: BankSource,
    /// None once the result has been handed out
    pub rx: Option<Receiver<Result<QuestionBank, QuizError>>>,
}

impl BankLoader {
    /// Spawn a background thread that reads and validates the bank
    pub fn spawn_load(source: BankSource, timeout: Duration) -> Self {
        let (tx, rx) = channel();

        let thread_source = source.clone();
        std::thread::spawn(move || {
            let result = load_bank_sync(&thread_source, timeout);
            let _ = tx.send(result);
        });

        Self {
            source,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while the load is in flight and after the result has
    /// already been handed out once.
    pub fn poll(&mut self) -> Option<Result<Arc<QuestionBank>, QuizError>> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result.map(Arc::new),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(QuizError::Load(
                "Bank loader thread disconnected".to_string(),
            )),
        };
        self.rx = None;
        Some(result)
    }
}

/// Read, parse, and validate the bank (blocking)
pub fn load_bank_sync(source: &BankSource, timeout: Duration) -> Result<QuestionBank, QuizError> {
    let text = match source {
        BankSource::File(path) => read_file(path)?,
        BankSource::Url(url) => fetch_url(url, timeout)?,
    };

    #[cfg(debug_assertions)]
    log::debug!("Read {} bytes of question data from {}", text.len(), source);

    QuestionBank::from_json(&text).inspect_err(|e| {
        log::error!("Question bank from {} rejected: {}", source, e);
    })
}

fn read_file(path: &Path) -> Result<String, QuizError> {
    std::fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read {}: {}", path.display(), e);
        QuizError::Load(format!("{} ({})", e, path.display()))
    })
}

fn fetch_url(url: &str, timeout: Duration) -> Result<String, QuizError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| QuizError::Load(format!("Failed to start HTTP runtime: {}", e)))?;

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuizError::Load(e.to_string()))?;

        let response = client.get(url).send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", url, e);
            QuizError::Load(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Request to {} returned {}", url, status);
            return Err(QuizError::Load(format!(
                "File not found or server error (Status: {}).",
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| QuizError::Load(e.to_string()))
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
