use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bank::{BankLoader, QuestionBank};
use crate::error::QuizError;
use crate::navigation::{LandingState, QuizConfig};
use crate::notification::NotificationState;
use crate::selector::QuizMode;
use crate::session::{AnswerOutcome, Session};
use crate::view::{self, QuizView};

/// Which screen currently owns the terminal
#[derive(Debug, Clone)]
pub enum Screen {
    Loading,
    Landing(LandingState),
    Quiz(QuizScreen),
    /// Terminal error for the current screen
    Failed(QuizError),
}

/// A running (or finished) quiz and its keyboard cursor
#[derive(Debug, Clone)]
pub struct QuizScreen {
    pub config: QuizConfig,
    /// None when the configuration selected no questions
    pub session: Option<Session>,
    pub cursor: usize,
}

impl QuizScreen {
    pub fn view(&self) -> QuizView {
        view::project(self.session.as_ref())
    }
}

pub struct App {
    pub screen: Screen,
    pub bank: Option<Arc<QuestionBank>>,
    pub loader: Option<BankLoader>,
    /// Quiz to open once the bank is loaded, instead of the landing screen
    pub start_descriptor: Option<String>,
    pub notification: NotificationState,
    pub rng: StdRng,
    pub should_quit: bool,
}

impl App {
    /// App waiting on a background bank load
    pub fn new_with_loader(
        loader: BankLoader,
        start_descriptor: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            screen: Screen::Loading,
            bank: None,
            loader: Some(loader),
            start_descriptor,
            notification: NotificationState::new(),
            rng: make_rng(seed),
            should_quit: false,
        }
    }

    /// App over an already-loaded bank, starting on the landing screen
    pub fn with_bank(bank: Arc<QuestionBank>, seed: Option<u64>) -> Self {
        let screen = Screen::Landing(LandingState::new(&bank));
        Self {
            screen,
            bank: Some(bank),
            loader: None,
            start_descriptor: None,
            notification: NotificationState::new(),
            rng: make_rng(seed),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pick up the bank once the background load finishes
    pub fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        let Some(result) = loader.poll() else {
            return;
        };
        self.loader = None;

        match result {
            Ok(bank) => {
                #[cfg(debug_assertions)]
                log::debug!("Question bank loaded: {} questions", bank.len());

                self.bank = Some(bank);
                match self.start_descriptor.take() {
                    Some(descriptor) => self.navigate(&descriptor),
                    None => self.open_landing(),
                }
            }
            Err(e) => {
                log::error!("Fatal error during question load: {}", e);
                self.screen = Screen::Failed(e);
            }
        }
    }

    pub fn open_landing(&mut self) {
        if let Some(bank) = &self.bank {
            self.screen = Screen::Landing(LandingState::new(bank));
        }
    }

    /// Enter the quiz screen through a `quiz?mode=...` descriptor
    pub fn navigate(&mut self, descriptor: &str) {
        #[cfg(debug_assertions)]
        log::debug!("Navigating to {}", descriptor);

        match QuizConfig::from_url(descriptor) {
            Ok(config) => self.start_quiz(config),
            Err(e) => {
                log::error!("Rejected descriptor {:?}: {}", descriptor, e);
                self.screen = Screen::Failed(e);
            }
        }
    }

    /// Press a landing-screen mode button
    ///
    /// Subject-scoped modes do nothing until a subject is selected.
    pub fn launch(&mut self, mode: QuizMode) {
        let Screen::Landing(landing) = &self.screen else {
            return;
        };
        if let Some(config) = landing.start(mode) {
            let descriptor = config.to_url();
            self.navigate(&descriptor);
        }
    }

    /// Select questions for `config` and start a fresh session
    pub fn start_quiz(&mut self, config: QuizConfig) {
        let Some(bank) = self.bank.clone() else {
            return;
        };

        let questions = config.select_questions(&bank, &mut self.rng);
        let session = match Session::new(questions) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("{} ({})", e, config);
                None
            }
        };

        self.screen = Screen::Quiz(QuizScreen {
            config,
            session,
            cursor: 0,
        });
    }

    /// Start over with a freshly selected sequence from the same configuration
    pub fn retake(&mut self) {
        let Screen::Quiz(quiz) = &self.screen else {
            return;
        };
        let config = quiz.config.clone();
        self.start_quiz(config);
        self.notification.show("Quiz restarted");
    }

    pub fn answer(&mut self, option: usize) -> AnswerOutcome {
        match &mut self.screen {
            Screen::Quiz(QuizScreen {
                session: Some(session),
                cursor,
                ..
            }) => {
                let outcome = session.submit_answer(option);
                if outcome != AnswerOutcome::Ignored {
                    *cursor = option;
                }
                outcome
            }
            _ => AnswerOutcome::Ignored,
        }
    }

    pub fn advance(&mut self) -> bool {
        match &mut self.screen {
            Screen::Quiz(QuizScreen {
                session: Some(session),
                cursor,
                ..
            }) => {
                let advanced = session.advance();
                if advanced {
                    *cursor = 0;
                }
                advanced
            }
            _ => false,
        }
    }

    pub fn quiz_screen(&self) -> Option<&QuizScreen> {
        match &self.screen {
            Screen::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.quiz_screen().and_then(|quiz| quiz.session.as_ref())
    }

    /// Descriptor of the running quiz, shown in the title bar
    pub fn descriptor(&self) -> Option<String> {
        self.quiz_screen().map(|quiz| quiz.config.to_url())
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
