use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Screen};
use crate::selector::QuizMode;
use crate::session::SessionState;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &self.screen {
            Screen::Loading => self.handle_loading_key(key),
            Screen::Failed(_) => self.handle_failed_key(key),
            Screen::Landing(_) => self.handle_landing_key(key),
            Screen::Quiz(_) => self.handle_quiz_key(key),
        }
    }

    fn handle_loading_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
        }
    }

    fn handle_failed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            // Only reachable when the bank itself loaded
            KeyCode::Char('d') | KeyCode::Esc if self.bank.is_some() => self.open_landing(),
            _ => {}
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        let Screen::Landing(landing) = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => landing.select_next(),
            KeyCode::Up | KeyCode::Char('k') => landing.select_previous(),
            KeyCode::Esc => landing.clear_selection(),
            KeyCode::Char('1') => self.launch(QuizMode::Random100),
            KeyCode::Char('2') => self.launch(QuizMode::Random20),
            KeyCode::Char('a') => self.launch(QuizMode::All),
            KeyCode::Char('r') => self.launch(QuizMode::Random10),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        let Screen::Quiz(quiz) = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.open_landing();
                return;
            }
            _ => {}
        }

        let Some(session) = &quiz.session else {
            if key.code == KeyCode::Char('d') {
                self.open_landing();
            }
            return;
        };

        match session.state() {
            SessionState::InProgress { answered: None, .. } => {
                let option_count = session
                    .current_question()
                    .map_or(0, |question| question.options.len());

                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        quiz.cursor = (quiz.cursor + 1).min(option_count.saturating_sub(1));
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        quiz.cursor = quiz.cursor.saturating_sub(1);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let option = quiz.cursor;
                        self.answer(option);
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        let option = c as usize - '1' as usize;
                        self.answer(option);
                    }
                    _ => {}
                }
            }
            SessionState::InProgress {
                answered: Some(_), ..
            } => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right
                ) {
                    self.advance();
                }
            }
            SessionState::Complete { .. } => match key.code {
                KeyCode::Char('r') => self.retake(),
                KeyCode::Char('d') => self.open_landing(),
                _ => {}
            },
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
