use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Screen};
use crate::session::SessionState;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match &app.screen {
        Screen::Loading => hints!["q" => "Quit"],
        Screen::Failed(_) if app.bank.is_some() => {
            hints!["d" => "Dashboard", "q" => "Quit"]
        }
        Screen::Failed(_) => hints!["q" => "Quit"],
        Screen::Landing(landing) if landing.subject_modes_enabled() => {
            hints!["↑/↓" => "Subject", "1/2" => "Mixed Quiz", "a" => "All of Subject", "r" => "10 of Subject", "Esc" => "Clear", "q" => "Quit"]
        }
        Screen::Landing(_) => {
            hints!["↑/↓" => "Subject", "1/2" => "Mixed Quiz", "q" => "Quit"]
        }
        Screen::Quiz(quiz) => match quiz.session.as_ref().map(|s| s.state()) {
            None => hints!["d" => "Dashboard", "q" => "Quit"],
            Some(SessionState::InProgress { answered: None, .. }) => {
                hints!["1-9" => "Answer", "↑/↓" => "Move", "Enter" => "Choose", "Esc" => "Dashboard", "q" => "Quit"]
            }
            Some(SessionState::InProgress { .. }) => {
                hints!["Enter/n" => "Continue", "Esc" => "Dashboard", "q" => "Quit"]
            }
            Some(SessionState::Complete { .. }) => {
                hints!["r" => "Retake", "d" => "Dashboard", "q" => "Quit"]
            }
        },
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
