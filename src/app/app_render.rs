use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::{App, Screen};
use crate::error::QuizError;
use crate::navigation::landing_render::render_landing;
use crate::notification::render_notification;
use crate::theme;
use crate::view::view_render::render_quiz_view;
use crate::widgets::popup;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_title(frame, title_area);

        match &self.screen {
            Screen::Loading => self.render_loading(frame, body_area),
            Screen::Failed(e) => render_failed(e, self.bank.is_some(), frame, body_area),
            Screen::Landing(landing) => render_landing(landing, frame, body_area),
            Screen::Quiz(quiz) => render_quiz_view(&quiz.view(), quiz.cursor, frame, body_area),
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" quizr ", theme::title::APP_NAME)];
        if let Some(descriptor) = self.descriptor() {
            spans.push(Span::styled(
                descriptor,
                Style::default().fg(theme::title::DESCRIPTOR),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "Loading question data...",
            theme::status::LOADING,
        ))];
        if let Some(loader) = &self.loader {
            lines.push(Line::from(Span::styled(
                format!("Attempting to read {}...", loader.source),
                Style::default().fg(theme::status::DETAIL),
            )));
        }

        let height = (lines.len() as u16).min(area.height);
        let [_, text_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            text_area,
        );
    }
}

fn render_failed(error: &QuizError, can_return: bool, frame: &mut Frame, area: Rect) {
    let action = if can_return {
        Line::from(vec![
            Span::styled("[d]", theme::landing::BUTTON_KEY),
            Span::raw(" Go to Dashboard"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[q]", theme::landing::BUTTON_KEY),
            Span::raw(" Quit"),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(error.title(), theme::status::ERROR_TITLE)),
        Line::from(""),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme::status::DETAIL),
        )),
        Line::from(""),
        action,
    ];

    let width = area.width.saturating_sub(4).min(70);
    let popup_area = popup::centered_popup(area, width, 9);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Error ")
        .border_style(Style::default().fg(theme::status::ERROR_BORDER));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup_area,
    );
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
