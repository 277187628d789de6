use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{AdvanceControl, OptionMark, QuestionView, QuizView, ResultsView};
use crate::error::QuizError;
use crate::session::FeedbackTier;
use crate::theme;

/// Draw the quiz screen for `view`; `cursor` is the keyboard-highlighted option
pub fn render_quiz_view(view: &QuizView, cursor: usize, frame: &mut Frame, area: Rect) {
    match view {
        QuizView::Question(question) => render_question(question, cursor, frame, area),
        QuizView::Results(results) => render_results(results, frame, area),
        QuizView::NoQuestions => render_no_questions(frame, area),
    }
}

fn render_question(view: &QuestionView, cursor: usize, frame: &mut Frame, area: Rect) {
    let [card_area, progress_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::quiz::BORDER))
        .title(Line::from(Span::styled(
            format!(" Topic: {} ", view.topic),
            theme::quiz::TOPIC,
        )))
        .title_top(
            Line::from(Span::styled(
                format!(" ID: {} ", view.id),
                Style::default().fg(theme::quiz::ID),
            ))
            .alignment(Alignment::Right),
        );

    let inner = block.inner(card_area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::raw(""));
    for text_line in view.text.lines() {
        lines.push(Line::from(Span::styled(
            format!(" {}", text_line),
            theme::quiz::QUESTION,
        )));
    }
    lines.push(Line::raw(""));

    let first_option = lines.len();
    for (i, option) in view.options.iter().enumerate() {
        lines.push(option_line(i, &option.label, option.mark, i == cursor));
    }

    lines.push(Line::raw(""));
    lines.push(advance_line(view.advance));

    // Unanswered: follow the cursor. Answered: show the advance control.
    let focus = match view.advance {
        None => first_option + cursor.min(view.options.len().saturating_sub(1)),
        Some(_) => lines.len() - 1,
    };
    let scroll = card_scroll(&lines, focus, inner.width, inner.height);

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(card, card_area);

    let progress = Paragraph::new(Line::from(Span::styled(
        format!(" Progress: {} ", view.progress()),
        theme::quiz::PROGRESS,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(progress, progress_area);
}

/// Rows to scroll so line `focus` ends inside a card `height` rows tall
fn card_scroll(lines: &[Line], focus: usize, width: u16, height: u16) -> u16 {
    let width = usize::from(width.max(1));
    let focus_end: usize = lines
        .iter()
        .take(focus + 1)
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    let scroll = focus_end.saturating_sub(usize::from(height));
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn option_line(index: usize, label: &str, mark: OptionMark, under_cursor: bool) -> Line<'static> {
    let (marker, style) = match mark {
        OptionMark::Selectable if under_cursor => ("›", theme::quiz::OPTION_CURSOR),
        OptionMark::Selectable => (" ", Style::default().fg(theme::quiz::OPTION)),
        OptionMark::Correct => ("✓", theme::quiz::OPTION_CORRECT),
        OptionMark::Incorrect => ("✗", theme::quiz::OPTION_INCORRECT),
        OptionMark::Disabled => (" ", Style::default().fg(theme::quiz::OPTION_DISABLED)),
    };

    Line::from(vec![
        Span::raw(format!(" {} ", marker)),
        Span::styled(format!("[{}] {}", index + 1, label), style),
    ])
}

fn advance_line(advance: Option<AdvanceControl>) -> Line<'static> {
    match advance {
        Some(control) => Line::from(Span::styled(
            format!("[Enter] {}", control.label()),
            theme::quiz::ADVANCE,
        ))
        .alignment(Alignment::Center),
        None => Line::from(Span::styled(
            "Choose an answer",
            Style::default().fg(theme::quiz::OPTION_DISABLED),
        ))
        .alignment(Alignment::Center),
    }
}

fn render_results(view: &ResultsView, frame: &mut Frame, area: Rect) {
    let tier_color = match view.tier {
        FeedbackTier::Excellent => theme::results::TIER_EXCELLENT,
        FeedbackTier::Solid => theme::results::TIER_SOLID,
        FeedbackTier::KeepStudying => theme::results::TIER_LOW,
    };
    let tier_style = Style::default().fg(tier_color);
    let label_style = Style::default().fg(theme::results::LABEL);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("Quiz Complete!", theme::results::HEADING)),
        Line::raw(""),
        Line::from(Span::styled("Your Final Score:", label_style)),
        Line::from(Span::styled(view.score.to_string(), tier_style)),
        Line::from(Span::styled(format!("out of {}", view.total), label_style)),
        Line::from(Span::styled(
            format!("({})", view.percentage_text()),
            tier_style,
        )),
        Line::raw(""),
        Line::from(Span::raw(view.tier.message())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[r]", theme::landing::BUTTON_KEY),
            Span::raw(" Retake This Quiz    "),
            Span::styled("[d]", theme::landing::BUTTON_KEY),
            Span::raw(" Go to Dashboard"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::results::BORDER));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_no_questions(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            QuizError::EmptySelection.to_string(),
            theme::status::ERROR_TITLE,
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[d]", theme::landing::BUTTON_KEY),
            Span::raw(" Go to Dashboard"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::status::ERROR_BORDER));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "view_render_tests.rs"]
mod view_render_tests;
