use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::landing::LandingState;
use crate::selector::QuizMode;
use crate::theme;

pub fn render_landing(landing: &LandingState, frame: &mut Frame, area: Rect) {
    let [intro_area, mixed_area, subject_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(6),
    ])
    .areas(area);

    let intro = Paragraph::new(Line::from(Span::styled(
        "Choose a mode and topic to start your revision.",
        Style::default().fg(theme::landing::INTRO),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(intro, intro_area);

    render_mixed_modes(landing, frame, mixed_area);
    render_subject_modes(landing, frame, subject_area);
}

fn button(key: &'static str, label: String, enabled: bool) -> Vec<Span<'static>> {
    if enabled {
        vec![
            Span::styled(format!("[{}]", key), theme::landing::BUTTON_KEY),
            Span::styled(
                format!(" {}", label),
                Style::default().fg(theme::landing::BUTTON_LABEL),
            ),
        ]
    } else {
        vec![Span::styled(
            format!("[{}] {}", key, label),
            Style::default().fg(theme::landing::BUTTON_DISABLED),
        )]
    }
}

fn render_mixed_modes(landing: &LandingState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Mixed (Random) Quizzes ")
        .border_style(Style::default().fg(theme::landing::MIXED_BORDER));

    let hundred = landing.global_button_size(&QuizMode::Random100);
    let twenty = landing.global_button_size(&QuizMode::Random20);

    let lines = vec![
        Line::from(button("1", format!("{} Random Questions", hundred), true)),
        Line::from(button("2", format!("{} Random Questions", twenty), true)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_subject_modes(landing: &LandingState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Subject-Specific Quizzes ")
        .border_style(Style::default().fg(theme::landing::SUBJECT_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, gap_area, buttons_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let mut lines = Vec::with_capacity(landing.topics.len() + 1);
    if landing.selected.is_none() {
        lines.push(Line::from(Span::styled(
            "-- Select a Subject (↑/↓) --",
            Style::default().fg(theme::landing::PLACEHOLDER),
        )));
    }
    for (i, (topic, count)) in landing.topics.iter().enumerate() {
        if landing.selected == Some(i) {
            lines.push(Line::from(Span::styled(
                format!("› {} ({} Qs)", topic, count),
                theme::landing::TOPIC_SELECTED,
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}", topic),
                    Style::default().fg(theme::landing::TOPIC),
                ),
                Span::styled(
                    format!(" ({} Qs)", count),
                    Style::default().fg(theme::landing::TOPIC_COUNT),
                ),
            ]));
        }
    }

    let scroll = list_scroll(landing.selected, list_area.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list_area);
    frame.render_widget(Paragraph::new(""), gap_area);

    let enabled = landing.subject_modes_enabled();
    let mut buttons = button("a", "All Subject Questions".to_string(), enabled);
    buttons.push(Span::raw("    "));
    buttons.extend(button(
        "r",
        "10 Random Questions of Subject".to_string(),
        enabled,
    ));
    frame.render_widget(Paragraph::new(Line::from(buttons)), buttons_area);
}

/// Keep the selected topic on screen
fn list_scroll(selected: Option<usize>, height: u16) -> u16 {
    let Some(selected) = selected else {
        return 0;
    };
    let height = height.max(1) as usize;
    selected.saturating_sub(height - 1) as u16
}
