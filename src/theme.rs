//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Neon - green/blue accents on a dark slate background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(229, 231, 235);
    pub const TEXT_DIM: Color = Color::Rgb(107, 114, 128);
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

    pub const BG_SURFACE: Color = Color::Rgb(31, 41, 55);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 65, 81);

    pub const NEON_GREEN: Color = Color::Rgb(57, 255, 20);
    pub const NEON_BLUE: Color = Color::Rgb(0, 191, 255);
    pub const RED: Color = Color::Rgb(248, 113, 113);
    pub const YELLOW: Color = Color::Rgb(250, 204, 21);
}

/// Title bar across the top of every screen
pub mod title {
    use super::*;

    pub const APP_NAME: Style = Style::new()
        .fg(palette::NEON_GREEN)
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTOR: Color = palette::TEXT_DIM;
}

/// Landing (dashboard) screen
pub mod landing {
    use super::*;

    pub const INTRO: Color = palette::TEXT_MUTED;
    pub const MIXED_BORDER: Color = palette::NEON_GREEN;
    pub const SUBJECT_BORDER: Color = palette::NEON_BLUE;
    pub const BUTTON_KEY: Style = Style::new()
        .fg(palette::NEON_BLUE)
        .add_modifier(Modifier::BOLD);
    pub const BUTTON_LABEL: Color = palette::TEXT;
    pub const BUTTON_DISABLED: Color = palette::TEXT_DIM;
    pub const TOPIC: Color = palette::TEXT;
    pub const TOPIC_COUNT: Color = palette::TEXT_MUTED;
    pub const TOPIC_SELECTED: Style = Style::new()
        .fg(palette::NEON_GREEN)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
}

/// Question screen
pub mod quiz {
    use super::*;

    pub const BORDER: Color = palette::NEON_BLUE;
    pub const TOPIC: Style = Style::new()
        .fg(palette::NEON_BLUE)
        .add_modifier(Modifier::BOLD);
    pub const ID: Color = palette::TEXT_MUTED;
    pub const QUESTION: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const OPTION: Color = palette::TEXT;
    pub const OPTION_CURSOR: Style = Style::new().fg(palette::TEXT).bg(palette::BG_HIGHLIGHT);
    pub const OPTION_DISABLED: Color = palette::TEXT_DIM;
    pub const OPTION_CORRECT: Style = Style::new()
        .fg(palette::NEON_GREEN)
        .add_modifier(Modifier::BOLD);
    pub const OPTION_INCORRECT: Style = Style::new()
        .fg(palette::RED)
        .add_modifier(Modifier::CROSSED_OUT);
    pub const ADVANCE: Style = Style::new()
        .fg(palette::NEON_BLUE)
        .add_modifier(Modifier::BOLD);
    pub const PROGRESS: Style = Style::new()
        .fg(palette::NEON_GREEN)
        .bg(palette::BG_SURFACE)
        .add_modifier(Modifier::BOLD);
}

/// Results screen
pub mod results {
    use super::*;

    pub const BORDER: Color = palette::NEON_BLUE;
    pub const HEADING: Style = Style::new()
        .fg(palette::NEON_GREEN)
        .add_modifier(Modifier::BOLD);
    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const TIER_EXCELLENT: Color = palette::NEON_GREEN;
    pub const TIER_SOLID: Color = palette::NEON_BLUE;
    pub const TIER_LOW: Color = palette::RED;
}

/// Loading, error and "no questions" screens
pub mod status {
    use super::*;

    pub const LOADING: Style = Style::new()
        .fg(palette::NEON_GREEN)
        .add_modifier(Modifier::BOLD);
    pub const DETAIL: Color = palette::TEXT_MUTED;
    pub const ERROR_BORDER: Color = palette::RED;
    pub const ERROR_TITLE: Style = Style::new().fg(palette::RED).add_modifier(Modifier::BOLD);
}

/// Help line at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::NEON_BLUE;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Notification styles
pub mod notification {
    use super::*;

    #[derive(Debug)]
    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::TEXT_MUTED,
    };
    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Black,
        bg: palette::YELLOW,
        border: palette::YELLOW,
    };
}
