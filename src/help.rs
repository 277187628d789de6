//! Context-sensitive key hints shown on the bottom line

pub mod help_line_render;
