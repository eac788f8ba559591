// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output and command reports.

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

/// Palette entries, as ANSI 256-color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section headers and field labels
    Header,
    /// Commands and literal values
    Literal,
    /// Placeholders and descriptions
    Context,
    /// Absent or secondary values
    Muted,
}

impl Tone {
    pub fn code(self) -> u8 {
        match self {
            Tone::Header => 74,
            Tone::Literal => 250,
            Tone::Context => 245,
            Tone::Muted => 240,
        }
    }

    fn style(self) -> Style {
        Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(self.code()))))
    }
}

/// Whether to emit color.
///
/// `NO_COLOR=1` disables, then `COLOR=1` forces, otherwise stdout must be a TTY.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// clap help styles in the palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Tone::Header.style())
        .literal(Tone::Literal.style())
        .placeholder(Tone::Context.style())
}

/// `text` in `tone`, or unchanged when color is off.
pub fn paint(tone: Tone, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{}m{text}\x1b[0m", tone.code())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
