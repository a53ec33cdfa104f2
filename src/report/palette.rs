//! Presentation config: how each line tone is painted.

use colored::{Color, Colorize};

/// Semantic category of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Emphasis,
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    const fn plain() -> Self {
        Style {
            color: None,
            bold: false,
        }
    }

    const fn color(color: Color) -> Self {
        Style {
            color: Some(color),
            bold: false,
        }
    }
}

/// Read-only mapping from tone to style, handed to the reporter.
#[derive(Debug, Clone)]
pub struct Palette {
    pub neutral: Style,
    pub emphasis: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
}

impl Palette {
    /// ANSI colors via `colored`, which still honours `NO_COLOR` and
    /// non-tty output on its own.
    pub fn ansi() -> Self {
        Palette {
            neutral: Style::plain(),
            emphasis: Style {
                color: None,
                bold: true,
            },
            success: Style::color(Color::Green),
            warning: Style::color(Color::Yellow),
            error: Style::color(Color::Red),
            info: Style::color(Color::Cyan),
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Palette {
            neutral: Style::plain(),
            emphasis: Style::plain(),
            success: Style::plain(),
            warning: Style::plain(),
            error: Style::plain(),
            info: Style::plain(),
        }
    }

    pub fn style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Neutral => self.neutral,
            Tone::Emphasis => self.emphasis,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Error => self.error,
            Tone::Info => self.info,
        }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        let style = self.style(tone);
        if style == Style::plain() || text.is_empty() {
            return text.to_string();
        }

        let mut painted = text.normal();
        if let Some(color) = style.color {
            painted = painted.color(color);
        }
        if style.bold {
            painted = painted.bold();
        }
        painted.to_string()
    }
}
