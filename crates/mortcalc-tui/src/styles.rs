//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub principal: Color,
    pub interest: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            principal: Color::Magenta,
            interest: Color::Yellow,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

/// Approximate a fade on a terminal: invisible text below 0.2 opacity,
/// dimmed text until fully opaque.
#[must_use]
pub fn faded(style: Style, opacity: f64) -> Style {
    if opacity < 0.2 {
        style.fg(Color::Black).add_modifier(Modifier::HIDDEN)
    } else if opacity < 1.0 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_steps() {
        let base = Style::default().fg(Color::White);
        assert!(faded(base, 0.0).add_modifier.contains(Modifier::HIDDEN));
        assert!(faded(base, 0.5).add_modifier.contains(Modifier::DIM));
        assert_eq!(faded(base, 1.0), base);
    }

    #[test]
    fn series_colors_differ() {
        let theme = ColorTheme::default();
        assert_ne!(theme.principal, theme.interest);
    }
}
