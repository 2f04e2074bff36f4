//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const SHORTCUTS: [(&str, &str); 6] = [
    ("Enter", "calculate"),
    ("Ctrl-E", "export"),
    ("Ctrl-T", "installment"),
    ("Tab", "next field"),
    ("\u{2190}\u{2192}", "strategy/chart"),
    ("Esc", "quit"),
];

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let mut spans = Vec::with_capacity(SHORTCUTS.len() * 2);
    for (i, (key, what)) in SHORTCUTS.iter().enumerate() {
        spans.push(Span::styled(*key, theme.key_style()));
        let sep = if i + 1 == SHORTCUTS.len() { "" } else { " | " };
        spans.push(Span::raw(format!(": {what}{sep}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
