//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use mortcalc_orchestration::interfaces::Action;

use crate::styles::ColorTheme;

/// Render the header: service address and any action in flight.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    service: &str,
    loading: &[Action],
    theme: &ColorTheme,
) {
    let mut spans = vec![
        Span::styled("mortcalc", theme.header_style()),
        Span::raw(format!(" | service: {service}")),
    ];
    for action in loading {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("{action}..."), theme.key_style()));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Mortgage calculator ");
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
