//! Summary panel: animated counters and the principal share gauge.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use mortcalc_core::format::NumberFormatter;

use crate::styles::{faded, ColorTheme};

/// How a counter value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    /// RUB amount, no fractional digits.
    Currency,
    /// Grouped whole number.
    Number,
    /// One fractional digit and a percent sign.
    Percent,
}

impl CounterKind {
    /// Format `value` for display.
    #[must_use]
    pub fn format(self, fmt: &NumberFormatter, value: f64) -> String {
        match self {
            Self::Currency => fmt.format_currency(value),
            Self::Number => fmt.format_number(value),
            Self::Percent => fmt.format_percent(value),
        }
    }
}

/// One line of the summary panel, already formatted for this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Render the counters and, under them, the principal share gauge.
pub fn render_summary(
    frame: &mut Frame,
    area: Rect,
    lines: &[SummaryLine],
    principal_share: f64,
    opacity: f64,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Summary ")
        .border_style(faded(Style::default().fg(theme.border), opacity));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let width = lines.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
    let text: Vec<Line> = lines
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", l.label),
                    faded(theme.muted_style(), opacity),
                ),
                Span::styled(l.value.clone(), faded(theme.header_style(), opacity)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(text), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(faded(
            Style::default().fg(theme.principal).bg(theme.interest),
            opacity,
        ))
        .label(format!("principal {principal_share:.1}%"))
        .ratio((principal_share / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, chunks[1]);
}
