//! Row-by-row schedule table.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table};
use ratatui::Frame;

use mortcalc_core::format::NumberFormatter;
use mortcalc_core::result::ScheduleRow;

use crate::styles::{faded, ColorTheme};

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = ["Month", "Payment", "Interest", "Principal", "Remaining"];

/// Formatted schedule rows with a scroll position.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    rows: Vec<[String; 5]>,
    offset: usize,
}

impl ScheduleTable {
    /// Format every row of `schedule`.
    #[must_use]
    pub fn new(schedule: &[ScheduleRow], fmt: &NumberFormatter) -> Self {
        let rows = schedule
            .iter()
            .map(|r| {
                [
                    r.month.to_string(),
                    fmt.format_currency(r.payment),
                    fmt.format_currency(r.interest),
                    fmt.format_currency(r.principal),
                    fmt.format_currency(r.remaining),
                ]
            })
            .collect();
        Self { rows, offset: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Formatted cells of row `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String; 5]> {
        self.rows.get(index)
    }

    /// Index of the first visible row.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.rows.len().saturating_sub(1));
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Render the visible rows under a header line.
    pub fn render(&self, frame: &mut Frame, area: Rect, opacity: f64, theme: &ColorTheme) {
        let visible = area.height.saturating_sub(3) as usize;
        let body: Vec<Row> = self
            .rows
            .iter()
            .skip(self.offset)
            .take(visible)
            .map(|cells| Row::new(cells.iter().map(String::as_str)))
            .collect();

        let title = if self.rows.is_empty() {
            " Schedule ".to_string()
        } else {
            format!(
                " Schedule ({}-{} of {}) ",
                (self.offset + 1).min(self.rows.len()),
                (self.offset + visible).min(self.rows.len()),
                self.rows.len()
            )
        };

        let widths = [
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ];
        let table = Table::new(body, widths)
            .header(
                Row::new(HEADERS).style(faded(
                    Style::default().add_modifier(Modifier::BOLD),
                    opacity,
                )),
            )
            .style(faded(theme.text_style(), opacity))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(faded(Style::default().fg(theme.border), opacity)),
            );
        frame.render_widget(table, area);
    }
}
