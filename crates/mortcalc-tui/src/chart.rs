//! Stacked principal/interest bar chart of a repayment schedule.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use mortcalc_core::format::NumberFormatter;
use mortcalc_core::result::ScheduleRow;

use crate::styles::{faded, ColorTheme};

const BAR_GLYPH: &str = "█";

#[derive(Debug, Clone, Copy)]
struct Bar {
    month: u32,
    principal: f64,
    interest: f64,
}

impl Bar {
    fn total(self) -> f64 {
        self.principal.max(0.0) + self.interest.max(0.0)
    }
}

/// One bar per schedule row, principal stacked under interest, with a
/// hovered bar whose amounts are shown in a tooltip line.
#[derive(Debug, Clone)]
pub struct ScheduleChart {
    bars: Vec<Bar>,
    hover: Option<usize>,
    formatter: NumberFormatter,
    opacity: f64,
}

impl ScheduleChart {
    /// Build a chart for `schedule`.
    #[must_use]
    pub fn new(schedule: &[ScheduleRow], formatter: NumberFormatter) -> Self {
        Self {
            bars: schedule
                .iter()
                .map(|r| Bar {
                    month: r.month,
                    principal: r.principal,
                    interest: r.interest,
                })
                .collect(),
            hover: None,
            formatter,
            opacity: 1.0,
        }
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Index of the hovered bar.
    #[must_use]
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Hover the next bar; the first move hovers the first bar.
    pub fn hover_next(&mut self) {
        if self.bars.is_empty() {
            return;
        }
        self.hover = Some(match self.hover {
            None => 0,
            Some(i) => (i + 1).min(self.bars.len() - 1),
        });
    }

    /// Hover the previous bar; the first move hovers the last bar.
    pub fn hover_prev(&mut self) {
        if self.bars.is_empty() {
            return;
        }
        self.hover = Some(match self.hover {
            None => self.bars.len() - 1,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Set the fade level used when drawing.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    /// Tooltip lines for the hovered bar: the month, then one line per series.
    #[must_use]
    pub fn tooltip(&self) -> Option<Vec<String>> {
        let bar = self.bars.get(self.hover?)?;
        Some(vec![
            format!("Month {}", bar.month),
            format!("Principal: {}", self.formatter.format_currency(bar.principal)),
            format!("Interest: {}", self.formatter.format_currency(bar.interest)),
        ])
    }

    /// Bars that fit in `width` columns, scrolled so the hovered bar shows.
    fn visible(&self, width: usize) -> Range<usize> {
        let len = self.bars.len();
        if width == 0 || len == 0 {
            return 0..0;
        }
        if len <= width {
            return 0..len;
        }
        let start = match self.hover {
            Some(h) if h >= width => h + 1 - width,
            _ => 0,
        };
        start..start + width
    }
}

impl Widget for &ScheduleChart {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = ColorTheme::default();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Payments by month ")
            .border_style(faded(Style::default().fg(theme.border), self.opacity));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let tooltip = self
            .tooltip()
            .map_or_else(String::new, |lines| lines.join("  "));
        Paragraph::new(Line::styled(tooltip, faded(theme.text_style(), self.opacity)))
            .render(Rect { height: 1, ..inner }, buf);

        let legend = Line::from(vec![
            Span::styled(BAR_GLYPH, faded(Style::default().fg(theme.principal), self.opacity)),
            Span::raw(" Principal  "),
            Span::styled(BAR_GLYPH, faded(Style::default().fg(theme.interest), self.opacity)),
            Span::raw(" Interest"),
        ]);
        Paragraph::new(legend).render(
            Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            },
            buf,
        );

        let plot = Rect {
            y: inner.y + 1,
            height: inner.height - 2,
            ..inner
        };
        let range = self.visible(plot.width as usize);
        let max = self.bars[range.clone()]
            .iter()
            .map(|b| b.total())
            .fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return;
        }

        let rows = f64::from(plot.height);
        for (column, index) in range.enumerate() {
            let bar = self.bars[index];
            let total_cells = ((bar.total() / max) * rows).round() as u16;
            let principal_cells =
                (((bar.principal.max(0.0) / max) * rows).round() as u16).min(total_cells);
            let hovered = self.hover == Some(index);
            let x = plot.x + column as u16;

            for level in 0..total_cells.min(plot.height) {
                let y = plot.y + plot.height - 1 - level;
                let color = if level < principal_cells {
                    theme.principal
                } else {
                    theme.interest
                };
                let mut style = Style::default().fg(color);
                if hovered {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                buf[(x, y)]
                    .set_symbol(BAR_GLYPH)
                    .set_style(faded(style, self.opacity));
            }
        }
    }
}
