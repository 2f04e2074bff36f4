//! Activity log panel: one line per submitted action and its outcome.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Scroll position of the log panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// First visible line.
    pub offset: usize,
    /// Follow new lines as they arrive.
    pub auto_scroll: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Keep the newest line in view unless the user scrolled away.
    pub fn on_new_message(&mut self, total: usize) {
        if self.auto_scroll {
            self.offset = total.saturating_sub(1);
        }
    }

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scrolling onto the last line resumes following.
    pub fn scroll_down(&mut self, total: usize) {
        let last = total.saturating_sub(1);
        self.offset = (self.offset + 1).min(last);
        if self.offset >= last {
            self.auto_scroll = true;
        }
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render log lines from `offset`. `[ERROR]` and `[WARN]` lines are coloured.
pub fn render_logs(
    frame: &mut Frame,
    area: Rect,
    logs: &[String],
    offset: usize,
    theme: &ColorTheme,
) {
    let visible = area.height.saturating_sub(2) as usize;
    // Keep the last page full when following the tail.
    let start = offset.min(logs.len().saturating_sub(visible));

    let items: Vec<ListItem> = logs
        .iter()
        .skip(start)
        .take(visible)
        .map(|line| {
            let style = if line.starts_with("[ERROR]") {
                theme.error_style()
            } else if line.starts_with("[WARN]") {
                Style::default().fg(theme.warning)
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(line.as_str())).style(style)
        })
        .collect();

    let title = if logs.len() > visible {
        format!(" Activity ({}/{}) ", (offset + 1).min(logs.len()), logs.len())
    } else {
        " Activity ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(list, area);
}
