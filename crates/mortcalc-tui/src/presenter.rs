//! Results presenter: turns a calculation result into the summary
//! counters, the principal share gauge, the chart and the table, and owns
//! the error panel message.

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use mortcalc_core::animation::{CounterAnimation, CounterArena};
use mortcalc_core::constants::{COUNTER_DURATION, COUNTER_START_DELAY, PROGRESS_APPLY_DELAY};
use mortcalc_core::format::NumberFormatter;
use mortcalc_core::result::{CalculationResult, SummaryFigure};

use crate::chart::ScheduleChart;
use crate::styles::{faded, ColorTheme};
use crate::summary::{render_summary, CounterKind, SummaryLine};
use crate::table::ScheduleTable;
use crate::view_state::{Panel, ViewStateController};

/// A value animated on the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Counter {
    Figure(SummaryFigure),
    Payments,
    PrincipalShare,
}

impl Counter {
    /// Counters in display order.
    pub const ALL: [Counter; 7] = [
        Self::Figure(SummaryFigure::MonthlyPayment),
        Self::Figure(SummaryFigure::Principal),
        Self::Figure(SummaryFigure::TotalPaid),
        Self::Figure(SummaryFigure::Overpayment),
        Self::Figure(SummaryFigure::CashTotal),
        Self::Payments,
        Self::PrincipalShare,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Figure(figure) => figure.label(),
            Self::Payments => "Payments",
            Self::PrincipalShare => "Principal share",
        }
    }

    #[must_use]
    pub fn kind(self) -> CounterKind {
        match self {
            Self::Figure(_) => CounterKind::Currency,
            Self::Payments => CounterKind::Number,
            Self::PrincipalShare => CounterKind::Percent,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn target(self, result: &CalculationResult) -> f64 {
        match self {
            Self::Figure(figure) => result.figure(figure),
            Self::Payments => result.schedule.len() as f64,
            Self::PrincipalShare => result.principal_share_percent(),
        }
    }
}

/// Gauge value that switches to a new target at a fixed instant.
#[derive(Debug, Clone, Copy, Default)]
struct DelayedValue {
    previous: f64,
    target: f64,
    apply_at: Option<Instant>,
}

impl DelayedValue {
    fn schedule(&mut self, target: f64, apply_at: Instant, now: Instant) {
        self.previous = self.value(now);
        self.target = target;
        self.apply_at = Some(apply_at);
    }

    fn value(&self, now: Instant) -> f64 {
        match self.apply_at {
            Some(at) if now >= at => self.target,
            _ => self.previous,
        }
    }
}

/// Owns everything drawn in the error and results panels.
pub struct ResultsPresenter {
    formatter: NumberFormatter,
    theme: ColorTheme,
    view: ViewStateController,
    counters: CounterArena<Counter>,
    progress: DelayedValue,
    chart: Option<ScheduleChart>,
    table: ScheduleTable,
    error: Option<String>,
    result: Option<CalculationResult>,
    charts_built: u64,
}

impl ResultsPresenter {
    #[must_use]
    pub fn new(formatter: NumberFormatter) -> Self {
        Self {
            formatter,
            theme: ColorTheme::default(),
            view: ViewStateController::new(),
            counters: CounterArena::new(),
            progress: DelayedValue::default(),
            chart: None,
            table: ScheduleTable::default(),
            error: None,
            result: None,
            charts_built: 0,
        }
    }

    /// Show a successful result.
    ///
    /// The chart and table are rebuilt at once; counters restart from zero
    /// after [`COUNTER_START_DELAY`], and the gauge takes its new value
    /// [`PROGRESS_APPLY_DELAY`] after that.
    pub fn present(&mut self, result: CalculationResult, now: Instant) {
        self.view.hide(Panel::Error, now);
        self.view.show(Panel::Results, now);

        let counters_start = now + COUNTER_START_DELAY;
        for counter in Counter::ALL {
            self.counters.start(
                counter,
                CounterAnimation::new(counter.target(&result), counters_start, COUNTER_DURATION),
            );
        }
        self.progress.schedule(
            result.principal_share_percent(),
            counters_start + PROGRESS_APPLY_DELAY,
            now,
        );

        if let Some(old) = self.chart.take() {
            tracing::debug!(bars = old.len(), "disposing previous chart");
        }
        self.chart = Some(ScheduleChart::new(&result.schedule, self.formatter));
        self.charts_built += 1;
        self.table = ScheduleTable::new(&result.schedule, &self.formatter);

        tracing::debug!(rows = result.schedule.len(), "result presented");
        self.result = Some(result);
    }

    /// Show `message` in the error panel and fade the results out.
    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.view.hide(Panel::Results, now);
        self.error = Some(message.into());
        self.view.show(Panel::Error, now);
    }

    /// Settle finished panel transitions.
    pub fn tick(&mut self, now: Instant) {
        self.view.tick(now);
    }

    /// Message currently in the error panel.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The result being displayed.
    #[must_use]
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> &ViewStateController {
        &self.view
    }

    #[must_use]
    pub fn chart(&self) -> Option<&ScheduleChart> {
        self.chart.as_ref()
    }

    /// How many charts have been built since start.
    #[must_use]
    pub fn charts_built(&self) -> u64 {
        self.charts_built
    }

    #[must_use]
    pub fn table(&self) -> &ScheduleTable {
        &self.table
    }

    /// Formatted value of `counter` at `now`, or `None` before any result.
    #[must_use]
    pub fn counter_text(&self, counter: Counter, now: Instant) -> Option<String> {
        self.counters
            .sample(counter, now)
            .map(|v| counter.kind().format(&self.formatter, v))
    }

    /// Whether every counter has reached its target.
    #[must_use]
    pub fn counters_finished(&self, now: Instant) -> bool {
        self.counters.all_finished(now)
    }

    /// Principal share shown by the gauge at `now`, in percent.
    #[must_use]
    pub fn progress_value(&self, now: Instant) -> f64 {
        self.progress.value(now)
    }

    pub fn hover_next(&mut self) {
        if let Some(chart) = self.chart.as_mut() {
            chart.hover_next();
        }
    }

    pub fn hover_prev(&mut self) {
        if let Some(chart) = self.chart.as_mut() {
            chart.hover_prev();
        }
    }

    pub fn scroll_table_down(&mut self, n: usize) {
        self.table.scroll_down(n);
    }

    pub fn scroll_table_up(&mut self, n: usize) {
        self.table.scroll_up(n);
    }

    /// Draw whichever panels are in the layout at `now`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        let error_shown = self.view.is_in_layout(Panel::Error, now);
        let results_shown = self.view.is_in_layout(Panel::Results, now);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if error_shown { 3 } else { 0 }),
                Constraint::Min(0),
            ])
            .split(area);

        if error_shown {
            self.render_error(frame, chunks[0], now);
        }
        if results_shown {
            self.render_results(frame, chunks[1], now);
        } else if !error_shown {
            let hint = Paragraph::new("Press Enter to calculate.")
                .style(self.theme.muted_style())
                .block(Block::default().borders(Borders::ALL).title(" Results "));
            frame.render_widget(hint, chunks[1]);
        }
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let opacity = self.view.opacity(Panel::Error, now);
        let message = self.error.as_deref().unwrap_or_default();
        let paragraph = Paragraph::new(Line::styled(
            message,
            faded(self.theme.error_style(), opacity),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(faded(Style::default().fg(self.theme.error), opacity)),
        );
        frame.render_widget(paragraph, area);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_results(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        let opacity = self.view.opacity(Panel::Results, now);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Counter::ALL.len() as u16 + 3),
                Constraint::Percentage(50),
                Constraint::Min(4),
            ])
            .split(area);

        let lines: Vec<SummaryLine> = Counter::ALL
            .iter()
            .map(|&c| SummaryLine {
                label: c.label(),
                value: self.counter_text(c, now).unwrap_or_default(),
            })
            .collect();
        render_summary(
            frame,
            chunks[0],
            &lines,
            self.progress_value(now),
            opacity,
            &self.theme,
        );

        if let Some(chart) = self.chart.as_mut() {
            chart.set_opacity(opacity);
            frame.render_widget(&*chart, chunks[1]);
        }
        self.table.render(frame, chunks[2], opacity, &self.theme);
    }
}
