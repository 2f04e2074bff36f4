//! CLI result presenter.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use mortcalc_core::format::NumberFormatter;
use mortcalc_core::result::CalculationResult;
use mortcalc_orchestration::error::ClientError;

use crate::output::{format_duration, schedule_table, summary_lines};
use crate::ui;

/// One line of presenter output, styled when printed.
///
/// `Display` gives the uncoloured text, which is what `NO_COLOR` prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Header(String),
    Figure {
        label: String,
        value: String,
        width: usize,
    },
    Text(String),
    Blank,
}

impl ReportLine {
    fn print(&self) {
        match self {
            Self::Header(text) => ui::print_header(text),
            Self::Figure {
                label,
                value,
                width,
            } => ui::print_figure(label, value, *width),
            Self::Text(_) | Self::Blank => println!("{self}"),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(text) => write!(f, "{}", ui::header_text(text)),
            Self::Figure {
                label,
                value,
                width,
            } => write!(f, "{}", ui::figure_text(label, value, *width)),
            Self::Text(text) => f.write_str(text),
            Self::Blank => Ok(()),
        }
    }
}

/// Prints calculation and export outcomes once, without animation.
pub struct CLIResultPresenter {
    formatter: NumberFormatter,
    show_schedule: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(formatter: NumberFormatter, show_schedule: bool, quiet: bool) -> Self {
        Self {
            formatter,
            show_schedule,
            quiet,
        }
    }

    /// Output lines for a result: the summary figures, the principal
    /// share, then the schedule table when enabled.
    #[must_use]
    pub fn render_result(&self, result: &CalculationResult) -> Vec<ReportLine> {
        if self.quiet {
            return vec![ReportLine::Text(
                self.formatter.format_currency(result.monthly_payment),
            )];
        }

        let mut summary = summary_lines(result, &self.formatter);
        summary.push((
            "Principal share",
            self.formatter.format_percent(result.principal_share_percent()),
        ));
        let width = summary.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

        let mut lines = vec![ReportLine::Header("Repayment summary".to_string())];
        lines.extend(
            summary
                .into_iter()
                .map(|(label, value)| ReportLine::Figure {
                    label: label.to_string(),
                    value,
                    width,
                }),
        );

        if self.show_schedule {
            lines.push(ReportLine::Blank);
            lines.push(ReportLine::Header("Schedule".to_string()));
            if result.schedule.is_empty() {
                lines.push(ReportLine::Text("  (empty schedule)".to_string()));
            } else {
                lines.extend(
                    schedule_table(&result.schedule, &self.formatter)
                        .into_iter()
                        .map(|line| ReportLine::Text(format!("  {line}"))),
                );
            }
        }
        lines
    }

    /// Print a calculation result.
    pub fn present_result(&self, result: &CalculationResult, elapsed: Duration) {
        for line in self.render_result(result) {
            line.print();
        }
        tracing::debug!(elapsed = %format_duration(elapsed), rows = result.schedule.len(), "result presented");
    }

    /// Report a saved export.
    pub fn present_export(&self, path: &Path) {
        if !self.quiet {
            ui::print_success(&format!("Schedule saved to {}", path.display()));
        }
    }

    /// Report a failed action. Always printed, even in quiet mode.
    pub fn present_error(&self, error: &ClientError) {
        ui::print_error(&error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortcalc_core::format::Locale;
    use mortcalc_core::result::ScheduleRow;

    fn result() -> CalculationResult {
        CalculationResult {
            monthly_payment: 19_334.59,
            principal: 2_400_000.0,
            total_amount_payments: 4_640_301.6,
            overpayment: 2_240_301.6,
            cash_total: 5_240_301.6,
            schedule: vec![ScheduleRow {
                month: 1,
                payment: 19_334.59,
                interest: 15_000.0,
                principal: 4_334.59,
                remaining: 2_395_665.41,
            }],
            ..Default::default()
        }
    }

    fn text(lines: &[ReportLine]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn quiet_prints_monthly_payment_only() {
        let presenter = CLIResultPresenter::new(NumberFormatter::new(Locale::EnUs), true, true);
        assert_eq!(text(&presenter.render_result(&result())), vec!["RUB\u{a0}19,335"]);
    }

    #[test]
    fn summary_with_share() {
        let presenter = CLIResultPresenter::new(NumberFormatter::new(Locale::RuRu), false, false);
        let lines = text(&presenter.render_result(&result()));
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "== Repayment summary ==");
        assert!(lines[1].starts_with("  Monthly payment"));
        assert!(lines[1].ends_with("19\u{a0}335\u{a0}₽"));
        assert!(lines[6].starts_with("  Principal share"));
        assert!(lines[6].ends_with("51.7%"));
    }

    #[test]
    fn figures_share_one_label_width() {
        let presenter = CLIResultPresenter::new(NumberFormatter::default(), false, false);
        let widths: Vec<usize> = presenter
            .render_result(&result())
            .iter()
            .filter_map(|line| match line {
                ReportLine::Figure { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn schedule_appended_when_requested() {
        let presenter = CLIResultPresenter::new(NumberFormatter::default(), true, false);
        let lines = presenter.render_result(&result());
        assert_eq!(lines.len(), 7 + 2 + 2);
        assert_eq!(lines[7], ReportLine::Blank);
        assert_eq!(lines[8], ReportLine::Header("Schedule".to_string()));
        assert!(lines[9].to_string().contains("Month"));
    }

    #[test]
    fn empty_schedule_is_not_an_error() {
        let presenter = CLIResultPresenter::new(NumberFormatter::default(), true, false);
        let empty = CalculationResult {
            schedule: Vec::new(),
            ..result()
        };
        let lines = text(&presenter.render_result(&empty));
        assert_eq!(lines.last().map(String::as_str), Some("  (empty schedule)"));
        presenter.present_result(&empty, Duration::from_millis(3));
    }

    #[test]
    fn zero_result_share_is_zero() {
        let presenter = CLIResultPresenter::new(NumberFormatter::default(), false, false);
        let lines = text(&presenter.render_result(&CalculationResult::default()));
        assert!(lines[6].ends_with("0.0%"));
    }

    #[test]
    fn present_paths_do_not_panic() {
        let presenter = CLIResultPresenter::new(NumberFormatter::default(), true, false);
        presenter.present_result(&result(), Duration::from_millis(120));
        presenter.present_export(Path::new("mortgage_schedule.csv"));
        presenter.present_error(&ClientError::Service {
            status: 429,
            message: "limit exceeded".into(),
        });
    }
}
