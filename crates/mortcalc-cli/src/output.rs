//! CLI output formatting.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mortcalc_core::format::NumberFormatter;
use mortcalc_core::result::{CalculationResult, ScheduleRow, SummaryFigure};
use mortcalc_orchestration::interfaces::ExportFile;

/// Schedule table column headers.
pub const SCHEDULE_HEADERS: [&str; 5] = ["Month", "Payment", "Interest", "Principal", "Remaining"];

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{secs:.2}s")
    }
}

/// Label and formatted value of each summary figure, in display order.
#[must_use]
pub fn summary_lines(result: &CalculationResult, fmt: &NumberFormatter) -> Vec<(&'static str, String)> {
    SummaryFigure::ALL
        .iter()
        .map(|&figure| (figure.label(), fmt.format_currency(result.figure(figure))))
        .collect()
}

/// One schedule row as display cells.
#[must_use]
pub fn schedule_cells(row: &ScheduleRow, fmt: &NumberFormatter) -> [String; 5] {
    [
        row.month.to_string(),
        fmt.format_currency(row.payment),
        fmt.format_currency(row.interest),
        fmt.format_currency(row.principal),
        fmt.format_currency(row.remaining),
    ]
}

/// Render the schedule as right-aligned text columns, header first.
#[must_use]
pub fn schedule_table(schedule: &[ScheduleRow], fmt: &NumberFormatter) -> Vec<String> {
    let rows: Vec<[String; 5]> = schedule.iter().map(|r| schedule_cells(r, fmt)).collect();

    let mut widths = SCHEDULE_HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:>w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(line(&SCHEDULE_HEADERS[..]));
    for cells in &rows {
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        out.push(line(&refs[..]));
    }
    out
}

/// Save an export to `target`. A directory target receives the file under
/// its standard name.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_export(target: &Path, file: &ExportFile) -> io::Result<PathBuf> {
    if target.is_dir() {
        file.save_in(target)
    } else {
        file.save_as(target)?;
        Ok(target.to_path_buf())
    }
}
